// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Near-white to transparent pixel rule.

use image::{Rgba, RgbaImage};
use whiteout_core::Threshold;

/// Fully transparent white, written over every near-white pixel.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// `true` when red, green and blue are all strictly above `threshold`.
/// Alpha is not consulted.
pub fn is_near_white(pixel: &Rgba<u8>, threshold: Threshold) -> bool {
    let Rgba([r, g, b, _]) = *pixel;
    threshold.exceeded_by(r) && threshold.exceeded_by(g) && threshold.exceeded_by(b)
}

/// Map one pixel: near-white becomes [`TRANSPARENT_WHITE`], anything else is
/// returned untouched (alpha included).
pub fn clear_pixel(pixel: Rgba<u8>, threshold: Threshold) -> Rgba<u8> {
    if is_near_white(&pixel, threshold) {
        TRANSPARENT_WHITE
    } else {
        pixel
    }
}

/// Build a new image with every near-white pixel cleared.
///
/// Returns the new buffer and the number of pixels that were rewritten.
/// Dimensions and row-major pixel order are preserved.
pub fn clear_near_white(image: &RgbaImage, threshold: Threshold) -> (RgbaImage, u64) {
    let mut cleared = 0u64;
    let out = RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let pixel = *image.get_pixel(x, y);
        if is_near_white(&pixel, threshold) {
            cleared += 1;
            TRANSPARENT_WHITE
        } else {
            pixel
        }
    });
    (out, cleared)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Threshold = Threshold::DEFAULT;

    #[test]
    fn near_white_becomes_transparent_white() {
        assert_eq!(clear_pixel(Rgba([250, 250, 250, 255]), T), TRANSPARENT_WHITE);
        assert_eq!(clear_pixel(Rgba([241, 255, 248, 17]), T), TRANSPARENT_WHITE);
    }

    #[test]
    fn boundary_is_strict() {
        let at = Rgba([240, 240, 240, 255]);
        assert_eq!(clear_pixel(at, T), at);
        assert_eq!(clear_pixel(Rgba([241, 241, 241, 255]), T), TRANSPARENT_WHITE);
    }

    #[test]
    fn one_low_channel_keeps_pixel() {
        for pixel in [
            Rgba([240, 255, 255, 255]),
            Rgba([255, 240, 255, 255]),
            Rgba([255, 255, 240, 255]),
            // Pale yellow stays opaque.
            Rgba([255, 255, 200, 255]),
        ] {
            assert_eq!(clear_pixel(pixel, T), pixel);
        }
    }

    #[test]
    fn kept_pixel_retains_its_alpha() {
        let pixel = Rgba([10, 20, 30, 128]);
        assert_eq!(clear_pixel(pixel, T), pixel);
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let pixel = Rgba([225, 230, 235, 255]);
        assert_eq!(clear_pixel(pixel, T), pixel);
        assert_eq!(clear_pixel(pixel, Threshold(220)), TRANSPARENT_WHITE);
    }

    #[test]
    fn two_by_one_scenario() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([250, 250, 250, 255]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 255]));

        let (out, cleared) = clear_near_white(&img, T);

        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(cleared, 1);
        let pixels: Vec<_> = out.pixels().copied().collect();
        assert_eq!(pixels, vec![TRANSPARENT_WHITE, Rgba([10, 20, 30, 255])]);
    }

    #[test]
    fn clearing_is_idempotent() {
        let img = RgbaImage::from_fn(16, 9, |x, y| {
            let v = (x * 16 + y * 3) as u8;
            Rgba([v.wrapping_add(200), 250, v, (x * 10) as u8])
        });

        let (once, _) = clear_near_white(&img, T);
        let (twice, cleared_again) = clear_near_white(&once, T);

        assert_eq!(once, twice);
        // Transparent white still matches the rule, so it is rewritten to itself.
        assert_eq!(
            cleared_again,
            once.pixels().filter(|p| **p == TRANSPARENT_WHITE).count() as u64
        );
    }

    #[test]
    fn empty_image_is_fine() {
        let (out, cleared) = clear_near_white(&RgbaImage::new(0, 0), T);
        assert_eq!(out.dimensions(), (0, 0));
        assert_eq!(cleared, 0);
    }
}
