// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// whiteout-image: Turn the near-white background of a logo transparent.
//
// Provides the per-pixel rule (all of red, green and blue strictly above a
// threshold), an RGBA processor that loads any raster format and writes PNG,
// and the one-shot `process_logo` file conversion.

pub mod convert;
pub mod image;

pub use convert::{process_logo, process_logo_with};
pub use crate::image::processor::LogoProcessor;
pub use crate::image::transparency::{TRANSPARENT_WHITE, clear_near_white, clear_pixel, is_near_white};
