// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the transparency converter.

use serde::{Deserialize, Serialize};

/// Strict lower bound a colour channel must exceed for a pixel to count as
/// near-white. All three of red, green and blue must be above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Threshold(pub u8);

impl Threshold {
    /// The stock logo threshold.
    pub const DEFAULT: Threshold = Threshold(240);

    pub fn value(self) -> u8 {
        self.0
    }

    /// `true` when `channel` is strictly above the threshold.
    pub fn exceeded_by(self, channel: u8) -> bool {
        channel > self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary of one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionReport {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of pixels scanned (`width * height`).
    pub total_pixels: u64,
    /// Number of pixels rewritten to transparent white.
    pub cleared_pixels: u64,
}

impl ConversionReport {
    /// Fraction of the image that became transparent, in `[0, 1]`.
    pub fn cleared_ratio(&self) -> f64 {
        if self.total_pixels == 0 {
            return 0.0;
        }
        self.cleared_pixels as f64 / self.total_pixels as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let t = Threshold::DEFAULT;
        assert!(!t.exceeded_by(240));
        assert!(t.exceeded_by(241));
        assert!(t.exceeded_by(255));
    }

    #[test]
    fn threshold_serializes_as_bare_number() {
        let json = serde_json::to_string(&Threshold(200)).unwrap();
        assert_eq!(json, "200");
        let back: Threshold = serde_json::from_str("231").unwrap();
        assert_eq!(back, Threshold(231));
    }

    #[test]
    fn cleared_ratio_handles_empty_image() {
        let report = ConversionReport {
            width: 0,
            height: 0,
            total_pixels: 0,
            cleared_pixels: 0,
        };
        assert_eq!(report.cleared_ratio(), 0.0);

        let report = ConversionReport {
            width: 2,
            height: 2,
            total_pixels: 4,
            cleared_pixels: 1,
        };
        assert!((report.cleared_ratio() - 0.25).abs() < f64::EPSILON);
    }
}
