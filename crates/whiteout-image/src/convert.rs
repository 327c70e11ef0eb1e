// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One-shot file conversion: read an image, clear its near-white pixels,
// write PNG.
//
// The input is fully decoded, transformed and PNG-encoded in memory before
// the output path is opened, so `input == output` overwrites in place without
// any read/write aliasing.

use std::path::Path;

use tracing::info;

use whiteout_core::config::ConvertConfig;
use whiteout_core::error::Result;
use whiteout_core::types::{ConversionReport, Threshold};

use crate::image::processor::LogoProcessor;

/// Convert `input_path` to a transparent-background PNG at `output_path`
/// using the stock threshold of 240.
pub fn process_logo(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<()> {
    convert_file(input_path.as_ref(), output_path.as_ref(), Threshold::DEFAULT).map(|_| ())
}

/// Run the conversion described by `config` and report what changed.
pub fn process_logo_with(config: &ConvertConfig) -> Result<ConversionReport> {
    convert_file(&config.input, config.output_path(), config.threshold)
}

fn convert_file(input: &Path, output: &Path, threshold: Threshold) -> Result<ConversionReport> {
    let report = LogoProcessor::open(input)?
        .clear_background(threshold)
        .save_png(output)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        %threshold,
        cleared = report.cleared_pixels,
        total = report.total_pixels,
        ratio = report.cleared_ratio(),
        "Logo converted"
    );
    Ok(report)
}
