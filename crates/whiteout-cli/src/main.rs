// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Whiteout: make a logo's white background transparent.
//
// Entry point. Initialises logging, resolves the conversion settings from
// the command line and optional config file, and runs one conversion.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use whiteout_core::human_errors::humanize_error;
use whiteout_core::{ConvertConfig, Result, Threshold};

/// Turn the near-white pixels of an image transparent and save it as PNG.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Image to convert [default: logo.png]
    input: Option<PathBuf>,

    /// Where to write the PNG [default: overwrite INPUT]
    output: Option<PathBuf>,

    /// Clear pixels whose red, green and blue are all above this value [default: 240]
    #[arg(short, long)]
    threshold: Option<u8>,

    /// JSON file with threshold/input/output settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let status = run(&args, &mut std::io::stdout().lock(), &mut std::io::stderr().lock());
    ExitCode::from(status)
}

/// Run one conversion, reporting on `out` and `err`. Returns the exit status.
///
/// On failure the error's own text (codec or filesystem message included) is
/// always written to `err`, whatever the log filter, followed by the plain
/// English summary.
fn run(args: &Args, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match resolve_config(args).and_then(|config| whiteout_image::process_logo_with(&config)) {
        Ok(_) => {
            let _ = writeln!(out, "Logo processed successfully.");
            0
        }
        Err(error) => {
            let human = humanize_error(&error);
            tracing::error!(
                error = %error,
                severity = ?human.severity,
                retriable = human.retriable,
                "conversion failed"
            );
            let _ = writeln!(err, "error: {error}");
            let _ = writeln!(err, "{}\n{}", human.message, human.suggestion);
            if human.retriable {
                let _ = writeln!(err, "Running the same command again may work.");
            }
            1
        }
    }
}

/// Merge the config file (if any) with command-line overrides.
///
/// Command-line values win. A new INPUT without an OUTPUT means "convert in
/// place" unless the config file names an output.
fn resolve_config(args: &Args) -> Result<ConvertConfig> {
    let mut config = match &args.config {
        Some(path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };
    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if let Some(output) = &args.output {
        config.output = Some(output.clone());
    }
    if let Some(threshold) = args.threshold {
        config.threshold = Threshold(threshold);
    }
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}
