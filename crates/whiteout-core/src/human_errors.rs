// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command line.
//
// Every technical error is mapped to plain English with a suggestion and a
// severity that tells callers whether retrying makes sense.

use std::io::ErrorKind;

use crate::error::WhiteoutError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Interrupted write, full disk. Trying again may work.
    Transient,
    /// User must do something (fix the path, grant permission, fix the config).
    ActionRequired,
    /// Retrying won't help: the image is corrupt or can't be encoded.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Whether running the same command again could succeed unchanged.
    pub retriable: bool,
    pub severity: Severity,
}

/// Convert a `WhiteoutError` into a `HumanError`.
pub fn humanize_error(err: &WhiteoutError) -> HumanError {
    match err {
        WhiteoutError::InputPath { path, source } => match source.kind() {
            ErrorKind::NotFound => HumanError {
                message: format!("The image {} doesn't exist.", path.display()),
                suggestion: "Check the file name, or pass the image path as the first argument.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            },
            ErrorKind::PermissionDenied => HumanError {
                message: format!("Not allowed to read {}.", path.display()),
                suggestion: "Check the file's permissions and try again.".into(),
                retriable: false,
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: format!("Couldn't read {}.", path.display()),
                suggestion: format!("Make sure the path points to an image file. ({source})"),
                retriable: false,
                severity: Severity::ActionRequired,
            },
        },

        WhiteoutError::Decode { path, .. } => HumanError {
            message: format!("{} isn't an image we can read.", path.display()),
            suggestion: "The file may be damaged or in an unusual format. Try re-exporting it as PNG.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        WhiteoutError::Encode(_) => HumanError {
            message: "Couldn't encode the result as PNG.".into(),
            suggestion: "The image may be too large. Try a smaller image.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        WhiteoutError::OutputPath { path, source } => humanize_write_error(path, source),

        WhiteoutError::Config(detail) => HumanError {
            message: "The configuration file couldn't be read.".into(),
            suggestion: format!("Check the --config path. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        WhiteoutError::Serialization(detail) => HumanError {
            message: "The configuration file isn't valid JSON.".into(),
            suggestion: format!("Fix the file or remove the --config flag. ({detail})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },
    }
}

fn humanize_write_error(path: &std::path::Path, source: &std::io::Error) -> HumanError {
    match source.kind() {
        ErrorKind::StorageFull => HumanError {
            message: "The disk is full.".into(),
            suggestion: "Free up some space, then run the command again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
        ErrorKind::Interrupted | ErrorKind::TimedOut | ErrorKind::WouldBlock => HumanError {
            message: format!("Writing {} was interrupted.", path.display()),
            suggestion: "Run the command again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
        ErrorKind::PermissionDenied | ErrorKind::ReadOnlyFilesystem => HumanError {
            message: format!("Not allowed to write {}.", path.display()),
            suggestion: "Choose a different output path or check the folder's permissions.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
        ErrorKind::NotFound | ErrorKind::NotADirectory => HumanError {
            message: format!("The folder for {} doesn't exist.", path.display()),
            suggestion: "Create the folder first or choose a different output path.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },
        _ => HumanError {
            message: format!("Couldn't write {}.", path.display()),
            suggestion: format!("Check the output path and try again. (Detail: {source})"),
            retriable: false,
            severity: Severity::ActionRequired,
        },
    }
}
