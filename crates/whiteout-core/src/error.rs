// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Whiteout.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all Whiteout operations.
///
/// Reading and writing are kept apart so callers can tell a corrupt input
/// (not worth retrying) from a failed write (possibly transient).
#[derive(Debug, Error)]
pub enum WhiteoutError {
    // -- Input --
    #[error("cannot read input image {}: {source}", .path.display())]
    InputPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {}: {detail}", .path.display())]
    Decode { path: PathBuf, detail: String },

    // -- Output --
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("cannot write output image {}: {source}", .path.display())]
    OutputPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -- Configuration --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, WhiteoutError>;
