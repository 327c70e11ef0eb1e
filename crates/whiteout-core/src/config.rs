// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Converter configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WhiteoutError};
use crate::types::Threshold;

/// File converted when nothing else is specified.
pub const DEFAULT_INPUT: &str = "logo.png";

/// Settings for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Channels must be strictly above this value to be cleared (default 240).
    pub threshold: Threshold,
    /// Image to read (default `logo.png`).
    pub input: PathBuf,
    /// Where to write the PNG. `None` overwrites the input.
    pub output: Option<PathBuf>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT,
            input: PathBuf::from(DEFAULT_INPUT),
            output: None,
        }
    }
}

impl ConvertConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            WhiteoutError::Config(format!("failed to read {}: {}", path.display(), err))
        })?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// The resolved output path.
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }

    /// `true` when the input file will be overwritten.
    pub fn is_in_place(&self) -> bool {
        self.output_path() == self.input
    }
}
