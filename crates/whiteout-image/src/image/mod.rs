// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module: the near-white pixel rule and the RGBA logo processor.

pub mod processor;
pub mod transparency;

pub use processor::LogoProcessor;
