// ABOUTME: Logging configuration and structured logging setup for the grfmetrics binaries
// ABOUTME: tracing-subscriber with env-filter; compact output suited to batch runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

//! Structured logging for the batch binaries.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// The level comes from `GRF_LOG` (or `RUST_LOG`) when set; otherwise
/// `info`, or `debug` when `verbose` is requested. Safe to call once per
/// process; later calls are ignored.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("GRF_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
