// ABOUTME: grf-cli - batch command-line front end for the grfmetrics analysis pipeline
// ABOUTME: Jump, drop-landing, drop-jump, and MVIC subcommands over directories of trial CSVs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors
//!
//! Usage:
//! ```bash
//! # Bilateral CMJ trials from a single plate, force in column 2
//! grf-cli jump --movement cmj --column 2 results/*.csv --out cmj-report
//!
//! # Single-leg jumps, limb taken from the LEFT/RIGHT file-name convention
//! grf-cli jump --movement slj --column 2 --infer-side slj/*.csv --out slj-report
//!
//! # Dual-plate drop landings from a 30 cm box
//! grf-cli drop-landing --left-column 2 --right-column 5 \
//!     --body-mass-kg 72.5 landings/*.csv --out dl-report
//!
//! # Drop jumps with the rebound analysis seeded from the box height
//! grf-cli drop-jump --column 2 --body-mass-kg 72.5 --drop-height-m 0.30 \
//!     dj/*.csv --out dj-report
//!
//! # Isometric trials: baseline window at 0.5 s, corrected signals + table
//! grf-cli mvic --baseline-start 0.5 --out-dir corrected \
//!     --table mvic.csv llr/*.csv
//! ```

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use grfmetrics::logging;
use grfmetrics::MovementType;

#[derive(Parser)]
#[command(
    name = "grf-cli",
    about = "Force-plate batch analysis",
    long_about = "Batch analysis of vertical ground-reaction-force trials: jumps, drop \
                  landings, drop jumps, and isometric MVIC extraction."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze countermovement or single-leg jump trials
    Jump(JumpArgs),
    /// Analyze drop-landing (land-and-hold) trials
    DropLanding(DropLandingArgs),
    /// Analyze drop-jump (rebound) trials
    DropJump(DropJumpArgs),
    /// Baseline-correct isometric trials and extract MVICs
    Mvic(MvicArgs),
}

/// Jump protocol selector
#[derive(Clone, Copy, ValueEnum)]
enum JumpMovement {
    /// Bilateral countermovement jump
    Cmj,
    /// Single-leg countermovement jump
    Slj,
}

impl From<JumpMovement> for MovementType {
    fn from(movement: JumpMovement) -> Self {
        match movement {
            JumpMovement::Cmj => Self::Cmj,
            JumpMovement::Slj => Self::Slj,
        }
    }
}

/// Force-channel selection shared by the plate-based subcommands: either a
/// single column, or a left/right pair for dual-plate trials.
#[derive(clap::Args)]
struct ChannelArgs {
    /// Zero-based force column for single-plate trials
    #[arg(long, conflicts_with_all = ["left_column", "right_column"])]
    column: Option<usize>,

    /// Zero-based force column of the left plate (dual-plate trials)
    #[arg(long, requires = "right_column")]
    left_column: Option<usize>,

    /// Zero-based force column of the right plate (dual-plate trials)
    #[arg(long, requires = "left_column")]
    right_column: Option<usize>,
}

#[derive(clap::Args)]
struct JumpArgs {
    /// Jump protocol
    #[arg(long, value_enum)]
    movement: JumpMovement,

    #[command(flatten)]
    channels: ChannelArgs,

    /// Acquisition rate in Hz
    #[arg(long, default_value_t = 1000.0)]
    sample_rate: f64,

    /// Externally measured body mass in kg (otherwise derived from quiet stance)
    #[arg(long)]
    body_mass_kg: Option<f64>,

    /// Tag each trial's limb from a LEFT/RIGHT substring in the file name
    #[arg(long)]
    infer_side: bool,

    /// Also write the individual table as JSON
    #[arg(long)]
    json: bool,

    /// Directory the result tables are written to
    #[arg(long, default_value = "grf-results")]
    out: PathBuf,

    /// Trial CSV files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(clap::Args)]
struct DropLandingArgs {
    #[command(flatten)]
    channels: ChannelArgs,

    /// Acquisition rate in Hz
    #[arg(long, default_value_t = 1000.0)]
    sample_rate: f64,

    /// Measured body mass in kg
    #[arg(long)]
    body_mass_kg: f64,

    /// Tag each trial's limb from a LEFT/RIGHT substring in the file name
    #[arg(long)]
    infer_side: bool,

    /// Also write the individual table as JSON
    #[arg(long)]
    json: bool,

    /// Directory the result tables are written to
    #[arg(long, default_value = "grf-results")]
    out: PathBuf,

    /// Trial CSV files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(clap::Args)]
struct DropJumpArgs {
    #[command(flatten)]
    channels: ChannelArgs,

    /// Acquisition rate in Hz
    #[arg(long, default_value_t = 1000.0)]
    sample_rate: f64,

    /// Measured body mass in kg
    #[arg(long)]
    body_mass_kg: f64,

    /// Box/drop height in meters
    #[arg(long)]
    drop_height_m: f64,

    /// Tag each trial's limb from a LEFT/RIGHT substring in the file name
    #[arg(long)]
    infer_side: bool,

    /// Also write the individual table as JSON
    #[arg(long)]
    json: bool,

    /// Directory the result tables are written to
    #[arg(long, default_value = "grf-results")]
    out: PathBuf,

    /// Trial CSV files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(clap::Args)]
struct MvicArgs {
    /// Acquisition rate in Hz
    #[arg(long, default_value_t = 2000.0)]
    sample_rate: f64,

    /// Start of the 0.5 s baseline window, in seconds from record start
    #[arg(long)]
    baseline_start: f64,

    /// Directory the corrected signals are written to
    #[arg(long, default_value = "corrected")]
    out_dir: PathBuf,

    /// MVIC table destination (appended to and deduplicated if it exists)
    #[arg(long, default_value = "mvic.csv")]
    table: PathBuf,

    /// Isometric signal files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Jump(args) => commands::run_jump(&args),
        Command::DropLanding(args) => commands::run_drop_landing(&args),
        Command::DropJump(args) => commands::run_drop_jump(&args),
        Command::Mvic(args) => commands::run_mvic(&args),
    }
}
