// ABOUTME: Subcommand implementations for grf-cli: session setup, batch ingest, table export
// ABOUTME: Per-trial failures are reported and excluded; configuration errors abort before any file is read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 grfmetrics contributors

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tracing::{info, warn};

use grfmetrics::analysis::isometric::IsometricTrial;
use grfmetrics::{
    export, ingest, AnalysisError, AnalysisSession, BodyMass, MovementType, MvicTable, PlateSetup,
    Side, TrialContext, TrialInput,
};

use crate::{ChannelArgs, DropJumpArgs, DropLandingArgs, JumpArgs, MvicArgs};

/// Resolved channel selection
enum Channels {
    Single(usize),
    Dual { left: usize, right: usize },
}

impl Channels {
    fn resolve(args: &ChannelArgs) -> anyhow::Result<Self> {
        match (args.column, args.left_column, args.right_column) {
            (Some(col), None, None) => Ok(Self::Single(col)),
            (None, Some(left), Some(right)) => Ok(Self::Dual { left, right }),
            _ => Err(AnalysisError::configuration(
                "select either --column, or --left-column with --right-column",
            )
            .into()),
        }
    }

    fn plates(&self) -> PlateSetup {
        match self {
            Self::Single(_) => PlateSetup::Single,
            Self::Dual { .. } => PlateSetup::Dual,
        }
    }
}

/// Read every trial file, run the batch, and export the tables.
fn run_plate_session(
    context: TrialContext,
    channels: &Channels,
    files: &[PathBuf],
    infer_side: bool,
    out: &Path,
    json: bool,
) -> anyhow::Result<()> {
    let sample_rate = context.sample_rate_hz;
    let mut session = AnalysisSession::new(context);

    let mut inputs = Vec::with_capacity(files.len());
    for path in files {
        let id = ingest::trial_id(path);
        let side = if infer_side {
            Side::infer_from_name(&id)
        } else {
            None
        };
        let input = match channels {
            Channels::Single(col) => {
                ingest::read_force_trace(path, *col, sample_rate).map(TrialInput::Single)
            }
            Channels::Dual { left, right } => {
                ingest::read_dual_trace(path, *left, *right, sample_rate).map(TrialInput::Dual)
            }
        };
        match input {
            Ok(input) => inputs.push((id, side, input)),
            Err(err) => session.record_failure(id, err),
        }
    }

    session.process_batch(&inputs);
    export_tables(&session, out, json)?;
    report(&session);
    Ok(())
}

/// Write the individual table plus whichever aggregate tables the protocol
/// calls for.
fn export_tables(session: &AnalysisSession, out: &Path, json: bool) -> anyhow::Result<()> {
    std::fs::create_dir_all(out)
        .with_context(|| format!("cannot create output directory {}", out.display()))?;

    let table = session.table();
    export::write_trial_table(&out.join("individual.csv"), table)?;
    if json {
        export::write_table_json(&out.join("individual.json"), table)?;
    }
    if table.trial_count() == 0 {
        warn!("no trials survived processing; aggregate tables skipped");
        return Ok(());
    }

    match session.context().plates {
        PlateSetup::Dual => {
            export::write_average_table(&out.join("average.csv"), &table.average()?)?;
            let lsi = table.symmetry()?;
            for issue in &lsi.issues {
                warn!(%issue, "symmetry metric skipped");
            }
            export::write_symmetry_table(&out.join("lsi.csv"), &lsi)?;
        }
        PlateSetup::Single => {
            // Side-tagged sessions report Left/Right means with LSI columns;
            // everything else gets the plain cross-trial average.
            match table.side_averages() {
                Ok(sides) => {
                    for issue in &sides.issues {
                        warn!(%issue, "LSI left empty");
                    }
                    export::write_side_average_table(&out.join("average.csv"), &sides)?;
                }
                Err(_) => {
                    export::write_average_table(&out.join("average.csv"), &table.average()?)?;
                }
            }
        }
    }
    Ok(())
}

fn report(session: &AnalysisSession) {
    let summary = session.summary();
    info!(
        processed = summary.processed,
        failed = summary.failed,
        "session finished"
    );
    for failure in session.failures() {
        warn!(trial = %failure.trial, error = %failure.error, "excluded");
    }
}

pub fn run_jump(args: &JumpArgs) -> anyhow::Result<()> {
    let channels = Channels::resolve(&args.channels)?;
    let body_mass = args
        .body_mass_kg
        .map_or(BodyMass::FromQuietStance, BodyMass::MeasuredKg);
    let context = TrialContext::new(
        args.movement.into(),
        channels.plates(),
        args.sample_rate,
        body_mass,
        None,
    )?;
    run_plate_session(context, &channels, &args.files, args.infer_side, &args.out, args.json)
}

pub fn run_drop_landing(args: &DropLandingArgs) -> anyhow::Result<()> {
    let channels = Channels::resolve(&args.channels)?;
    let context = TrialContext::new(
        MovementType::DropLanding,
        channels.plates(),
        args.sample_rate,
        BodyMass::MeasuredKg(args.body_mass_kg),
        None,
    )?;
    run_plate_session(context, &channels, &args.files, args.infer_side, &args.out, args.json)
}

pub fn run_drop_jump(args: &DropJumpArgs) -> anyhow::Result<()> {
    let channels = Channels::resolve(&args.channels)?;
    let context = TrialContext::new(
        MovementType::DropJump,
        channels.plates(),
        args.sample_rate,
        BodyMass::MeasuredKg(args.body_mass_kg),
        Some(args.drop_height_m),
    )?;
    run_plate_session(context, &channels, &args.files, args.infer_side, &args.out, args.json)
}

pub fn run_mvic(args: &MvicArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("cannot create output directory {}", args.out_dir.display()))?;

    let mut table = MvicTable::new();
    let mut failed = 0usize;
    for path in &args.files {
        if let Err(err) = process_isometric_file(path, args, &mut table) {
            warn!(file = %path.display(), %err, "isometric trial skipped");
            failed += 1;
        }
    }

    if table.rows().is_empty() {
        anyhow::bail!("no isometric trials were processed successfully");
    }
    export::export_mvic_table(&args.table, &table)?;
    info!(
        processed = table.rows().len(),
        failed,
        table = %args.table.display(),
        "MVIC batch finished"
    );
    Ok(())
}

fn process_isometric_file(
    path: &Path,
    args: &MvicArgs,
    table: &mut MvicTable,
) -> anyhow::Result<()> {
    let filename = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    let signal = ingest::read_isometric_signal(path)?;
    let mut trial = IsometricTrial::load(filename.clone(), signal, args.sample_rate)?;
    trial.select_baseline(args.baseline_start)?;
    let epoch = trial.correct()?;

    let corrected = trial
        .corrected()
        .ok_or_else(|| AnalysisError::configuration("corrected signal missing after correct()"))?;
    let dest = export::corrected_signal_path(&args.out_dir, &filename);
    export::write_corrected_signal(&dest, corrected)?;
    trial.mark_saved()?;

    table.push(filename, epoch.mvic_n);
    Ok(())
}
