// ABOUTME: Replays recorded pose-landmark frames through one scoring session
// ABOUTME: Reads JSON-lines frames, prints a JSON snapshot per frame and the final summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors
//!
//! Usage:
//! ```bash
//! # Score a recorded push-up set
//! formsense-replay --exercise push-up recording.jsonl
//!
//! # Read frames from stdin with a custom profile table
//! cat squats.jsonl | formsense-replay --exercise squat --profiles profiles.json
//! ```
//!
//! Each input line is one frame:
//! `{"timestamp": "2025-01-01T00:00:00Z", "landmarks": [{"x": .., "y": .., "z": .., "visibility": ..}, ...]}`
//! with landmarks in the detector's index order.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use formsense::config::AppConfig;
use formsense::models::{ExerciseType, LandmarkFrame, RawLandmark};
use formsense::session::{FinalSessionSummary, SessionRegistry};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "formsense-replay",
    about = "Replay recorded landmark frames through a FormSense session",
    long_about = "Reads JSON-lines landmark frames from a file or stdin, scores them as one \
                  workout session, and prints a JSON snapshot per frame followed by the session summary."
)]
struct Cli {
    /// Exercise to score (push-up, squat, jumping-jack)
    #[arg(long, short = 'e')]
    exercise: ExerciseType,

    /// JSON profile table overriding the built-in profiles
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Recorded frames; reads stdin when omitted
    input: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// One recorded frame as written by the browser-side detector
#[derive(Debug, Deserialize)]
struct RecordedFrame {
    timestamp: DateTime<Utc>,
    landmarks: Vec<RawLandmark>,
}

#[derive(Serialize)]
struct SummaryLine<'a> {
    summary: &'a FinalSessionSummary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if cli.verbose {
        config.logging.level = "debug".to_owned();
    }
    if cli.profiles.is_some() {
        config.profiles_path.clone_from(&cli.profiles);
    }
    config.logging.init()?;
    debug!("{}", config.summary());

    let mut sessions = SessionRegistry::new(config.evaluator_registry()?, config.engine.clone())?;
    let handle = sessions.start_session(cli.exercise)?;

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut out = BufWriter::new(io::stdout().lock());

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        let recorded: RecordedFrame = serde_json::from_str(&line)
            .with_context(|| format!("Invalid frame on line {}", index + 1))?;
        let frame = LandmarkFrame::from_indexed(recorded.timestamp, &recorded.landmarks);

        let snapshot = sessions.submit_frame(handle, &frame)?;
        serde_json::to_writer(&mut out, &snapshot)?;
        writeln!(out)?;
    }

    let summary = sessions.end_session(handle)?;
    serde_json::to_writer(&mut out, &SummaryLine { summary: &summary })?;
    writeln!(out)?;
    out.flush()?;

    info!(
        "Replayed {} frame(s): {} rep(s)",
        summary.total_frames(),
        summary.total_reps
    );
    Ok(())
}
