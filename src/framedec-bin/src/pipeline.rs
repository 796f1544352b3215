// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Line-oriented decode loop: one JSON record per line in, one rendered
//! frame per record out.

use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use thiserror::Error;
use tracing::{debug, error};

use framedec_core::{DecodeError, DecodePolicy, Frame, FrameDecoder, FrameKind, Record};

use crate::config::DecodeConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered summary lines
    #[default]
    Text,
    /// One JSON object per frame
    Json,
}

#[derive(Debug, Clone)]
pub struct DecodeSettings {
    pub kind: Option<FrameKind>,
    pub policy: DecodePolicy,
    pub report_truncation: bool,
    pub format: OutputFormat,
}

impl DecodeSettings {
    pub fn from_config(cfg: &DecodeConfig, format: OutputFormat) -> Self {
        Self {
            kind: cfg.kind,
            policy: cfg.policy,
            report_truncation: cfg.report_truncation,
            format,
        }
    }
}

#[derive(Debug, Error)]
pub enum LineError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub decoded: usize,
    pub failed: usize,
}

/// Decode a single line of input into a frame.
///
/// The line is taken as raw bytes; invalid UTF-8 surfaces as a JSON error.
pub fn decode_line(line: &[u8], settings: &DecodeSettings) -> Result<Frame, LineError> {
    let value: serde_json::Value = serde_json::from_slice(line)?;
    let record = Record::new(&value)?
        .with_policy(settings.policy)
        .with_truncation_reports(settings.report_truncation);
    let frame = match settings.kind {
        Some(kind) => Frame::decode(kind, &record)?,
        None => Frame::decode_tagged(&record)?,
    };
    Ok(frame)
}

/// Decode every non-blank line of `input`, writing frames to `output`.
///
/// Lines that fail to decode, including lines that are not valid UTF-8, are
/// logged and skipped. Only I/O errors abort.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    settings: &DecodeSettings,
) -> io::Result<Summary> {
    let mut summary = Summary::default();
    let mut line = Vec::new();
    let mut line_no = 0usize;
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        line_no += 1;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        match decode_line(&line, settings) {
            Ok(frame) => {
                debug!(line = line_no, kind = %frame.kind(), "decoded frame");
                write_frame(&mut output, &frame, settings.format)?;
                summary.decoded += 1;
            }
            Err(e) => {
                error!(line = line_no, "Skipping record: {}", e);
                summary.failed += 1;
            }
        }
    }
    output.flush()?;
    Ok(summary)
}

fn write_frame<W: Write>(output: &mut W, frame: &Frame, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(output, "{}", frame.render()),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, frame)?;
            writeln!(output)
        }
    }
}
