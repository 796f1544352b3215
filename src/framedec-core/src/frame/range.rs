// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use std::fmt;

use serde::Serialize;

use super::{bracketed, metadata_line, FrameDecoder, END, START};
use crate::error::DecodeResult;
use crate::frame::MetadataFrame;
use crate::record::Record;

/// Metadata header plus parallel `start`/`end` offset sequences.
///
/// The two sequences are paired by index but nothing enforces equal length or
/// `start[i] <= end[i]`; they are stored and rendered exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RangeFrame {
    pub session: u32,
    pub progress: u64,
    pub in_response_to: u64,
    pub start: Vec<u64>,
    pub end: Vec<u64>,
}

impl FrameDecoder for RangeFrame {
    fn populate(&mut self, record: &Record<'_>) -> DecodeResult<()> {
        let MetadataFrame {
            session,
            progress,
            in_response_to,
        } = MetadataFrame::from_record(record)?;
        let start = record.uint_seq(START)?;
        let end = record.uint_seq(END)?;

        *self = Self {
            session,
            progress,
            in_response_to,
            start,
            end,
        };
        Ok(())
    }

    fn render(&self) -> String {
        format!(
            "{}\n Start: {}  End: {}",
            metadata_line(self.session, self.progress, self.in_response_to),
            bracketed(&self.start),
            bracketed(&self.end)
        )
    }
}

impl fmt::Display for RangeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
