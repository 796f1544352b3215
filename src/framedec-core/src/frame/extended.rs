// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use std::fmt;

use serde::Serialize;

use super::{bracketed, metadata_line, FrameDecoder, DESCRIPTION, END, HOLES, START};
use crate::error::DecodeResult;
use crate::frame::MetadataFrame;
use crate::record::Record;

/// A `{start, end}` interval inside an [`ExtendedFrame`].
///
/// The bounds are opaque; no ordering between them is assumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Hole {
    pub start: u32,
    pub end: u32,
}

impl Hole {
    fn from_record(record: &Record<'_>) -> DecodeResult<Self> {
        Ok(Self {
            start: record.narrowed(START)?,
            end: record.narrowed(END)?,
        })
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.start, self.end)
    }
}

/// Metadata header plus a free-form description and a list of holes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtendedFrame {
    pub session: u32,
    pub progress: u64,
    pub in_response_to: u64,
    pub description: String,
    pub holes: Vec<Hole>,
}

impl FrameDecoder for ExtendedFrame {
    fn populate(&mut self, record: &Record<'_>) -> DecodeResult<()> {
        let MetadataFrame {
            session,
            progress,
            in_response_to,
        } = MetadataFrame::from_record(record)?;
        let holes = record
            .records(HOLES)?
            .iter()
            .map(Hole::from_record)
            .collect::<DecodeResult<Vec<_>>>()?;
        let description = record.string(DESCRIPTION)?;

        *self = Self {
            session,
            progress,
            in_response_to,
            description,
            holes,
        };
        Ok(())
    }

    fn render(&self) -> String {
        format!(
            "{} Desc: {}\n Holes: {}",
            metadata_line(self.session, self.progress, self.in_response_to),
            self.description,
            bracketed(&self.holes)
        )
    }
}

impl fmt::Display for ExtendedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
