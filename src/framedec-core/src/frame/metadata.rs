// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use std::fmt;

use serde::Serialize;

use super::{metadata_line, FrameDecoder, IN_RESPONSE_TO, PROGRESS, SESSION};
use crate::error::DecodeResult;
use crate::record::Record;

/// Session header plus progress and in-response-to counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetadataFrame {
    pub session: u32,
    pub progress: u64,
    pub in_response_to: u64,
}

impl MetadataFrame {
    /// Decode the header fields shared by metadata, range and extended frames.
    pub(crate) fn from_record(record: &Record<'_>) -> DecodeResult<Self> {
        Ok(Self {
            session: record.narrowed(SESSION)?,
            progress: record.uint(PROGRESS)?,
            in_response_to: record.uint(IN_RESPONSE_TO)?,
        })
    }
}

impl FrameDecoder for MetadataFrame {
    fn populate(&mut self, record: &Record<'_>) -> DecodeResult<()> {
        *self = Self::from_record(record)?;
        Ok(())
    }

    fn render(&self) -> String {
        metadata_line(self.session, self.progress, self.in_response_to)
    }
}

impl fmt::Display for MetadataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
