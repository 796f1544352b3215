// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Discriminant selecting which frame shape a record decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    Beacon,
    Metadata,
    Range,
    Extended,
}

impl FrameKind {
    pub const ALL: [FrameKind; 4] = [
        FrameKind::Beacon,
        FrameKind::Metadata,
        FrameKind::Range,
        FrameKind::Extended,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKind::Beacon => "beacon",
            FrameKind::Metadata => "metadata",
            FrameKind::Range => "range",
            FrameKind::Extended => "extended",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a frame kind name.
///
/// Case-insensitive. The legacy producer names (binfo, finfo, sinfo, xinfo)
/// are accepted as aliases.
impl FromStr for FrameKind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beacon" | "binfo" => Ok(FrameKind::Beacon),
            "metadata" | "finfo" => Ok(FrameKind::Metadata),
            "range" | "sinfo" => Ok(FrameKind::Range),
            "extended" | "xinfo" => Ok(FrameKind::Extended),
            _ => Err(DecodeError::UnknownKind(s.to_string())),
        }
    }
}
