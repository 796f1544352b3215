// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Frame shapes and the decode/render contract they share.

pub mod beacon;
pub mod extended;
pub mod metadata;
pub mod range;

use std::fmt;

use serde::Serialize;

pub use beacon::BeaconFrame;
pub use extended::{ExtendedFrame, Hole};
pub use metadata::MetadataFrame;
pub use range::RangeFrame;

use crate::error::{DecodeError, DecodeResult};
use crate::kind::FrameKind;
use crate::record::{FieldKind, Record};

pub(crate) const SESSION: &str = "session";
pub(crate) const PROGRESS: &str = "progress";
pub(crate) const IN_RESPONSE_TO: &str = "in_response_to";
pub(crate) const START: &str = "start";
pub(crate) const END: &str = "end";
pub(crate) const DESCRIPTION: &str = "description";
pub(crate) const HOLES: &str = "holes";

/// Record field holding the frame kind for self-describing records.
pub const KIND_FIELD: &str = "type";

/// Contract implemented by every frame shape.
pub trait FrameDecoder {
    /// Extract this frame's fields from `record`, ignoring any others.
    ///
    /// On success the receiver is fully replaced, so sequence fields never
    /// accumulate across calls. On error the receiver is left unchanged.
    fn populate(&mut self, record: &Record<'_>) -> DecodeResult<()>;

    /// Human-readable summary of the current field values.
    fn render(&self) -> String;
}

/// Populate any frame through the [`FrameDecoder`] contract.
pub fn populate_frame<F: FrameDecoder + ?Sized>(
    frame: &mut F,
    record: &Record<'_>,
) -> DecodeResult<()> {
    frame.populate(record)
}

/// Render any frame through the [`FrameDecoder`] contract.
pub fn render_frame<F: FrameDecoder + ?Sized>(frame: &F) -> String {
    frame.render()
}

fn metadata_line(session: u32, progress: u64, in_response_to: u64) -> String {
    format!("Metadata Session: {session} Progress: {progress} Inrespto: {in_response_to}")
}

/// `[a b c]`, the list form used by range and extended frames.
fn bracketed<T: fmt::Display>(items: &[T]) -> String {
    let inner = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{inner}]")
}

/// One decoded frame of any supported shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Frame {
    Beacon(BeaconFrame),
    Metadata(MetadataFrame),
    Range(RangeFrame),
    Extended(ExtendedFrame),
}

impl Frame {
    /// Empty frame of the given kind.
    pub fn new(kind: FrameKind) -> Self {
        match kind {
            FrameKind::Beacon => Frame::Beacon(BeaconFrame::default()),
            FrameKind::Metadata => Frame::Metadata(MetadataFrame::default()),
            FrameKind::Range => Frame::Range(RangeFrame::default()),
            FrameKind::Extended => Frame::Extended(ExtendedFrame::default()),
        }
    }

    pub fn kind(&self) -> FrameKind {
        match self {
            Frame::Beacon(_) => FrameKind::Beacon,
            Frame::Metadata(_) => FrameKind::Metadata,
            Frame::Range(_) => FrameKind::Range,
            Frame::Extended(_) => FrameKind::Extended,
        }
    }

    /// Decode `record` as the caller-selected `kind`.
    pub fn decode(kind: FrameKind, record: &Record<'_>) -> DecodeResult<Self> {
        let mut frame = Frame::new(kind);
        frame.populate(record)?;
        Ok(frame)
    }

    /// Decode a record that names its own kind in the `type` field.
    pub fn decode_tagged(record: &Record<'_>) -> DecodeResult<Self> {
        let kind = match record.get(KIND_FIELD) {
            Some(serde_json::Value::String(name)) => name.parse::<FrameKind>()?,
            Some(other) => {
                return Err(DecodeError::KindMismatch {
                    field: KIND_FIELD.to_string(),
                    expected: FieldKind::String,
                    found: FieldKind::of(other),
                })
            }
            None => {
                return Err(DecodeError::MissingField {
                    field: KIND_FIELD.to_string(),
                })
            }
        };
        Frame::decode(kind, record)
    }
}

impl FrameDecoder for Frame {
    fn populate(&mut self, record: &Record<'_>) -> DecodeResult<()> {
        match self {
            Frame::Beacon(frame) => frame.populate(record),
            Frame::Metadata(frame) => frame.populate(record),
            Frame::Range(frame) => frame.populate(record),
            Frame::Extended(frame) => frame.populate(record),
        }
    }

    fn render(&self) -> String {
        match self {
            Frame::Beacon(frame) => frame.render(),
            Frame::Metadata(frame) => frame.render(),
            Frame::Range(frame) => frame.render(),
            Frame::Extended(frame) => frame.render(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
