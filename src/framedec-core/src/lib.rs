// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Decoding of untyped wire records into typed frames.
//!
//! A producer hands over a loosely structured JSON object; the caller picks a
//! [`FrameKind`] (or lets the record name it in its `type` field) and gets back
//! one of four fixed frame shapes, each able to render a one or two line
//! summary of itself.

pub mod error;
pub mod frame;
pub mod kind;
pub mod record;

pub use error::{DecodeError, DecodeResult};
pub use frame::{
    populate_frame, render_frame, BeaconFrame, ExtendedFrame, Frame, FrameDecoder, Hole,
    MetadataFrame, RangeFrame, KIND_FIELD,
};
pub use kind::FrameKind;
pub use record::{DecodePolicy, FieldKind, Record};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn populate_and_render<F: FrameDecoder + Default>(value: &serde_json::Value) -> String {
        let record = Record::new(value).unwrap();
        let mut frame = F::default();
        populate_frame(&mut frame, &record).unwrap();
        render_frame(&frame)
    }

    #[test]
    fn test_scenario_range() {
        let value = json!({
            "session": 0,
            "progress": 1,
            "in_response_to": 2,
            "start": [500, 600, 700],
            "end": [700, 800, 900],
        });
        assert_eq!(
            populate_and_render::<RangeFrame>(&value),
            "Metadata Session: 0 Progress: 1 Inrespto: 2\n Start: [500 600 700]  End: [700 800 900]"
        );
    }

    #[test]
    fn test_scenario_beacon() {
        let value = json!({ "session": 88 });
        assert_eq!(
            populate_and_render::<BeaconFrame>(&value),
            "Beacon Session: 88"
        );
    }

    #[test]
    fn test_scenario_extended() {
        let value = json!({
            "session": 99,
            "progress": 100,
            "in_response_to": 101,
            "description": "Hello",
            "holes": [{ "start": 11, "end": 12 }, { "start": 13, "end": 14 }],
        });
        assert_eq!(
            populate_and_render::<ExtendedFrame>(&value),
            "Metadata Session: 99 Progress: 100 Inrespto: 101 Desc: Hello\n Holes: [{11 12} {13 14}]"
        );
    }

    #[test]
    fn test_scenarios_through_frame_enum() {
        let value = json!({
            "session": 99,
            "progress": 100,
            "in_response_to": 101,
            "description": "Hello",
            "holes": [{ "start": 11, "end": 12 }],
        });
        let frame = Frame::decode(FrameKind::Metadata, &Record::new(&value).unwrap()).unwrap();
        assert_eq!(
            frame.to_string(),
            "Metadata Session: 99 Progress: 100 Inrespto: 101"
        );
    }
}
