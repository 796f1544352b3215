// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use std::fmt;

use serde::Serialize;

use super::{FrameDecoder, SESSION};
use crate::error::DecodeResult;
use crate::record::Record;

/// Heartbeat frame carrying only a session id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BeaconFrame {
    pub session: u32,
}

impl FrameDecoder for BeaconFrame {
    fn populate(&mut self, record: &Record<'_>) -> DecodeResult<()> {
        self.session = record.narrowed(SESSION)?;
        Ok(())
    }

    fn render(&self) -> String {
        format!("Beacon Session: {}", self.session)
    }
}

impl fmt::Display for BeaconFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use serde_json::json;

    #[test]
    fn test_populate_and_render() {
        let value = json!({ "session": 88 });
        let mut frame = BeaconFrame::default();
        frame.populate(&Record::new(&value).unwrap()).unwrap();
        assert_eq!(frame.session, 88);
        assert_eq!(frame.render(), "Beacon Session: 88");
    }

    #[test]
    fn test_ignores_unrelated_fields() {
        let value = json!({ "session": 1, "progress": 2, "holes": [] });
        let mut frame = BeaconFrame::default();
        frame.populate(&Record::new(&value).unwrap()).unwrap();
        assert_eq!(frame, BeaconFrame { session: 1 });
    }

    #[test]
    fn test_missing_session_leaves_frame_untouched() {
        let value = json!({});
        let mut frame = BeaconFrame { session: 7 };
        let err = frame.populate(&Record::new(&value).unwrap()).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { .. }));
        assert_eq!(frame.session, 7);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(BeaconFrame::default().to_string(), "Beacon Session: 0");
    }
}
