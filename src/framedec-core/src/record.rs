// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Typed, read-only access to an untyped wire record.
//!
//! A [`Record`] borrows a JSON object produced by some external transport and
//! exposes its fields by name with kind checks. How missing or mistyped fields
//! are treated is decided by the record's [`DecodePolicy`], so every frame
//! decoder gets the same behaviour without repeating it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{DecodeError, DecodeResult};

/// How missing or mistyped fields are handled during decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Missing and mistyped fields are reported as errors.
    #[default]
    Strict,
    /// Missing and mistyped fields decode as zero values (`0`, `""`).
    Lenient,
}

/// Kind of a value found in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Null,
    Bool,
    Uint,
    Int,
    Float,
    String,
    Sequence,
    Record,
}

impl FieldKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => FieldKind::Null,
            Value::Bool(_) => FieldKind::Bool,
            Value::Number(n) if n.is_u64() => FieldKind::Uint,
            Value::Number(n) if n.is_i64() => FieldKind::Int,
            Value::Number(_) => FieldKind::Float,
            Value::String(_) => FieldKind::String,
            Value::Array(_) => FieldKind::Sequence,
            Value::Object(_) => FieldKind::Record,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Null => "null",
            FieldKind::Bool => "a boolean",
            FieldKind::Uint => "an unsigned integer",
            FieldKind::Int => "a negative integer",
            FieldKind::Float => "a float",
            FieldKind::String => "a string",
            FieldKind::Sequence => "a sequence",
            FieldKind::Record => "a record",
        };
        f.write_str(name)
    }
}

/// Borrowed view over one wire record.
///
/// Nested records (elements of a record sequence) carry a scope such as
/// `holes[1]` so that errors name the full path of the offending field.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    fields: Option<&'a Map<String, Value>>,
    scope: Option<String>,
    policy: DecodePolicy,
    report_truncation: bool,
}

impl<'a> Record<'a> {
    /// Wrap a JSON value. Only objects are records.
    pub fn new(value: &'a Value) -> DecodeResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self::from_map(fields)),
            other => Err(DecodeError::NotARecord {
                found: FieldKind::of(other),
            }),
        }
    }

    pub fn from_map(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields: Some(fields),
            scope: None,
            policy: DecodePolicy::default(),
            report_truncation: false,
        }
    }

    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Log a warning whenever a value loses high bits while narrowing.
    pub fn with_truncation_reports(mut self, enabled: bool) -> Self {
        self.report_truncation = enabled;
        self
    }

    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(name))
    }

    /// Read an unsigned integer at full 64-bit width.
    pub fn uint(&self, name: &str) -> DecodeResult<u64> {
        match self.get(name) {
            Some(value) => match value.as_u64() {
                Some(n) => Ok(n),
                None => self.degrade(self.mismatch(name, FieldKind::Uint, value)),
            },
            None => self.degrade(self.missing(name)),
        }
    }

    /// Read an unsigned integer and narrow it to 32 bits.
    ///
    /// High bits are dropped (`2^32 + 88` becomes `88`). This never fails on
    /// its own; it only warns when truncation reports are enabled.
    pub fn narrowed(&self, name: &str) -> DecodeResult<u32> {
        let wide = self.uint(name)?;
        let narrow = wide as u32;
        if self.report_truncation && u64::from(narrow) != wide {
            warn!(
                field = %self.qualify(name),
                original = wide,
                narrowed = narrow,
                "Truncation while narrowing to 32 bits"
            );
        }
        Ok(narrow)
    }

    pub fn string(&self, name: &str) -> DecodeResult<String> {
        match self.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => self.degrade(self.mismatch(name, FieldKind::String, other)),
            None => self.degrade(self.missing(name)),
        }
    }

    /// Read a sequence of unsigned integers in source order.
    ///
    /// An absent field, or one that is not a sequence, yields an empty vector
    /// under either policy. Elements are checked against the policy.
    pub fn uint_seq(&self, name: &str) -> DecodeResult<Vec<u64>> {
        let Some(items) = self.sequence(name) else {
            return Ok(Vec::new());
        };
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| match item.as_u64() {
                Some(n) => Ok(n),
                None => self.degrade(self.mismatch(&format!("{name}[{idx}]"), FieldKind::Uint, item)),
            })
            .collect()
    }

    /// Read a sequence of nested records in source order.
    ///
    /// Nested records inherit this record's policy. Under the lenient policy an
    /// element that is not an object becomes an empty record, so every field
    /// read from it decodes as zero.
    pub fn records(&self, name: &str) -> DecodeResult<Vec<Record<'a>>> {
        let Some(items) = self.sequence(name) else {
            return Ok(Vec::new());
        };
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let scope = self.qualify(&format!("{name}[{idx}]"));
                match item {
                    Value::Object(fields) => Ok(self.nested(Some(fields), scope)),
                    other => {
                        let err = DecodeError::KindMismatch {
                            field: scope.clone(),
                            expected: FieldKind::Record,
                            found: FieldKind::of(other),
                        };
                        self.degrade::<()>(err).map(|()| self.nested(None, scope))
                    }
                }
            })
            .collect()
    }

    fn sequence(&self, name: &str) -> Option<&'a [Value]> {
        match self.get(name) {
            Some(Value::Array(items)) => Some(items.as_slice()),
            Some(other) => {
                warn!(
                    field = %self.qualify(name),
                    found = %FieldKind::of(other),
                    "sequence field has the wrong kind; leaving it empty"
                );
                None
            }
            None => {
                debug!(field = %self.qualify(name), "sequence field absent; leaving it empty");
                None
            }
        }
    }

    fn nested(&self, fields: Option<&'a Map<String, Value>>, scope: String) -> Record<'a> {
        Record {
            fields,
            scope: Some(scope),
            policy: self.policy,
            report_truncation: self.report_truncation,
        }
    }

    fn degrade<T: Default>(&self, err: DecodeError) -> DecodeResult<T> {
        match self.policy {
            DecodePolicy::Strict => Err(err),
            DecodePolicy::Lenient => {
                debug!(error = %err, "substituting zero value");
                Ok(T::default())
            }
        }
    }

    fn qualify(&self, name: &str) -> String {
        match &self.scope {
            Some(scope) => format!("{scope}.{name}"),
            None => name.to_string(),
        }
    }

    fn missing(&self, name: &str) -> DecodeError {
        DecodeError::MissingField {
            field: self.qualify(name),
        }
    }

    fn mismatch(&self, name: &str, expected: FieldKind, value: &Value) -> DecodeError {
        DecodeError::KindMismatch {
            field: self.qualify(name),
            expected,
            found: FieldKind::of(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_new_rejects_non_object() {
        let value = json!([1, 2, 3]);
        let err = Record::new(&value).unwrap_err();
        assert_eq!(
            err,
            DecodeError::NotARecord {
                found: FieldKind::Sequence
            }
        );
    }

    #[test]
    fn test_field_kind_of_numbers() {
        assert_eq!(FieldKind::of(&json!(7)), FieldKind::Uint);
        assert_eq!(FieldKind::of(&json!(-7)), FieldKind::Int);
        assert_eq!(FieldKind::of(&json!(7.5)), FieldKind::Float);
    }

    #[test]
    fn test_uint_reads_full_width() {
        let value = json!({ "progress": u64::MAX });
        let record = Record::new(&value).unwrap();
        assert_eq!(record.uint("progress").unwrap(), u64::MAX);
    }

    #[test]
    fn test_uint_missing_strict() {
        let value = json!({});
        let record = Record::new(&value).unwrap();
        assert_eq!(
            record.uint("progress").unwrap_err(),
            DecodeError::MissingField {
                field: "progress".to_string()
            }
        );
    }

    #[test]
    fn test_uint_negative_is_kind_mismatch() {
        let value = json!({ "progress": -1 });
        let record = Record::new(&value).unwrap();
        assert_eq!(
            record.uint("progress").unwrap_err(),
            DecodeError::KindMismatch {
                field: "progress".to_string(),
                expected: FieldKind::Uint,
                found: FieldKind::Int,
            }
        );
    }

    #[test]
    fn test_lenient_substitutes_zero_values() {
        let value = json!({ "progress": "soon" });
        let record = Record::new(&value).unwrap().with_policy(DecodePolicy::Lenient);
        assert_eq!(record.uint("progress").unwrap(), 0);
        assert_eq!(record.uint("absent").unwrap(), 0);
        assert_eq!(record.string("absent").unwrap(), "");
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn warnings_during<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (result, text)
    }

    #[test]
    fn test_narrowed_wraps_around() {
        let value = json!({ "session": (1u64 << 32) + 88 });
        let record = Record::new(&value).unwrap();
        assert_eq!(record.narrowed("session").unwrap(), 88);
    }

    #[test]
    fn test_truncation_warning_when_enabled() {
        let value = json!({ "session": (1u64 << 32) + 88 });
        let record = Record::new(&value).unwrap().with_truncation_reports(true);
        let (narrow, logs) = warnings_during(|| record.narrowed("session").unwrap());
        assert_eq!(narrow, 88);
        assert!(logs.contains("Truncation while narrowing to 32 bits"), "{logs}");
        assert!(logs.contains("original=4294967384"), "{logs}");
        assert!(logs.contains("narrowed=88"), "{logs}");
    }

    #[test]
    fn test_truncation_silent_when_disabled_or_lossless() {
        let value = json!({ "session": (1u64 << 32) + 88, "small": 88 });
        let quiet = Record::new(&value).unwrap();
        let (_, logs) = warnings_during(|| quiet.narrowed("session").unwrap());
        assert!(logs.is_empty(), "{logs}");

        let reporting = Record::new(&value).unwrap().with_truncation_reports(true);
        let (_, logs) = warnings_during(|| reporting.narrowed("small").unwrap());
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn test_nested_records_inherit_truncation_reports() {
        let value = json!({ "holes": [{ "start": (1u64 << 32) + 1 }] });
        let record = Record::new(&value).unwrap().with_truncation_reports(true);
        let holes = record.records("holes").unwrap();
        let (_, logs) = warnings_during(|| holes[0].narrowed("start").unwrap());
        assert!(logs.contains("holes[0].start"), "{logs}");
    }

    #[test]
    fn test_string_kind_mismatch() {
        let value = json!({ "description": 5 });
        let record = Record::new(&value).unwrap();
        assert!(matches!(
            record.string("description"),
            Err(DecodeError::KindMismatch {
                expected: FieldKind::String,
                found: FieldKind::Uint,
                ..
            })
        ));
    }

    #[test]
    fn test_uint_seq_non_sequence_is_empty_under_strict() {
        let value = json!({ "start": 500 });
        let record = Record::new(&value).unwrap();
        assert!(record.uint_seq("start").unwrap().is_empty());
        assert!(record.uint_seq("end").unwrap().is_empty());
    }

    #[test]
    fn test_uint_seq_bad_element() {
        let value = json!({ "start": [1, "two", 3] });
        let strict = Record::new(&value).unwrap();
        assert_eq!(
            strict.uint_seq("start").unwrap_err(),
            DecodeError::KindMismatch {
                field: "start[1]".to_string(),
                expected: FieldKind::Uint,
                found: FieldKind::String,
            }
        );

        let lenient = strict.with_policy(DecodePolicy::Lenient);
        assert_eq!(lenient.uint_seq("start").unwrap(), vec![1, 0, 3]);
    }

    #[test]
    fn test_nested_errors_carry_path() {
        let value = json!({ "holes": [{ "start": 1, "end": 2 }, { "start": 3 }] });
        let record = Record::new(&value).unwrap();
        let holes = record.records("holes").unwrap();
        assert_eq!(holes.len(), 2);
        assert_eq!(holes[0].narrowed("end").unwrap(), 2);
        assert_eq!(
            holes[1].narrowed("end").unwrap_err(),
            DecodeError::MissingField {
                field: "holes[1].end".to_string()
            }
        );
    }

    #[test]
    fn test_records_non_object_element() {
        let value = json!({ "holes": [7] });
        let strict = Record::new(&value).unwrap();
        assert!(matches!(
            strict.records("holes"),
            Err(DecodeError::KindMismatch {
                expected: FieldKind::Record,
                ..
            })
        ));

        let lenient = strict.with_policy(DecodePolicy::Lenient);
        let holes = lenient.records("holes").unwrap();
        assert_eq!(holes.len(), 1);
        assert_eq!(holes[0].narrowed("start").unwrap(), 0);
    }
}
