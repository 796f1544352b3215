// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use thiserror::Error;

use crate::record::FieldKind;

/// Error returned when a record cannot be decoded into a frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("missing field `{field}`")]
    MissingField { field: String },

    #[error("field `{field}` is {found}, expected {expected}")]
    KindMismatch {
        field: String,
        expected: FieldKind,
        found: FieldKind,
    },

    #[error("record must be an object, got {found}")]
    NotARecord { found: FieldKind },

    #[error("unknown frame kind `{0}`")]
    UnknownKind(String),
}

pub type DecodeResult<T> = Result<T, DecodeError>;
