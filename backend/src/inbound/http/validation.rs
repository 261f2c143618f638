//! Field validation errors shared by inbound HTTP handlers.

use serde_json::json;

use crate::domain::{Error, TagValidationError};

/// Detail codes attached to `invalid_request` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldErrorCode {
    MissingField,
    BlankValue,
    TooLong,
    InvalidCharacter,
}

impl FieldErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::BlankValue => "blank_value",
            Self::TooLong => "too_long",
            Self::InvalidCharacter => "invalid_character",
        }
    }
}

/// HTTP field name as it appears in request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn field_error(field: FieldName, code: FieldErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        FieldErrorCode::MissingField,
        format!("missing required field: {name}"),
    )
}

/// Map tag name validation failures onto `field`.
pub(crate) fn tag_name_error(field: FieldName, err: TagValidationError) -> Error {
    let code = match err {
        TagValidationError::BlankName => FieldErrorCode::BlankValue,
        TagValidationError::NameTooLong { .. } => FieldErrorCode::TooLong,
        TagValidationError::ControlCharacter { .. } => FieldErrorCode::InvalidCharacter,
    };
    field_error(field, code, err.to_string())
}
