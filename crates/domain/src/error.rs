// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::EntityKind;

/// Errors that can occur when constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity code does not match the format for its kind.
    InvalidEntityCode {
        /// The kind of entity the code was parsed for.
        kind: EntityKind,
        /// The rejected code.
        code: String,
    },
    /// A national identity document is not 8 digits followed by an
    /// uppercase letter.
    InvalidNationalId(String),
    /// A phone number is not exactly 9 digits.
    InvalidPhone(String),
    /// An email address does not match the accepted pattern.
    InvalidEmail(String),
    /// A membership category is not one of A through E.
    InvalidCategory(String),
    /// A weekday is not one of the seven canonical day names.
    InvalidWeekday(String),
    /// An hour is outside the facility's operating hours.
    HourOutOfRange(u8),
    /// Failed to parse a date from a string.
    DateParse {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEntityCode { kind, code } => {
                write!(
                    f,
                    "Invalid {kind} code '{code}': expected '{}' followed by 3 digits",
                    kind.prefix()
                )
            }
            Self::InvalidNationalId(value) => {
                write!(
                    f,
                    "Invalid national id '{value}': expected 8 digits followed by an uppercase letter"
                )
            }
            Self::InvalidPhone(value) => {
                write!(f, "Invalid phone '{value}': expected exactly 9 digits")
            }
            Self::InvalidEmail(value) => {
                write!(f, "Invalid email address '{value}'")
            }
            Self::InvalidCategory(value) => {
                write!(f, "Invalid category '{value}': expected A, B, C, D or E")
            }
            Self::InvalidWeekday(value) => {
                write!(f, "Invalid weekday '{value}': expected Monday through Sunday")
            }
            Self::HourOutOfRange(hour) => {
                write!(
                    f,
                    "Hour {hour} is outside operating hours ({}-{})",
                    crate::types::Hour::MIN,
                    crate::types::Hour::MAX
                )
            }
            Self::DateParse { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Classification of a field-level validation failure.
///
/// `Parse` (text that is not a number or date) and `Range` (a number that
/// parsed but falls outside its allowed range) are deliberately distinct
/// so callers can render them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// A required field was left blank.
    Required,
    /// The field does not match its expected format.
    Format,
    /// A numeric or date field could not be interpreted.
    Parse,
    /// A value parsed but falls outside its allowed range.
    Range,
    /// The value collides with an existing record.
    Duplicate,
    /// The field references an entity that does not resolve.
    UnknownReference,
}

/// A single field-level violation found while validating a draft.
///
/// Validation collects every violation it detects for a draft rather than
/// stopping at the first, so one round trip reports all problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The draft field the violation applies to.
    pub field: &'static str,
    /// The violation classification.
    pub kind: FieldErrorKind,
    /// Human-readable description of the violation.
    pub message: String,
}

impl FieldError {
    /// Creates a new `FieldError`.
    #[must_use]
    pub const fn new(field: &'static str, kind: FieldErrorKind, message: String) -> Self {
        Self {
            field,
            kind,
            message,
        }
    }

    /// A required field was left blank.
    #[must_use]
    pub fn required(field: &'static str) -> Self {
        Self::new(
            field,
            FieldErrorKind::Required,
            String::from("field is required"),
        )
    }

    /// The field failed a format rule.
    #[must_use]
    pub fn format(field: &'static str, error: &DomainError) -> Self {
        Self::new(field, FieldErrorKind::Format, error.to_string())
    }

    /// The field could not be parsed as a number or date.
    #[must_use]
    pub fn parse(field: &'static str, message: String) -> Self {
        Self::new(field, FieldErrorKind::Parse, message)
    }

    /// The field parsed but is out of range.
    #[must_use]
    pub fn range(field: &'static str, message: String) -> Self {
        Self::new(field, FieldErrorKind::Range, message)
    }

    /// The field duplicates an existing record.
    #[must_use]
    pub fn duplicate(field: &'static str, message: String) -> Self {
        Self::new(field, FieldErrorKind::Duplicate, message)
    }

    /// The field references an entity that does not exist.
    #[must_use]
    pub fn unknown_reference(field: &'static str, message: String) -> Self {
        Self::new(field, FieldErrorKind::UnknownReference, message)
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
