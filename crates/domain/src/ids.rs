// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of digits in the numeric part of an entity code.
const CODE_DIGITS: usize = 3;

/// The three kinds of identified entities managed by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A facility member.
    Member,
    /// An instructor responsible for activities.
    Instructor,
    /// A scheduled activity.
    Activity,
}

impl EntityKind {
    /// Returns the code prefix for this entity kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Member => "S",
            Self::Instructor => "M",
            Self::Activity => "ACT",
        }
    }

    /// Returns the lowercase display name of this entity kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Instructor => "instructor",
            Self::Activity => "activity",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derives the next sequential code for an entity kind.
///
/// `max_existing` is the maximal existing code sharing the kind's prefix,
/// as read from the store immediately before calling (a stale maximum can
/// produce a duplicate across concurrent sessions; the storage layer's
/// unique constraint is the backstop).
///
/// With no existing code the sequence starts at `001`. A code whose digits
/// cannot be parsed falls back to the `999` sentinel instead of failing;
/// this reproduces the legacy data-quality workaround and is not a
/// uniqueness guarantee. Widths beyond 999 are not supported.
#[must_use]
pub fn next_code(kind: EntityKind, max_existing: Option<&str>) -> String {
    let prefix: &str = kind.prefix();
    let Some(max) = max_existing else {
        return format!("{prefix}001");
    };
    max.strip_prefix(prefix)
        .and_then(|digits| digits.parse::<u32>().ok())
        .and_then(|n| n.checked_add(1))
        .map_or_else(|| format!("{prefix}999"), |n| format!("{prefix}{n:03}"))
}

/// Checks that `value` is the kind's prefix followed by exactly 3 digits.
fn is_valid_code(kind: EntityKind, value: &str) -> bool {
    value.strip_prefix(kind.prefix()).is_some_and(|digits| {
        digits.len() == CODE_DIGITS && digits.chars().all(|c| c.is_ascii_digit())
    })
}

macro_rules! entity_code {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name {
            code: String,
        }

        impl $name {
            /// Parses a code, validating the prefix and digit width.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::InvalidEntityCode` if the value does
            /// not match the expected format.
            pub fn parse(value: &str) -> Result<Self, DomainError> {
                if is_valid_code($kind, value) {
                    Ok(Self {
                        code: value.to_owned(),
                    })
                } else {
                    Err(DomainError::InvalidEntityCode {
                        kind: $kind,
                        code: value.to_owned(),
                    })
                }
            }

            /// Returns the raw code (e.g. `S001`).
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.code
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code)
            }
        }
    };
}

entity_code!(
    /// A member code in the format `S###` (primary key, immutable).
    MemberId,
    EntityKind::Member
);

entity_code!(
    /// An instructor code in the format `M###` (primary key, immutable).
    InstructorId,
    EntityKind::Instructor
);

entity_code!(
    /// An activity code in the format `ACT###` (primary key, immutable).
    ActivityId,
    EntityKind::Activity
);
