// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod draft;
mod error;
mod ids;
mod schedule;
mod statistics;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use draft::{ActivityDraft, InstructorDraft, MemberDraft};
pub use error::{DomainError, FieldError, FieldErrorKind};
pub use ids::{ActivityId, EntityKind, InstructorId, MemberId, next_code};
pub use schedule::find_slot_conflict;
pub use statistics::ActivityStatistics;

// Re-export public types
pub use types::{Activity, Category, Email, Hour, Instructor, Member, NationalId, Phone, Weekday};
pub use validation::{
    ActivityFields, InstructorFields, MemberFields, age_in_years, parse_date,
    validate_activity_draft, validate_instructor_draft, validate_member_draft,
};
