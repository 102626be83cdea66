// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity drafts: proposed field values as captured at the boundary,
//! prior to validation and persistence.
//!
//! Every field is raw text. The validation engine converts a draft into
//! typed fields exactly once; nothing downstream re-parses draft text.

use serde::{Deserialize, Serialize};

/// Proposed field values for creating or updating a member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDraft {
    /// Full name.
    pub full_name: String,
    /// National identity document.
    pub national_id: String,
    /// Date of birth (`YYYY-MM-DD`).
    pub birth_date: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Join date (`YYYY-MM-DD`).
    pub join_date: String,
    /// Membership category (`A` through `E`).
    pub category: String,
}

/// Proposed field values for creating or updating an instructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorDraft {
    /// Full name.
    pub full_name: String,
    /// National identity document.
    pub national_id: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Join date (`YYYY-MM-DD`).
    pub join_date: String,
    /// Informal display name; blank for none.
    pub nickname: String,
}

/// Proposed field values for creating or updating an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDraft {
    /// Display name.
    pub name: String,
    /// Day of the week (canonical English name).
    pub weekday: String,
    /// Start hour as text (24-hour clock).
    pub hour: String,
    /// Free-text description; blank for none.
    pub description: String,
    /// Monthly base price as text (whole currency units).
    pub monthly_base_price: String,
    /// Code of the responsible instructor (`M###`).
    pub instructor_id: String,
}
