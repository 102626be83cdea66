// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_domain::{ActivityDraft, ActivityId, InstructorDraft, InstructorId, MemberDraft, MemberId};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes; each one is
/// dispatched through [`crate::apply`] inside a single transactional
/// scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new member; the member code is generated.
    CreateMember {
        /// The proposed field values.
        draft: MemberDraft,
    },
    /// Update an existing member in place; the code never changes.
    UpdateMember {
        /// The member to update.
        member_id: MemberId,
        /// The proposed field values.
        draft: MemberDraft,
    },
    /// Remove a member and their enrollments.
    DeleteMember {
        /// The member to remove.
        member_id: MemberId,
    },
    /// Register a new instructor; the instructor code is generated.
    CreateInstructor {
        /// The proposed field values.
        draft: InstructorDraft,
    },
    /// Update an existing instructor in place; the code never changes.
    UpdateInstructor {
        /// The instructor to update.
        instructor_id: InstructorId,
        /// The proposed field values.
        draft: InstructorDraft,
    },
    /// Remove an instructor. Blocked while the instructor is responsible
    /// for any activity.
    DeleteInstructor {
        /// The instructor to remove.
        instructor_id: InstructorId,
    },
    /// Create a new activity; the activity code is generated. Blocked
    /// when the responsible instructor already holds the slot.
    CreateActivity {
        /// The proposed field values.
        draft: ActivityDraft,
    },
    /// Update an existing activity in place; the code never changes.
    /// The slot check excludes the activity's own record.
    UpdateActivity {
        /// The activity to update.
        activity_id: ActivityId,
        /// The proposed field values.
        draft: ActivityDraft,
    },
    /// Remove an activity. Blocked while any member is enrolled.
    DeleteActivity {
        /// The activity to remove.
        activity_id: ActivityId,
    },
    /// Enroll a member in an activity. Idempotent.
    Enroll {
        /// The member to enroll.
        member_id: MemberId,
        /// The target activity.
        activity_id: ActivityId,
    },
    /// Remove a member from an activity's roster. Idempotent.
    Unenroll {
        /// The member to remove.
        member_id: MemberId,
        /// The target activity.
        activity_id: ActivityId,
    },
}
