// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::{ActivityId, InstructorId};
use crate::types::{Activity, Hour, Weekday};

/// Finds an activity that collides with assigning `instructor_id` to the
/// `(weekday, hour)` slot, if any.
///
/// Only pairwise collisions within one instructor's commitments are
/// detected; there is no cross-instructor or member-side double-booking
/// check. When re-validating an already-persisted activity, pass its own
/// code as `excluding` so the record does not collide with itself — the
/// create path passes `None` since the record does not exist yet.
#[must_use]
pub fn find_slot_conflict<'a>(
    existing: &'a [Activity],
    instructor_id: &InstructorId,
    weekday: Weekday,
    hour: Hour,
    excluding: Option<&ActivityId>,
) -> Option<&'a Activity> {
    existing.iter().find(|activity| {
        activity.instructor_id == *instructor_id
            && activity.occupies_slot(weekday, hour)
            && excluding != Some(&activity.activity_id)
    })
}
