// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only lookups over the store.

use std::collections::HashSet;

use clubhouse_domain::{
    Activity, ActivityId, EntityKind, Instructor, InstructorId, Member, MemberId,
};

use crate::error::CoreError;
use crate::store::ClubStore;

/// A member's activities split into the two lists an enrollment screen
/// shows side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberActivityView {
    /// Activities the member is enrolled in.
    pub enrolled: Vec<Activity>,
    /// Every other activity, open for enrollment.
    pub available: Vec<Activity>,
}

/// Fetches a member by code.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no member holds the code.
pub fn get_member<S: ClubStore>(store: &S, member_id: &MemberId) -> Result<Member, CoreError> {
    store.transaction(|tx| {
        tx.find_member(member_id)?
            .ok_or_else(|| CoreError::not_found(EntityKind::Member, member_id.as_str()))
    })
}

/// Fetches an instructor by code.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no instructor holds the code.
pub fn get_instructor<S: ClubStore>(
    store: &S,
    instructor_id: &InstructorId,
) -> Result<Instructor, CoreError> {
    store.transaction(|tx| {
        tx.find_instructor(instructor_id)?
            .ok_or_else(|| CoreError::not_found(EntityKind::Instructor, instructor_id.as_str()))
    })
}

/// Fetches an activity by code.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no activity holds the code.
pub fn get_activity<S: ClubStore>(
    store: &S,
    activity_id: &ActivityId,
) -> Result<Activity, CoreError> {
    store.transaction(|tx| {
        tx.find_activity(activity_id)?
            .ok_or_else(|| CoreError::not_found(EntityKind::Activity, activity_id.as_str()))
    })
}

/// Lists every member, ordered by code.
///
/// # Errors
///
/// Propagates store failures.
pub fn list_members<S: ClubStore>(store: &S) -> Result<Vec<Member>, CoreError> {
    store.transaction(|tx| tx.list_members())
}

/// Lists every instructor, ordered by code.
///
/// # Errors
///
/// Propagates store failures.
pub fn list_instructors<S: ClubStore>(store: &S) -> Result<Vec<Instructor>, CoreError> {
    store.transaction(|tx| tx.list_instructors())
}

/// Lists every activity, ordered by code.
///
/// # Errors
///
/// Propagates store failures.
pub fn list_activities<S: ClubStore>(store: &S) -> Result<Vec<Activity>, CoreError> {
    store.transaction(|tx| tx.list_activities())
}

/// Lists activities whose name contains `fragment`, case-insensitively.
///
/// # Errors
///
/// Propagates store failures.
pub fn search_activities<S: ClubStore>(
    store: &S,
    fragment: &str,
) -> Result<Vec<Activity>, CoreError> {
    store.transaction(|tx| tx.search_activities(fragment))
}

/// Lists the activities an instructor is responsible for.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no instructor holds the code.
pub fn instructor_activities<S: ClubStore>(
    store: &S,
    instructor_id: &InstructorId,
) -> Result<Vec<Activity>, CoreError> {
    store.transaction(|tx| {
        if tx.find_instructor(instructor_id)?.is_none() {
            return Err(CoreError::not_found(
                EntityKind::Instructor,
                instructor_id.as_str(),
            ));
        }
        tx.activities_for_instructor(instructor_id)
    })
}

/// Lists the members enrolled in an activity, ordered by code.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no activity holds the code.
pub fn activity_roster<S: ClubStore>(
    store: &S,
    activity_id: &ActivityId,
) -> Result<Vec<Member>, CoreError> {
    store.transaction(|tx| {
        if tx.find_activity(activity_id)?.is_none() {
            return Err(CoreError::not_found(
                EntityKind::Activity,
                activity_id.as_str(),
            ));
        }
        tx.members_for_activity(activity_id)
    })
}

/// Splits the activity catalogue into the member's enrolled and
/// available lists.
///
/// Membership in the enrolled list is decided by activity code, so the
/// two lists partition the catalogue exactly.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no member holds the code.
pub fn member_activity_view<S: ClubStore>(
    store: &S,
    member_id: &MemberId,
) -> Result<MemberActivityView, CoreError> {
    store.transaction(|tx| {
        if tx.find_member(member_id)?.is_none() {
            return Err(CoreError::not_found(EntityKind::Member, member_id.as_str()));
        }
        let enrolled: Vec<Activity> = tx.activities_for_member(member_id)?;
        let enrolled_ids: HashSet<&ActivityId> =
            enrolled.iter().map(|activity| &activity.activity_id).collect();
        let available: Vec<Activity> = tx
            .list_activities()?
            .into_iter()
            .filter(|activity| !enrolled_ids.contains(&activity.activity_id))
            .collect();
        Ok(MemberActivityView {
            enrolled,
            available,
        })
    })
}
