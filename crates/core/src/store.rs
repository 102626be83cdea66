// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_domain::{Activity, ActivityId, Instructor, InstructorId, Member, MemberId};
use time::Date;

use crate::error::CoreError;

/// Raw aggregation result for one activity, as produced by the store's
/// statistics routine.
///
/// Fields are, in order: enrolled count, average age in completed
/// years, modal category letter (lexicographically smallest on a tie,
/// absent for an empty roster), and total monthly revenue. Values are
/// decoded into domain types by [`crate::statistics::activity_statistics`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawActivityStatistics(pub i64, pub f64, pub Option<char>, pub f64);

/// Operations available inside a store transaction.
///
/// Every mutation issued through a single `ClubTx` either persists in
/// full or not at all: returning `Err` from the closure passed to
/// [`ClubStore::transaction`] rolls back everything issued so far.
///
/// Every method reports store failures as `CoreError::ExternalFailure`.
#[allow(clippy::missing_errors_doc)]
pub trait ClubTx {
    // Members.

    fn find_member(&mut self, member_id: &MemberId) -> Result<Option<Member>, CoreError>;

    /// Looks a member up by national identity document, for duplicate
    /// detection.
    fn member_by_national_id(&mut self, national_id: &str) -> Result<Option<Member>, CoreError>;

    fn list_members(&mut self) -> Result<Vec<Member>, CoreError>;

    /// The highest member code currently stored, if any.
    fn max_member_code(&mut self) -> Result<Option<String>, CoreError>;

    fn insert_member(&mut self, member: &Member) -> Result<(), CoreError>;

    fn update_member(&mut self, member: &Member) -> Result<(), CoreError>;

    fn delete_member(&mut self, member_id: &MemberId) -> Result<(), CoreError>;

    // Instructors.

    fn find_instructor(
        &mut self,
        instructor_id: &InstructorId,
    ) -> Result<Option<Instructor>, CoreError>;

    fn instructor_by_national_id(
        &mut self,
        national_id: &str,
    ) -> Result<Option<Instructor>, CoreError>;

    fn list_instructors(&mut self) -> Result<Vec<Instructor>, CoreError>;

    fn max_instructor_code(&mut self) -> Result<Option<String>, CoreError>;

    fn insert_instructor(&mut self, instructor: &Instructor) -> Result<(), CoreError>;

    fn update_instructor(&mut self, instructor: &Instructor) -> Result<(), CoreError>;

    fn delete_instructor(&mut self, instructor_id: &InstructorId) -> Result<(), CoreError>;

    /// All activities the given instructor is responsible for.
    fn activities_for_instructor(
        &mut self,
        instructor_id: &InstructorId,
    ) -> Result<Vec<Activity>, CoreError>;

    // Activities.

    fn find_activity(&mut self, activity_id: &ActivityId) -> Result<Option<Activity>, CoreError>;

    fn list_activities(&mut self) -> Result<Vec<Activity>, CoreError>;

    /// Activities whose name contains the fragment, case-insensitively.
    fn search_activities(&mut self, fragment: &str) -> Result<Vec<Activity>, CoreError>;

    fn max_activity_code(&mut self) -> Result<Option<String>, CoreError>;

    fn insert_activity(&mut self, activity: &Activity) -> Result<(), CoreError>;

    fn update_activity(&mut self, activity: &Activity) -> Result<(), CoreError>;

    fn delete_activity(&mut self, activity_id: &ActivityId) -> Result<(), CoreError>;

    // Enrollments.

    fn enrollment_exists(
        &mut self,
        member_id: &MemberId,
        activity_id: &ActivityId,
    ) -> Result<bool, CoreError>;

    fn insert_enrollment(
        &mut self,
        member_id: &MemberId,
        activity_id: &ActivityId,
    ) -> Result<(), CoreError>;

    fn delete_enrollment(
        &mut self,
        member_id: &MemberId,
        activity_id: &ActivityId,
    ) -> Result<(), CoreError>;

    /// Removes every enrollment held by the member, as part of member
    /// deletion.
    fn delete_enrollments_for_member(&mut self, member_id: &MemberId) -> Result<(), CoreError>;

    fn activities_for_member(
        &mut self,
        member_id: &MemberId,
    ) -> Result<Vec<Activity>, CoreError>;

    fn members_for_activity(
        &mut self,
        activity_id: &ActivityId,
    ) -> Result<Vec<Member>, CoreError>;

    fn enrollment_count(&mut self, activity_id: &ActivityId) -> Result<u64, CoreError>;

    // Statistics.

    /// Runs the store's aggregation routine over the activity's roster.
    /// `today` anchors the age calculation.
    fn activity_statistics_raw(
        &mut self,
        activity_id: &ActivityId,
        today: Date,
    ) -> Result<RawActivityStatistics, CoreError>;
}

/// The persistence boundary for the club.
pub trait ClubStore {
    /// Runs `f` inside a single transaction; an `Err` return rolls back
    /// every mutation issued by the closure.
    ///
    /// # Errors
    ///
    /// Returns the closure's error, or `CoreError::ExternalFailure` when
    /// the transaction itself cannot commit.
    fn transaction<T, F>(&self, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut dyn ClubTx) -> Result<T, CoreError>;
}
