// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `ClubStore` implementation backed by a `SQLite` connection.
//!
//! Every store operation runs inside a Diesel transaction; a failing
//! closure rolls back all statements it issued.

use clubhouse::{ClubStore, ClubTx, CoreError, RawActivityStatistics};
use clubhouse_domain::{Activity, ActivityId, Instructor, InstructorId, Member, MemberId};
use diesel::Connection;
use diesel::SqliteConnection;
use time::Date;

use crate::error::PersistenceError;
use crate::{SqliteStore, mutations, queries, statistics};

/// Failure of a transactional closure.
///
/// Diesel requires the transaction error type to absorb its own errors;
/// this wrapper keeps the closure's `CoreError` separate from rollback
/// and commit failures.
enum TxFailure {
    Core(CoreError),
    Db(diesel::result::Error),
}

impl From<diesel::result::Error> for TxFailure {
    fn from(err: diesel::result::Error) -> Self {
        Self::Db(err)
    }
}

fn external(err: PersistenceError) -> CoreError {
    CoreError::ExternalFailure(err.to_string())
}

struct SqliteTx<'a> {
    conn: &'a mut SqliteConnection,
}

impl ClubStore for SqliteStore {
    fn transaction<T, F>(&self, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut dyn ClubTx) -> Result<T, CoreError>,
    {
        let mut conn = self.conn.borrow_mut();
        let outcome: Result<T, TxFailure> = conn.transaction(|conn| {
            let mut tx = SqliteTx { conn };
            f(&mut tx).map_err(TxFailure::Core)
        });
        outcome.map_err(|failure| match failure {
            TxFailure::Core(err) => err,
            TxFailure::Db(err) => CoreError::ExternalFailure(err.to_string()),
        })
    }
}

impl ClubTx for SqliteTx<'_> {
    fn find_member(&mut self, member_id: &MemberId) -> Result<Option<Member>, CoreError> {
        queries::find_member(self.conn, member_id).map_err(external)
    }

    fn member_by_national_id(&mut self, national_id: &str) -> Result<Option<Member>, CoreError> {
        queries::member_by_national_id(self.conn, national_id).map_err(external)
    }

    fn list_members(&mut self) -> Result<Vec<Member>, CoreError> {
        queries::list_members(self.conn).map_err(external)
    }

    fn max_member_code(&mut self) -> Result<Option<String>, CoreError> {
        queries::max_member_code(self.conn).map_err(external)
    }

    fn insert_member(&mut self, member: &Member) -> Result<(), CoreError> {
        mutations::insert_member(self.conn, member).map_err(external)
    }

    fn update_member(&mut self, member: &Member) -> Result<(), CoreError> {
        mutations::update_member(self.conn, member).map_err(external)
    }

    fn delete_member(&mut self, member_id: &MemberId) -> Result<(), CoreError> {
        mutations::delete_member(self.conn, member_id).map_err(external)
    }

    fn find_instructor(
        &mut self,
        instructor_id: &InstructorId,
    ) -> Result<Option<Instructor>, CoreError> {
        queries::find_instructor(self.conn, instructor_id).map_err(external)
    }

    fn instructor_by_national_id(
        &mut self,
        national_id: &str,
    ) -> Result<Option<Instructor>, CoreError> {
        queries::instructor_by_national_id(self.conn, national_id).map_err(external)
    }

    fn list_instructors(&mut self) -> Result<Vec<Instructor>, CoreError> {
        queries::list_instructors(self.conn).map_err(external)
    }

    fn max_instructor_code(&mut self) -> Result<Option<String>, CoreError> {
        queries::max_instructor_code(self.conn).map_err(external)
    }

    fn insert_instructor(&mut self, instructor: &Instructor) -> Result<(), CoreError> {
        mutations::insert_instructor(self.conn, instructor).map_err(external)
    }

    fn update_instructor(&mut self, instructor: &Instructor) -> Result<(), CoreError> {
        mutations::update_instructor(self.conn, instructor).map_err(external)
    }

    fn delete_instructor(&mut self, instructor_id: &InstructorId) -> Result<(), CoreError> {
        mutations::delete_instructor(self.conn, instructor_id).map_err(external)
    }

    fn activities_for_instructor(
        &mut self,
        instructor_id: &InstructorId,
    ) -> Result<Vec<Activity>, CoreError> {
        queries::activities_for_instructor(self.conn, instructor_id).map_err(external)
    }

    fn find_activity(&mut self, activity_id: &ActivityId) -> Result<Option<Activity>, CoreError> {
        queries::find_activity(self.conn, activity_id).map_err(external)
    }

    fn list_activities(&mut self) -> Result<Vec<Activity>, CoreError> {
        queries::list_activities(self.conn).map_err(external)
    }

    fn search_activities(&mut self, fragment: &str) -> Result<Vec<Activity>, CoreError> {
        queries::search_activities(self.conn, fragment).map_err(external)
    }

    fn max_activity_code(&mut self) -> Result<Option<String>, CoreError> {
        queries::max_activity_code(self.conn).map_err(external)
    }

    fn insert_activity(&mut self, activity: &Activity) -> Result<(), CoreError> {
        mutations::insert_activity(self.conn, activity).map_err(external)
    }

    fn update_activity(&mut self, activity: &Activity) -> Result<(), CoreError> {
        mutations::update_activity(self.conn, activity).map_err(external)
    }

    fn delete_activity(&mut self, activity_id: &ActivityId) -> Result<(), CoreError> {
        mutations::delete_activity(self.conn, activity_id).map_err(external)
    }

    fn enrollment_exists(
        &mut self,
        member_id: &MemberId,
        activity_id: &ActivityId,
    ) -> Result<bool, CoreError> {
        queries::enrollment_exists(self.conn, member_id, activity_id).map_err(external)
    }

    fn insert_enrollment(
        &mut self,
        member_id: &MemberId,
        activity_id: &ActivityId,
    ) -> Result<(), CoreError> {
        mutations::insert_enrollment(self.conn, member_id, activity_id).map_err(external)
    }

    fn delete_enrollment(
        &mut self,
        member_id: &MemberId,
        activity_id: &ActivityId,
    ) -> Result<(), CoreError> {
        mutations::delete_enrollment(self.conn, member_id, activity_id).map_err(external)
    }

    fn delete_enrollments_for_member(&mut self, member_id: &MemberId) -> Result<(), CoreError> {
        mutations::delete_enrollments_for_member(self.conn, member_id).map_err(external)
    }

    fn activities_for_member(
        &mut self,
        member_id: &MemberId,
    ) -> Result<Vec<Activity>, CoreError> {
        queries::activities_for_member(self.conn, member_id).map_err(external)
    }

    fn members_for_activity(
        &mut self,
        activity_id: &ActivityId,
    ) -> Result<Vec<Member>, CoreError> {
        queries::members_for_activity(self.conn, activity_id).map_err(external)
    }

    fn enrollment_count(&mut self, activity_id: &ActivityId) -> Result<u64, CoreError> {
        queries::enrollment_count(self.conn, activity_id).map_err(external)
    }

    fn activity_statistics_raw(
        &mut self,
        activity_id: &ActivityId,
        today: Date,
    ) -> Result<RawActivityStatistics, CoreError> {
        statistics::activity_statistics_raw(self.conn, activity_id, today).map_err(external)
    }
}
