// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side queries over the club tables.

use clubhouse_domain::{Activity, ActivityId, Instructor, InstructorId, Member, MemberId};
use diesel::prelude::*;
use diesel::{OptionalExtension, SqliteConnection};

use crate::data_models::{ActivityRow, InstructorRow, MemberRow};
use crate::diesel_schema::{activities, enrollments, instructors, members};
use crate::error::PersistenceError;

pub fn find_member(
    conn: &mut SqliteConnection,
    member_id: &MemberId,
) -> Result<Option<Member>, PersistenceError> {
    members::table
        .find(member_id.as_str())
        .select(MemberRow::as_select())
        .first::<MemberRow>(conn)
        .optional()?
        .map(MemberRow::into_domain)
        .transpose()
}

pub fn member_by_national_id(
    conn: &mut SqliteConnection,
    national_id: &str,
) -> Result<Option<Member>, PersistenceError> {
    members::table
        .filter(members::national_id.eq(national_id))
        .select(MemberRow::as_select())
        .first::<MemberRow>(conn)
        .optional()?
        .map(MemberRow::into_domain)
        .transpose()
}

pub fn list_members(conn: &mut SqliteConnection) -> Result<Vec<Member>, PersistenceError> {
    members::table
        .order(members::member_code.asc())
        .select(MemberRow::as_select())
        .load::<MemberRow>(conn)?
        .into_iter()
        .map(MemberRow::into_domain)
        .collect()
}

/// The highest stored member code, used to derive the next one.
pub fn max_member_code(conn: &mut SqliteConnection) -> Result<Option<String>, PersistenceError> {
    Ok(members::table
        .select(diesel::dsl::max(members::member_code))
        .first::<Option<String>>(conn)?)
}

pub fn find_instructor(
    conn: &mut SqliteConnection,
    instructor_id: &InstructorId,
) -> Result<Option<Instructor>, PersistenceError> {
    instructors::table
        .find(instructor_id.as_str())
        .select(InstructorRow::as_select())
        .first::<InstructorRow>(conn)
        .optional()?
        .map(InstructorRow::into_domain)
        .transpose()
}

pub fn instructor_by_national_id(
    conn: &mut SqliteConnection,
    national_id: &str,
) -> Result<Option<Instructor>, PersistenceError> {
    instructors::table
        .filter(instructors::national_id.eq(national_id))
        .select(InstructorRow::as_select())
        .first::<InstructorRow>(conn)
        .optional()?
        .map(InstructorRow::into_domain)
        .transpose()
}

pub fn list_instructors(conn: &mut SqliteConnection) -> Result<Vec<Instructor>, PersistenceError> {
    instructors::table
        .order(instructors::instructor_code.asc())
        .select(InstructorRow::as_select())
        .load::<InstructorRow>(conn)?
        .into_iter()
        .map(InstructorRow::into_domain)
        .collect()
}

pub fn max_instructor_code(
    conn: &mut SqliteConnection,
) -> Result<Option<String>, PersistenceError> {
    Ok(instructors::table
        .select(diesel::dsl::max(instructors::instructor_code))
        .first::<Option<String>>(conn)?)
}

pub fn activities_for_instructor(
    conn: &mut SqliteConnection,
    instructor_id: &InstructorId,
) -> Result<Vec<Activity>, PersistenceError> {
    activities::table
        .filter(activities::instructor_code.eq(instructor_id.as_str()))
        .order(activities::activity_code.asc())
        .select(ActivityRow::as_select())
        .load::<ActivityRow>(conn)?
        .into_iter()
        .map(ActivityRow::into_domain)
        .collect()
}

pub fn find_activity(
    conn: &mut SqliteConnection,
    activity_id: &ActivityId,
) -> Result<Option<Activity>, PersistenceError> {
    activities::table
        .find(activity_id.as_str())
        .select(ActivityRow::as_select())
        .first::<ActivityRow>(conn)
        .optional()?
        .map(ActivityRow::into_domain)
        .transpose()
}

pub fn list_activities(conn: &mut SqliteConnection) -> Result<Vec<Activity>, PersistenceError> {
    activities::table
        .order(activities::activity_code.asc())
        .select(ActivityRow::as_select())
        .load::<ActivityRow>(conn)?
        .into_iter()
        .map(ActivityRow::into_domain)
        .collect()
}

/// Name search. `SQLite`'s `LIKE` is case-insensitive for ASCII, which
/// matches the catalogue's activity names. `%` and `_` in the fragment
/// are treated as literal characters, not wildcards.
pub fn search_activities(
    conn: &mut SqliteConnection,
    fragment: &str,
) -> Result<Vec<Activity>, PersistenceError> {
    let escaped: String = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    let pattern: String = format!("%{escaped}%");
    activities::table
        .filter(activities::name.like(pattern).escape('\\'))
        .order(activities::activity_code.asc())
        .select(ActivityRow::as_select())
        .load::<ActivityRow>(conn)?
        .into_iter()
        .map(ActivityRow::into_domain)
        .collect()
}

pub fn max_activity_code(conn: &mut SqliteConnection) -> Result<Option<String>, PersistenceError> {
    Ok(activities::table
        .select(diesel::dsl::max(activities::activity_code))
        .first::<Option<String>>(conn)?)
}

pub fn enrollment_exists(
    conn: &mut SqliteConnection,
    member_id: &MemberId,
    activity_id: &ActivityId,
) -> Result<bool, PersistenceError> {
    let count: i64 = enrollments::table
        .filter(enrollments::member_code.eq(member_id.as_str()))
        .filter(enrollments::activity_code.eq(activity_id.as_str()))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

pub fn activities_for_member(
    conn: &mut SqliteConnection,
    member_id: &MemberId,
) -> Result<Vec<Activity>, PersistenceError> {
    enrollments::table
        .inner_join(activities::table)
        .filter(enrollments::member_code.eq(member_id.as_str()))
        .order(activities::activity_code.asc())
        .select(ActivityRow::as_select())
        .load::<ActivityRow>(conn)?
        .into_iter()
        .map(ActivityRow::into_domain)
        .collect()
}

pub fn members_for_activity(
    conn: &mut SqliteConnection,
    activity_id: &ActivityId,
) -> Result<Vec<Member>, PersistenceError> {
    enrollments::table
        .inner_join(members::table)
        .filter(enrollments::activity_code.eq(activity_id.as_str()))
        .order(members::member_code.asc())
        .select(MemberRow::as_select())
        .load::<MemberRow>(conn)?
        .into_iter()
        .map(MemberRow::into_domain)
        .collect()
}

pub fn enrollment_count(
    conn: &mut SqliteConnection,
    activity_id: &ActivityId,
) -> Result<u64, PersistenceError> {
    let count: i64 = enrollments::table
        .filter(enrollments::activity_code.eq(activity_id.as_str()))
        .count()
        .get_result(conn)?;
    u64::try_from(count)
        .map_err(|e| PersistenceError::CorruptRecord(format!("negative enrollment count: {e}")))
}
