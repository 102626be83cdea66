// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-side mutations over the club tables.
//!
//! Each function issues exactly one statement; grouping into an atomic
//! unit is the transaction adapter's job.

use clubhouse_domain::{Activity, ActivityId, Instructor, InstructorId, Member, MemberId};
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{ActivityRow, EnrollmentRow, InstructorRow, MemberRow};
use crate::diesel_schema::{activities, enrollments, instructors, members};
use crate::error::PersistenceError;

pub fn insert_member(
    conn: &mut SqliteConnection,
    member: &Member,
) -> Result<(), PersistenceError> {
    debug!("Inserting member {}", member.member_id);
    diesel::insert_into(members::table)
        .values(MemberRow::from_domain(member))
        .execute(conn)?;
    Ok(())
}

pub fn update_member(
    conn: &mut SqliteConnection,
    member: &Member,
) -> Result<(), PersistenceError> {
    debug!("Updating member {}", member.member_id);
    diesel::update(members::table.find(member.member_id.as_str()))
        .set(MemberRow::from_domain(member))
        .execute(conn)?;
    Ok(())
}

pub fn delete_member(
    conn: &mut SqliteConnection,
    member_id: &MemberId,
) -> Result<(), PersistenceError> {
    debug!("Deleting member {member_id}");
    diesel::delete(members::table.find(member_id.as_str())).execute(conn)?;
    Ok(())
}

pub fn insert_instructor(
    conn: &mut SqliteConnection,
    instructor: &Instructor,
) -> Result<(), PersistenceError> {
    debug!("Inserting instructor {}", instructor.instructor_id);
    diesel::insert_into(instructors::table)
        .values(InstructorRow::from_domain(instructor))
        .execute(conn)?;
    Ok(())
}

pub fn update_instructor(
    conn: &mut SqliteConnection,
    instructor: &Instructor,
) -> Result<(), PersistenceError> {
    debug!("Updating instructor {}", instructor.instructor_id);
    diesel::update(instructors::table.find(instructor.instructor_id.as_str()))
        .set(InstructorRow::from_domain(instructor))
        .execute(conn)?;
    Ok(())
}

pub fn delete_instructor(
    conn: &mut SqliteConnection,
    instructor_id: &InstructorId,
) -> Result<(), PersistenceError> {
    debug!("Deleting instructor {instructor_id}");
    diesel::delete(instructors::table.find(instructor_id.as_str())).execute(conn)?;
    Ok(())
}

pub fn insert_activity(
    conn: &mut SqliteConnection,
    activity: &Activity,
) -> Result<(), PersistenceError> {
    debug!("Inserting activity {}", activity.activity_id);
    diesel::insert_into(activities::table)
        .values(ActivityRow::from_domain(activity))
        .execute(conn)?;
    Ok(())
}

pub fn update_activity(
    conn: &mut SqliteConnection,
    activity: &Activity,
) -> Result<(), PersistenceError> {
    debug!("Updating activity {}", activity.activity_id);
    diesel::update(activities::table.find(activity.activity_id.as_str()))
        .set(ActivityRow::from_domain(activity))
        .execute(conn)?;
    Ok(())
}

pub fn delete_activity(
    conn: &mut SqliteConnection,
    activity_id: &ActivityId,
) -> Result<(), PersistenceError> {
    debug!("Deleting activity {activity_id}");
    diesel::delete(activities::table.find(activity_id.as_str())).execute(conn)?;
    Ok(())
}

pub fn insert_enrollment(
    conn: &mut SqliteConnection,
    member_id: &MemberId,
    activity_id: &ActivityId,
) -> Result<(), PersistenceError> {
    debug!("Enrolling {member_id} in {activity_id}");
    diesel::insert_into(enrollments::table)
        .values(EnrollmentRow::new(member_id, activity_id))
        .execute(conn)?;
    Ok(())
}

pub fn delete_enrollment(
    conn: &mut SqliteConnection,
    member_id: &MemberId,
    activity_id: &ActivityId,
) -> Result<(), PersistenceError> {
    debug!("Unenrolling {member_id} from {activity_id}");
    diesel::delete(
        enrollments::table
            .filter(enrollments::member_code.eq(member_id.as_str()))
            .filter(enrollments::activity_code.eq(activity_id.as_str())),
    )
    .execute(conn)?;
    Ok(())
}

pub fn delete_enrollments_for_member(
    conn: &mut SqliteConnection,
    member_id: &MemberId,
) -> Result<(), PersistenceError> {
    debug!("Clearing enrollments for {member_id}");
    diesel::delete(enrollments::table.filter(enrollments::member_code.eq(member_id.as_str())))
        .execute(conn)?;
    Ok(())
}
