// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types mirroring the database schema, plus conversions to and
//! from the domain entities.
//!
//! Dates are stored as ISO `YYYY-MM-DD` text, categories as their
//! single letter, weekdays as their canonical name. A stored row that
//! no longer decodes reports `PersistenceError::CorruptRecord` rather
//! than panicking.

use clubhouse_domain::{
    Activity, ActivityId, Category, Email, Hour, Instructor, InstructorId, Member, MemberId,
    NationalId, Phone, Weekday, parse_date,
};
use diesel::prelude::*;
use time::Date;

use crate::diesel_schema::{activities, enrollments, instructors, members};
use crate::error::PersistenceError;

/// Formats a date as ISO `YYYY-MM-DD` text for storage.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

fn corrupt(table: &str, code: &str, err: &dyn std::fmt::Display) -> PersistenceError {
    PersistenceError::CorruptRecord(format!("{table} row '{code}': {err}"))
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = members)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MemberRow {
    pub member_code: String,
    pub full_name: String,
    pub national_id: String,
    pub birth_date: String,
    pub phone: String,
    pub email: String,
    pub join_date: String,
    pub category: String,
}

impl MemberRow {
    pub fn from_domain(member: &Member) -> Self {
        Self {
            member_code: member.member_id.as_str().to_owned(),
            full_name: member.full_name.clone(),
            national_id: member.national_id.value().to_owned(),
            birth_date: format_date(member.birth_date),
            phone: member.phone.value().to_owned(),
            email: member.email.value().to_owned(),
            join_date: format_date(member.join_date),
            category: member.category.as_char().to_string(),
        }
    }

    pub fn into_domain(self) -> Result<Member, PersistenceError> {
        let code: &str = &self.member_code;
        Ok(Member {
            member_id: MemberId::parse(code).map_err(|e| corrupt("members", code, &e))?,
            full_name: self.full_name,
            national_id: NationalId::parse(&self.national_id)
                .map_err(|e| corrupt("members", code, &e))?,
            birth_date: parse_date(&self.birth_date).map_err(|e| corrupt("members", code, &e))?,
            phone: Phone::parse(&self.phone).map_err(|e| corrupt("members", code, &e))?,
            email: Email::parse(&self.email).map_err(|e| corrupt("members", code, &e))?,
            join_date: parse_date(&self.join_date).map_err(|e| corrupt("members", code, &e))?,
            category: Category::parse(&self.category).map_err(|e| corrupt("members", code, &e))?,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = instructors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InstructorRow {
    pub instructor_code: String,
    pub full_name: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub join_date: String,
    pub nickname: Option<String>,
}

impl InstructorRow {
    pub fn from_domain(instructor: &Instructor) -> Self {
        Self {
            instructor_code: instructor.instructor_id.as_str().to_owned(),
            full_name: instructor.full_name.clone(),
            national_id: instructor.national_id.value().to_owned(),
            phone: instructor.phone.value().to_owned(),
            email: instructor.email.value().to_owned(),
            join_date: format_date(instructor.join_date),
            nickname: instructor.nickname.clone(),
        }
    }

    pub fn into_domain(self) -> Result<Instructor, PersistenceError> {
        let code: &str = &self.instructor_code;
        Ok(Instructor {
            instructor_id: InstructorId::parse(code)
                .map_err(|e| corrupt("instructors", code, &e))?,
            full_name: self.full_name,
            national_id: NationalId::parse(&self.national_id)
                .map_err(|e| corrupt("instructors", code, &e))?,
            phone: Phone::parse(&self.phone).map_err(|e| corrupt("instructors", code, &e))?,
            email: Email::parse(&self.email).map_err(|e| corrupt("instructors", code, &e))?,
            join_date: parse_date(&self.join_date)
                .map_err(|e| corrupt("instructors", code, &e))?,
            nickname: self.nickname,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = activities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ActivityRow {
    pub activity_code: String,
    pub name: String,
    pub weekday: String,
    pub hour: i32,
    pub description: Option<String>,
    pub monthly_base_price: i64,
    pub instructor_code: String,
}

impl ActivityRow {
    pub fn from_domain(activity: &Activity) -> Self {
        Self {
            activity_code: activity.activity_id.as_str().to_owned(),
            name: activity.name.clone(),
            weekday: activity.weekday.as_str().to_owned(),
            hour: i32::from(activity.hour.value()),
            description: activity.description.clone(),
            monthly_base_price: i64::from(activity.monthly_base_price),
            instructor_code: activity.instructor_id.as_str().to_owned(),
        }
    }

    pub fn into_domain(self) -> Result<Activity, PersistenceError> {
        let code: &str = &self.activity_code;
        let hour_value: u8 = u8::try_from(self.hour)
            .map_err(|e| corrupt("activities", code, &e))?;
        let monthly_base_price: u32 = u32::try_from(self.monthly_base_price)
            .map_err(|e| corrupt("activities", code, &e))?;
        Ok(Activity {
            activity_id: ActivityId::parse(code).map_err(|e| corrupt("activities", code, &e))?,
            name: self.name,
            weekday: Weekday::parse(&self.weekday).map_err(|e| corrupt("activities", code, &e))?,
            hour: Hour::new(hour_value).map_err(|e| corrupt("activities", code, &e))?,
            description: self.description,
            monthly_base_price,
            instructor_id: InstructorId::parse(&self.instructor_code)
                .map_err(|e| corrupt("activities", code, &e))?,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = enrollments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EnrollmentRow {
    pub member_code: String,
    pub activity_code: String,
}

impl EnrollmentRow {
    pub fn new(member_id: &MemberId, activity_id: &ActivityId) -> Self {
        Self {
            member_code: member_id.as_str().to_owned(),
            activity_code: activity_id.as_str().to_owned(),
        }
    }
}
