// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-entity field-format and cross-field business rules.
//!
//! Each `validate_*_draft` function checks every rule for its entity and
//! collects all violations rather than failing fast, returning either the
//! fully typed field set or the complete violation list. Uniqueness and
//! reference-resolution rules need store access and are applied by the
//! operation layer on top of these results.

use crate::draft::{ActivityDraft, InstructorDraft, MemberDraft};
use crate::error::{DomainError, FieldError};
use crate::ids::InstructorId;
use crate::types::{Category, Email, Hour, NationalId, Phone, Weekday};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Minimum age in whole years for membership.
pub const ADULT_AGE_YEARS: i32 = 18;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Validated member fields, ready to be combined with a member code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFields {
    pub full_name: String,
    pub national_id: NationalId,
    pub birth_date: Date,
    pub phone: Phone,
    pub email: Email,
    pub join_date: Date,
    pub category: Category,
}

/// Validated instructor fields, ready to be combined with an instructor
/// code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructorFields {
    pub full_name: String,
    pub national_id: NationalId,
    pub phone: Phone,
    pub email: Email,
    pub join_date: Date,
    pub nickname: Option<String>,
}

/// Validated activity fields, ready to be combined with an activity code.
///
/// The responsible instructor's code is format-checked here; whether it
/// resolves to an existing instructor is checked by the operation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFields {
    pub name: String,
    pub weekday: Weekday,
    pub hour: Hour,
    pub description: Option<String>,
    pub monthly_base_price: u32,
    pub instructor_id: InstructorId,
}

/// Parses an ISO `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns `DomainError::DateParse` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| DomainError::DateParse {
        date_string: value.to_owned(),
        error: e.to_string(),
    })
}

/// Computes age in whole years at `today` for the given birth date.
#[must_use]
pub fn age_in_years(birth_date: Date, today: Date) -> i32 {
    let mut years: i32 = today.year() - birth_date.year();
    let today_md: (u8, u8) = (u8::from(today.month()), today.day());
    let birth_md: (u8, u8) = (u8::from(birth_date.month()), birth_date.day());
    if today_md < birth_md {
        years -= 1;
    }
    years
}

/// Validates a member draft against every member rule.
///
/// Rules: required name/national id/email, national id format, phone
/// format, email format, birth date parses and age is at least 18 whole
/// years at `today`, join date parses and is not after `today`, category
/// is one of A-E.
///
/// # Errors
///
/// Returns the complete list of field violations when any rule fails.
pub fn validate_member_draft(
    draft: &MemberDraft,
    today: Date,
) -> Result<MemberFields, Vec<FieldError>> {
    let mut errors: Vec<FieldError> = Vec::new();

    let full_name: &str = draft.full_name.trim();
    if full_name.is_empty() {
        errors.push(FieldError::required("full_name"));
    }

    let national_id: Option<NationalId> =
        checked_field(&mut errors, "national_id", &draft.national_id, NationalId::parse);
    let phone: Option<Phone> = checked_field(&mut errors, "phone", &draft.phone, Phone::parse);
    let email: Option<Email> = checked_field(&mut errors, "email", &draft.email, Email::parse);

    let birth_date: Option<Date> = checked_date(&mut errors, "birth_date", &draft.birth_date);
    if let Some(birth) = birth_date
        && age_in_years(birth, today) < ADULT_AGE_YEARS
    {
        errors.push(FieldError::range(
            "birth_date",
            format!("members must be at least {ADULT_AGE_YEARS} years old"),
        ));
    }

    let join_date: Option<Date> = checked_join_date(&mut errors, &draft.join_date, today);

    let category: Option<Category> =
        checked_field(&mut errors, "category", &draft.category, Category::parse);

    match (national_id, phone, email, birth_date, join_date, category) {
        (Some(national_id), Some(phone), Some(email), Some(birth_date), Some(join_date), Some(category))
            if errors.is_empty() =>
        {
            Ok(MemberFields {
                full_name: full_name.to_owned(),
                national_id,
                birth_date,
                phone,
                email,
                join_date,
                category,
            })
        }
        _ => Err(errors),
    }
}

/// Validates an instructor draft against every instructor rule.
///
/// Same identity/contact/date rules as members; instructors have no age
/// rule and no category, and the nickname is optional.
///
/// # Errors
///
/// Returns the complete list of field violations when any rule fails.
pub fn validate_instructor_draft(
    draft: &InstructorDraft,
    today: Date,
) -> Result<InstructorFields, Vec<FieldError>> {
    let mut errors: Vec<FieldError> = Vec::new();

    let full_name: &str = draft.full_name.trim();
    if full_name.is_empty() {
        errors.push(FieldError::required("full_name"));
    }

    let national_id: Option<NationalId> =
        checked_field(&mut errors, "national_id", &draft.national_id, NationalId::parse);
    let phone: Option<Phone> = checked_field(&mut errors, "phone", &draft.phone, Phone::parse);
    let email: Option<Email> = checked_field(&mut errors, "email", &draft.email, Email::parse);
    let join_date: Option<Date> = checked_join_date(&mut errors, &draft.join_date, today);

    let nickname: Option<String> = match draft.nickname.trim() {
        "" => None,
        nick => Some(nick.to_owned()),
    };

    match (national_id, phone, email, join_date) {
        (Some(national_id), Some(phone), Some(email), Some(join_date)) if errors.is_empty() => {
            Ok(InstructorFields {
                full_name: full_name.to_owned(),
                national_id,
                phone,
                email,
                join_date,
                nickname,
            })
        }
        _ => Err(errors),
    }
}

/// Validates an activity draft against every activity rule.
///
/// Rules: required name, price parses as an integer (a parse failure is
/// reported distinctly from a negative value), price non-negative,
/// weekday one of the seven canonical values, hour parses and falls in
/// operating hours, instructor code well-formed.
///
/// # Errors
///
/// Returns the complete list of field violations when any rule fails.
pub fn validate_activity_draft(draft: &ActivityDraft) -> Result<ActivityFields, Vec<FieldError>> {
    let mut errors: Vec<FieldError> = Vec::new();

    let name: &str = draft.name.trim();
    if name.is_empty() {
        errors.push(FieldError::required("name"));
    }

    let weekday: Option<Weekday> =
        checked_field(&mut errors, "weekday", &draft.weekday, Weekday::parse);

    let hour: Option<Hour> = match draft.hour.trim().parse::<u8>() {
        Ok(value) => match Hour::new(value) {
            Ok(hour) => Some(hour),
            Err(err) => {
                errors.push(FieldError::range("hour", err.to_string()));
                None
            }
        },
        Err(_) => {
            errors.push(FieldError::parse(
                "hour",
                format!("'{}' is not a whole number", draft.hour.trim()),
            ));
            None
        }
    };

    let monthly_base_price: Option<u32> = checked_price(&mut errors, &draft.monthly_base_price);

    let description: Option<String> = match draft.description.trim() {
        "" => None,
        text => Some(text.to_owned()),
    };

    let instructor_id: Option<InstructorId> =
        checked_field(&mut errors, "instructor_id", &draft.instructor_id, InstructorId::parse);

    match (weekday, hour, monthly_base_price, instructor_id) {
        (Some(weekday), Some(hour), Some(monthly_base_price), Some(instructor_id))
            if errors.is_empty() =>
        {
            Ok(ActivityFields {
                name: name.to_owned(),
                weekday,
                hour,
                description,
                monthly_base_price,
                instructor_id,
            })
        }
        _ => Err(errors),
    }
}

/// Checks a required text field with a format-validating constructor.
///
/// A blank value reports `Required`; a non-blank value that the
/// constructor rejects reports `Format`.
fn checked_field<T>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, DomainError>,
) -> Option<T> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::required(field));
        return None;
    }
    match parse(trimmed) {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(FieldError::format(field, &err));
            None
        }
    }
}

/// Checks a required date field; a blank or malformed value reports
/// `Parse`.
fn checked_date(errors: &mut Vec<FieldError>, field: &'static str, raw: &str) -> Option<Date> {
    match parse_date(raw.trim()) {
        Ok(date) => Some(date),
        Err(err) => {
            errors.push(FieldError::parse(field, err.to_string()));
            None
        }
    }
}

/// Checks the join date: must parse and must not be after `today`.
fn checked_join_date(errors: &mut Vec<FieldError>, raw: &str, today: Date) -> Option<Date> {
    let join_date: Option<Date> = checked_date(errors, "join_date", raw);
    if let Some(date) = join_date
        && date > today
    {
        errors.push(FieldError::range(
            "join_date",
            String::from("join date cannot be in the future"),
        ));
    }
    join_date
}

/// Checks the price field: must parse as an integer (`Parse`) and be
/// non-negative and within range (`Range`).
fn checked_price(errors: &mut Vec<FieldError>, raw: &str) -> Option<u32> {
    let trimmed: &str = raw.trim();
    let Ok(value) = trimmed.parse::<i64>() else {
        errors.push(FieldError::parse(
            "monthly_base_price",
            format!("'{trimmed}' is not a whole number"),
        ));
        return None;
    };
    match u32::try_from(value) {
        Ok(price) => Some(price),
        Err(_) => {
            errors.push(FieldError::range(
                "monthly_base_price",
                String::from("price must be a non-negative amount"),
            ));
            None
        }
    }
}
