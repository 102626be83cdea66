// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Activity, ActivityId, Category, DomainError, Email, Hour, InstructorId, Member, MemberId,
    NationalId, Phone, Weekday,
};
use time::macros::date;

#[test]
fn test_national_id_accepts_eight_digits_and_uppercase_letter() {
    assert!(NationalId::parse("12345678Z").is_ok());
    assert!(NationalId::parse("00000000A").is_ok());
}

#[test]
fn test_national_id_rejects_wrong_length() {
    assert!(matches!(
        NationalId::parse("1234567Z"),
        Err(DomainError::InvalidNationalId(_))
    ));
    assert!(NationalId::parse("123456789Z").is_err());
}

#[test]
fn test_national_id_rejects_lowercase_letter() {
    assert!(NationalId::parse("12345678z").is_err());
}

#[test]
fn test_national_id_rejects_missing_letter() {
    assert!(NationalId::parse("12345678").is_err());
    assert!(NationalId::parse("123456789").is_err());
}

#[test]
fn test_phone_accepts_nine_digits() {
    assert!(Phone::parse("123456789").is_ok());
}

#[test]
fn test_phone_rejects_other_lengths_and_characters() {
    assert!(Phone::parse("12345678").is_err());
    assert!(Phone::parse("1234567890").is_err());
    assert!(Phone::parse("12345678a").is_err());
    assert!(Phone::parse("+34123456").is_err());
}

#[test]
fn test_email_accepts_simple_addresses() {
    assert!(Email::parse("a@b.com").is_ok());
    assert!(Email::parse("first.last-name@sub-domain.example.org").is_ok());
}

#[test]
fn test_email_rejects_malformed_addresses() {
    assert!(Email::parse("not-an-email").is_err());
    assert!(Email::parse("a@b").is_err());
    assert!(Email::parse("a@b.c").is_err());
    assert!(Email::parse("@b.com").is_err());
    assert!(Email::parse("a@.com").is_err());
}

#[test]
fn test_category_parse_round_trip() {
    for (s, expected) in [
        ("A", Category::A),
        ("B", Category::B),
        ("C", Category::C),
        ("D", Category::D),
        ("E", Category::E),
    ] {
        let category: Category = Category::parse(s).unwrap();
        assert_eq!(category, expected);
        assert_eq!(category.as_char().to_string(), s);
    }
}

#[test]
fn test_category_rejects_unknown_values() {
    assert!(Category::parse("F").is_err());
    assert!(Category::parse("a").is_err());
    assert!(Category::parse("").is_err());
    assert!(Category::from_char('x').is_err());
}

#[test]
fn test_weekday_parse_accepts_all_seven_days() {
    for day in Weekday::ALL {
        assert_eq!(Weekday::parse(day.as_str()).unwrap(), day);
    }
}

#[test]
fn test_weekday_rejects_non_canonical_values() {
    assert!(Weekday::parse("monday").is_err());
    assert!(Weekday::parse("Lunes").is_err());
    assert!(Weekday::parse("").is_err());
}

#[test]
fn test_hour_accepts_operating_hours_boundaries() {
    assert_eq!(Hour::new(8).unwrap().value(), 8);
    assert_eq!(Hour::new(22).unwrap().value(), 22);
    assert!(Hour::new(15).is_ok());
}

#[test]
fn test_hour_rejects_outside_operating_hours() {
    assert!(matches!(Hour::new(7), Err(DomainError::HourOutOfRange(7))));
    assert!(Hour::new(23).is_err());
    assert!(Hour::new(0).is_err());
}

fn sample_member(member_id: &str, name: &str) -> Member {
    Member {
        member_id: MemberId::parse(member_id).unwrap(),
        full_name: String::from(name),
        national_id: NationalId::parse("12345678Z").unwrap(),
        birth_date: date!(1990 - 05 - 14),
        phone: Phone::parse("123456789").unwrap(),
        email: Email::parse("a@b.com").unwrap(),
        join_date: date!(2024 - 01 - 10),
        category: Category::A,
    }
}

#[test]
fn test_member_equality_is_by_code_only() {
    let a: Member = sample_member("S001", "Ana Garcia");
    let b: Member = sample_member("S001", "Completely Different Name");
    let c: Member = sample_member("S002", "Ana Garcia");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_activity_equality_is_by_code_only() {
    let a: Activity = Activity {
        activity_id: ActivityId::parse("ACT001").unwrap(),
        name: String::from("Spinning"),
        weekday: Weekday::Monday,
        hour: Hour::new(9).unwrap(),
        description: None,
        monthly_base_price: 25,
        instructor_id: InstructorId::parse("M001").unwrap(),
    };
    let mut b: Activity = a.clone();
    b.name = String::from("Pilates");
    b.hour = Hour::new(10).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_activity_occupies_slot() {
    let activity: Activity = Activity {
        activity_id: ActivityId::parse("ACT001").unwrap(),
        name: String::from("Spinning"),
        weekday: Weekday::Monday,
        hour: Hour::new(9).unwrap(),
        description: None,
        monthly_base_price: 25,
        instructor_id: InstructorId::parse("M001").unwrap(),
    };

    assert!(activity.occupies_slot(Weekday::Monday, Hour::new(9).unwrap()));
    assert!(!activity.occupies_slot(Weekday::Monday, Hour::new(10).unwrap()));
    assert!(!activity.occupies_slot(Weekday::Tuesday, Hour::new(9).unwrap()));
}
