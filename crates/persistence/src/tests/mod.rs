// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use clubhouse::{Command, Outcome, apply};
use clubhouse_domain::{
    Activity, ActivityDraft, Category, Instructor, InstructorDraft, Member, MemberDraft,
};
use time::Date;
use time::macros::date;

use crate::SqliteStore;

/// Fixed reference date so age and join-date rules are reproducible.
pub const TODAY: Date = date!(2026 - 08 - 30);

pub fn create_test_store() -> SqliteStore {
    SqliteStore::new_in_memory().expect("in-memory store initializes")
}

pub fn create_test_member_draft() -> MemberDraft {
    MemberDraft {
        full_name: String::from("Laura Ortega"),
        national_id: String::from("12345678Z"),
        birth_date: String::from("1990-04-12"),
        phone: String::from("612345678"),
        email: String::from("laura.ortega@example.com"),
        join_date: String::from("2024-01-15"),
        category: String::from("B"),
    }
}

pub fn create_test_instructor_draft() -> InstructorDraft {
    InstructorDraft {
        full_name: String::from("Carlos Vidal"),
        national_id: String::from("87654321X"),
        phone: String::from("698765432"),
        email: String::from("carlos.vidal@example.com"),
        join_date: String::from("2022-09-01"),
        nickname: String::from("Coach"),
    }
}

pub fn create_test_activity_draft(instructor_code: &str) -> ActivityDraft {
    ActivityDraft {
        name: String::from("Spinning"),
        weekday: String::from("Tuesday"),
        hour: String::from("18"),
        description: String::from("High-intensity cycling"),
        monthly_base_price: String::from("35"),
        instructor_id: instructor_code.to_owned(),
    }
}

/// Mints a member draft with a unique national id and the given
/// category.
pub fn create_member_draft_with(index: u32, category: Category) -> MemberDraft {
    MemberDraft {
        full_name: format!("Member {index}"),
        national_id: format!("{:08}K", 20_000_000 + index),
        birth_date: String::from("1995-02-10"),
        phone: format!("{:09}", 600_000_000 + index),
        email: format!("member{index}@example.com"),
        join_date: String::from("2024-03-01"),
        category: category.as_char().to_string(),
    }
}

pub fn seed_member(store: &SqliteStore) -> Member {
    seed_member_with(store, create_test_member_draft())
}

pub fn seed_member_with(store: &SqliteStore, draft: MemberDraft) -> Member {
    match apply(store, Command::CreateMember { draft }, TODAY).expect("member seeds") {
        Outcome::MemberCreated(member) => member,
        other => panic!("unexpected outcome: {other:?}"),
    }
}

pub fn seed_instructor(store: &SqliteStore) -> Instructor {
    let draft: InstructorDraft = create_test_instructor_draft();
    match apply(store, Command::CreateInstructor { draft }, TODAY).expect("instructor seeds") {
        Outcome::InstructorCreated(instructor) => instructor,
        other => panic!("unexpected outcome: {other:?}"),
    }
}

pub fn seed_activity(store: &SqliteStore, instructor_code: &str) -> Activity {
    seed_activity_with(store, create_test_activity_draft(instructor_code))
}

pub fn seed_activity_with(store: &SqliteStore, draft: ActivityDraft) -> Activity {
    match apply(store, Command::CreateActivity { draft }, TODAY).expect("activity seeds") {
        Outcome::ActivityCreated(activity) => activity,
        other => panic!("unexpected outcome: {other:?}"),
    }
}
