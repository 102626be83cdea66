// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cell::RefCell;
use std::collections::BTreeSet;

use clubhouse_domain::{
    Activity, ActivityDraft, ActivityId, Category, Instructor, InstructorDraft, InstructorId,
    Member, MemberDraft, MemberId, age_in_years,
};
use time::Date;
use time::macros::date;

use crate::error::CoreError;
use crate::store::{ClubStore, ClubTx, RawActivityStatistics};
use crate::{Command, Outcome, apply};

/// Fixed reference date so age and join-date rules are reproducible.
pub const TODAY: Date = date!(2026 - 08 - 30);

#[derive(Debug, Default, Clone)]
struct MemoryState {
    members: Vec<Member>,
    instructors: Vec<Instructor>,
    activities: Vec<Activity>,
    enrollments: BTreeSet<(String, String)>,
}

/// In-memory store with transactional copy-on-commit semantics: the
/// closure mutates a clone of the state, which replaces the original
/// only on `Ok`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

struct MemoryTx {
    state: MemoryState,
}

impl ClubStore for MemoryStore {
    fn transaction<T, F>(&self, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut dyn ClubTx) -> Result<T, CoreError>,
    {
        let mut tx = MemoryTx {
            state: self.state.borrow().clone(),
        };
        let value: T = f(&mut tx)?;
        *self.state.borrow_mut() = tx.state;
        Ok(value)
    }
}

impl ClubTx for MemoryTx {
    fn find_member(&mut self, member_id: &MemberId) -> Result<Option<Member>, CoreError> {
        Ok(self
            .state
            .members
            .iter()
            .find(|m| m.member_id == *member_id)
            .cloned())
    }

    fn member_by_national_id(&mut self, national_id: &str) -> Result<Option<Member>, CoreError> {
        Ok(self
            .state
            .members
            .iter()
            .find(|m| m.national_id.value() == national_id)
            .cloned())
    }

    fn list_members(&mut self) -> Result<Vec<Member>, CoreError> {
        let mut members: Vec<Member> = self.state.members.clone();
        members.sort_by(|a, b| a.member_id.cmp(&b.member_id));
        Ok(members)
    }

    fn max_member_code(&mut self) -> Result<Option<String>, CoreError> {
        Ok(self
            .state
            .members
            .iter()
            .map(|m| m.member_id.as_str().to_owned())
            .max())
    }

    fn insert_member(&mut self, member: &Member) -> Result<(), CoreError> {
        self.state.members.push(member.clone());
        Ok(())
    }

    fn update_member(&mut self, member: &Member) -> Result<(), CoreError> {
        for stored in &mut self.state.members {
            if stored.member_id == member.member_id {
                *stored = member.clone();
            }
        }
        Ok(())
    }

    fn delete_member(&mut self, member_id: &MemberId) -> Result<(), CoreError> {
        self.state.members.retain(|m| m.member_id != *member_id);
        Ok(())
    }

    fn find_instructor(
        &mut self,
        instructor_id: &InstructorId,
    ) -> Result<Option<Instructor>, CoreError> {
        Ok(self
            .state
            .instructors
            .iter()
            .find(|i| i.instructor_id == *instructor_id)
            .cloned())
    }

    fn instructor_by_national_id(
        &mut self,
        national_id: &str,
    ) -> Result<Option<Instructor>, CoreError> {
        Ok(self
            .state
            .instructors
            .iter()
            .find(|i| i.national_id.value() == national_id)
            .cloned())
    }

    fn list_instructors(&mut self) -> Result<Vec<Instructor>, CoreError> {
        let mut instructors: Vec<Instructor> = self.state.instructors.clone();
        instructors.sort_by(|a, b| a.instructor_id.cmp(&b.instructor_id));
        Ok(instructors)
    }

    fn max_instructor_code(&mut self) -> Result<Option<String>, CoreError> {
        Ok(self
            .state
            .instructors
            .iter()
            .map(|i| i.instructor_id.as_str().to_owned())
            .max())
    }

    fn insert_instructor(&mut self, instructor: &Instructor) -> Result<(), CoreError> {
        self.state.instructors.push(instructor.clone());
        Ok(())
    }

    fn update_instructor(&mut self, instructor: &Instructor) -> Result<(), CoreError> {
        for stored in &mut self.state.instructors {
            if stored.instructor_id == instructor.instructor_id {
                *stored = instructor.clone();
            }
        }
        Ok(())
    }

    fn delete_instructor(&mut self, instructor_id: &InstructorId) -> Result<(), CoreError> {
        self.state
            .instructors
            .retain(|i| i.instructor_id != *instructor_id);
        Ok(())
    }

    fn activities_for_instructor(
        &mut self,
        instructor_id: &InstructorId,
    ) -> Result<Vec<Activity>, CoreError> {
        Ok(self
            .state
            .activities
            .iter()
            .filter(|a| a.instructor_id == *instructor_id)
            .cloned()
            .collect())
    }

    fn find_activity(&mut self, activity_id: &ActivityId) -> Result<Option<Activity>, CoreError> {
        Ok(self
            .state
            .activities
            .iter()
            .find(|a| a.activity_id == *activity_id)
            .cloned())
    }

    fn list_activities(&mut self) -> Result<Vec<Activity>, CoreError> {
        let mut activities: Vec<Activity> = self.state.activities.clone();
        activities.sort_by(|a, b| a.activity_id.cmp(&b.activity_id));
        Ok(activities)
    }

    fn search_activities(&mut self, fragment: &str) -> Result<Vec<Activity>, CoreError> {
        let needle: String = fragment.to_lowercase();
        let mut activities: Vec<Activity> = self
            .state
            .activities
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        activities.sort_by(|a, b| a.activity_id.cmp(&b.activity_id));
        Ok(activities)
    }

    fn max_activity_code(&mut self) -> Result<Option<String>, CoreError> {
        Ok(self
            .state
            .activities
            .iter()
            .map(|a| a.activity_id.as_str().to_owned())
            .max())
    }

    fn insert_activity(&mut self, activity: &Activity) -> Result<(), CoreError> {
        self.state.activities.push(activity.clone());
        Ok(())
    }

    fn update_activity(&mut self, activity: &Activity) -> Result<(), CoreError> {
        for stored in &mut self.state.activities {
            if stored.activity_id == activity.activity_id {
                *stored = activity.clone();
            }
        }
        Ok(())
    }

    fn delete_activity(&mut self, activity_id: &ActivityId) -> Result<(), CoreError> {
        self.state
            .activities
            .retain(|a| a.activity_id != *activity_id);
        Ok(())
    }

    fn enrollment_exists(
        &mut self,
        member_id: &MemberId,
        activity_id: &ActivityId,
    ) -> Result<bool, CoreError> {
        let key: (String, String) = (
            member_id.as_str().to_owned(),
            activity_id.as_str().to_owned(),
        );
        Ok(self.state.enrollments.contains(&key))
    }

    fn insert_enrollment(
        &mut self,
        member_id: &MemberId,
        activity_id: &ActivityId,
    ) -> Result<(), CoreError> {
        self.state.enrollments.insert((
            member_id.as_str().to_owned(),
            activity_id.as_str().to_owned(),
        ));
        Ok(())
    }

    fn delete_enrollment(
        &mut self,
        member_id: &MemberId,
        activity_id: &ActivityId,
    ) -> Result<(), CoreError> {
        let key: (String, String) = (
            member_id.as_str().to_owned(),
            activity_id.as_str().to_owned(),
        );
        self.state.enrollments.remove(&key);
        Ok(())
    }

    fn delete_enrollments_for_member(&mut self, member_id: &MemberId) -> Result<(), CoreError> {
        self.state
            .enrollments
            .retain(|(member, _)| member != member_id.as_str());
        Ok(())
    }

    fn activities_for_member(
        &mut self,
        member_id: &MemberId,
    ) -> Result<Vec<Activity>, CoreError> {
        let codes: Vec<&String> = self
            .state
            .enrollments
            .iter()
            .filter(|(member, _)| member == member_id.as_str())
            .map(|(_, activity)| activity)
            .collect();
        Ok(self
            .state
            .activities
            .iter()
            .filter(|a| codes.iter().any(|code| *code == a.activity_id.as_str()))
            .cloned()
            .collect())
    }

    fn members_for_activity(
        &mut self,
        activity_id: &ActivityId,
    ) -> Result<Vec<Member>, CoreError> {
        let codes: Vec<&String> = self
            .state
            .enrollments
            .iter()
            .filter(|(_, activity)| activity == activity_id.as_str())
            .map(|(member, _)| member)
            .collect();
        Ok(self
            .state
            .members
            .iter()
            .filter(|m| codes.iter().any(|code| *code == m.member_id.as_str()))
            .cloned()
            .collect())
    }

    fn enrollment_count(&mut self, activity_id: &ActivityId) -> Result<u64, CoreError> {
        let count: usize = self
            .state
            .enrollments
            .iter()
            .filter(|(_, activity)| activity == activity_id.as_str())
            .count();
        Ok(u64::try_from(count).expect("count fits in u64"))
    }

    fn activity_statistics_raw(
        &mut self,
        activity_id: &ActivityId,
        today: Date,
    ) -> Result<RawActivityStatistics, CoreError> {
        let activity: Activity = self
            .find_activity(activity_id)?
            .ok_or_else(|| CoreError::ExternalFailure(String::from("missing activity")))?;
        let roster: Vec<Member> = self.members_for_activity(activity_id)?;
        if roster.is_empty() {
            return Ok(RawActivityStatistics(0, 0.0, None, 0.0));
        }

        let count: u32 = u32::try_from(roster.len()).expect("roster fits in u32");
        let total_age: i32 = roster
            .iter()
            .map(|m| age_in_years(m.birth_date, today))
            .sum();
        let average_age: f64 = f64::from(total_age) / f64::from(count);

        // Modal category; ties break to the lexicographically smallest
        // letter.
        let mut tallies: Vec<(char, usize)> = Vec::new();
        for member in &roster {
            let letter: char = member.category.as_char();
            match tallies.iter_mut().find(|(c, _)| *c == letter) {
                Some((_, n)) => *n += 1,
                None => tallies.push((letter, 1)),
            }
        }
        tallies.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        let modal: Option<char> = tallies.first().map(|(c, _)| *c);

        let revenue: f64 = f64::from(count) * f64::from(activity.monthly_base_price);
        Ok(RawActivityStatistics(
            i64::from(count),
            average_age,
            modal,
            revenue,
        ))
    }
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

/// Creates an instructor through the command path and returns it.
pub fn seed_instructor(store: &MemoryStore) -> Instructor {
    seed_instructor_with(store, create_test_instructor_draft())
}

pub fn seed_instructor_with(store: &MemoryStore, draft: InstructorDraft) -> Instructor {
    let outcome: Outcome =
        apply(store, Command::CreateInstructor { draft }, TODAY).expect("instructor seeds");
    match outcome {
        Outcome::InstructorCreated(instructor) => instructor,
        other => panic!("unexpected outcome: {other:?}"),
    }
}

/// Creates a member through the command path and returns it.
pub fn seed_member(store: &MemoryStore) -> Member {
    seed_member_with(store, create_test_member_draft())
}

pub fn seed_member_with(store: &MemoryStore, draft: MemberDraft) -> Member {
    let outcome: Outcome =
        apply(store, Command::CreateMember { draft }, TODAY).expect("member seeds");
    match outcome {
        Outcome::MemberCreated(member) => member,
        other => panic!("unexpected outcome: {other:?}"),
    }
}

/// Creates an activity through the command path and returns it.
pub fn seed_activity(store: &MemoryStore, instructor_code: &str) -> Activity {
    seed_activity_with(store, create_test_activity_draft(instructor_code))
}

pub fn seed_activity_with(store: &MemoryStore, draft: ActivityDraft) -> Activity {
    let outcome: Outcome =
        apply(store, Command::CreateActivity { draft }, TODAY).expect("activity seeds");
    match outcome {
        Outcome::ActivityCreated(activity) => activity,
        other => panic!("unexpected outcome: {other:?}"),
    }
}

/// A second member draft with a distinct national id.
pub fn create_second_member_draft() -> MemberDraft {
    MemberDraft {
        full_name: String::from("Miguel Santos"),
        national_id: String::from("11223344A"),
        birth_date: String::from("1985-11-03"),
        phone: String::from("633221144"),
        email: String::from("miguel.santos@example.com"),
        join_date: String::from("2023-06-20"),
        category: String::from("A"),
    }
}

/// Mints a category-`cat` member draft with a unique national id.
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
