// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command dispatch for every state-changing operation.
//!
//! Each command runs inside a single store transaction: validation and
//! referential checks happen against the transaction's view, and any
//! failure rolls back every write the command issued.

use clubhouse_domain::{
    Activity, ActivityDraft, ActivityId, EntityKind, FieldError, Hour, Instructor,
    InstructorDraft, InstructorId, Member, MemberDraft, MemberId, Weekday, find_slot_conflict,
    next_code, validate_activity_draft, validate_instructor_draft, validate_member_draft,
};
use time::Date;

use crate::command::Command;
use crate::error::CoreError;
use crate::store::{ClubStore, ClubTx};

/// The observable result of a successfully applied [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A member was created with a freshly assigned code.
    MemberCreated(Member),
    /// A member's mutable fields were replaced.
    MemberUpdated(Member),
    /// A member and all of their enrollments were removed.
    MemberDeleted(MemberId),
    /// An instructor was created with a freshly assigned code.
    InstructorCreated(Instructor),
    /// An instructor's mutable fields were replaced.
    InstructorUpdated(Instructor),
    /// An instructor with no remaining activities was removed.
    InstructorDeleted(InstructorId),
    /// An activity was created with a freshly assigned code.
    ActivityCreated(Activity),
    /// An activity's mutable fields were replaced.
    ActivityUpdated(Activity),
    /// An activity with an empty roster was removed.
    ActivityDeleted(ActivityId),
    /// An enrollment now links the member and activity; `changed` is
    /// false when the pair was already enrolled.
    Enrolled {
        member_id: MemberId,
        activity_id: ActivityId,
        changed: bool,
    },
    /// The enrollment no longer links the member and activity; `changed`
    /// is false when the pair was not enrolled.
    Unenrolled {
        member_id: MemberId,
        activity_id: ActivityId,
        changed: bool,
    },
}

/// Applies a command against the store, in one transaction.
///
/// `today` anchors every date-relative rule (minimum age, join date not
/// in the future) so outcomes are reproducible.
///
/// # Errors
///
/// Returns `CoreError::Validation` for field-rule or uniqueness
/// violations, `NotFound` for unresolved identifiers, the scheduling and
/// referential-integrity variants for their respective gates, and
/// `ExternalFailure` when the store itself fails.
pub fn apply<S: ClubStore>(store: &S, command: Command, today: Date) -> Result<Outcome, CoreError> {
    store.transaction(|tx| match command {
        Command::CreateMember { draft } => create_member(tx, &draft, today),
        Command::UpdateMember { member_id, draft } => update_member(tx, &member_id, &draft, today),
        Command::DeleteMember { member_id } => delete_member(tx, member_id),
        Command::CreateInstructor { draft } => create_instructor(tx, &draft, today),
        Command::UpdateInstructor {
            instructor_id,
            draft,
        } => update_instructor(tx, &instructor_id, &draft, today),
        Command::DeleteInstructor { instructor_id } => delete_instructor(tx, instructor_id),
        Command::CreateActivity { draft } => create_activity(tx, &draft),
        Command::UpdateActivity { activity_id, draft } => {
            update_activity(tx, &activity_id, &draft)
        }
        Command::DeleteActivity { activity_id } => delete_activity(tx, activity_id),
        Command::Enroll {
            member_id,
            activity_id,
        } => enroll(tx, member_id, activity_id),
        Command::Unenroll {
            member_id,
            activity_id,
        } => unenroll(tx, member_id, activity_id),
    })
}

/// Assigns the next code for `kind` from the stored maximum.
///
/// The sentinel fallback in [`next_code`] keeps the numeric part at 3
/// digits for any parseable input below 999; a result that no longer
/// parses as a code means the sequence ran past its width.
fn assign_code(kind: EntityKind, max_existing: Option<&str>) -> Result<String, CoreError> {
    let code: String = next_code(kind, max_existing);
    if code.len() == kind.prefix().len() + 3 {
        Ok(code)
    } else {
        Err(CoreError::ExternalFailure(format!(
            "{kind} identifier space exhausted at '{code}'"
        )))
    }
}

fn duplicate_national_id(value: &str) -> CoreError {
    CoreError::Validation(vec![FieldError::duplicate(
        "national_id",
        format!("national id '{value}' is already registered"),
    )])
}

fn create_member(
    tx: &mut dyn ClubTx,
    draft: &MemberDraft,
    today: Date,
) -> Result<Outcome, CoreError> {
    let fields = validate_member_draft(draft, today).map_err(CoreError::Validation)?;
    if tx.member_by_national_id(fields.national_id.value())?.is_some() {
        return Err(duplicate_national_id(fields.national_id.value()));
    }

    let code: String = assign_code(EntityKind::Member, tx.max_member_code()?.as_deref())?;
    let member_id: MemberId = MemberId::parse(&code)
        .map_err(|e| CoreError::ExternalFailure(e.to_string()))?;

    let member = Member {
        member_id,
        full_name: fields.full_name,
        national_id: fields.national_id,
        birth_date: fields.birth_date,
        phone: fields.phone,
        email: fields.email,
        join_date: fields.join_date,
        category: fields.category,
    };
    tx.insert_member(&member)?;
    Ok(Outcome::MemberCreated(member))
}

fn update_member(
    tx: &mut dyn ClubTx,
    member_id: &MemberId,
    draft: &MemberDraft,
    today: Date,
) -> Result<Outcome, CoreError> {
    if tx.find_member(member_id)?.is_none() {
        return Err(CoreError::not_found(EntityKind::Member, member_id.as_str()));
    }
    let fields = validate_member_draft(draft, today).map_err(CoreError::Validation)?;
    if let Some(other) = tx.member_by_national_id(fields.national_id.value())?
        && other.member_id != *member_id
    {
        return Err(duplicate_national_id(fields.national_id.value()));
    }

    let member = Member {
        member_id: member_id.clone(),
        full_name: fields.full_name,
        national_id: fields.national_id,
        birth_date: fields.birth_date,
        phone: fields.phone,
        email: fields.email,
        join_date: fields.join_date,
        category: fields.category,
    };
    tx.update_member(&member)?;
    Ok(Outcome::MemberUpdated(member))
}

/// Deletes a member together with every enrollment they hold.
fn delete_member(tx: &mut dyn ClubTx, member_id: MemberId) -> Result<Outcome, CoreError> {
    if tx.find_member(&member_id)?.is_none() {
        return Err(CoreError::not_found(EntityKind::Member, member_id.as_str()));
    }
    tx.delete_enrollments_for_member(&member_id)?;
    tx.delete_member(&member_id)?;
    Ok(Outcome::MemberDeleted(member_id))
}

fn create_instructor(
    tx: &mut dyn ClubTx,
    draft: &InstructorDraft,
    today: Date,
) -> Result<Outcome, CoreError> {
    let fields = validate_instructor_draft(draft, today).map_err(CoreError::Validation)?;
    if tx
        .instructor_by_national_id(fields.national_id.value())?
        .is_some()
    {
        return Err(duplicate_national_id(fields.national_id.value()));
    }

    let code: String = assign_code(EntityKind::Instructor, tx.max_instructor_code()?.as_deref())?;
    let instructor_id: InstructorId = InstructorId::parse(&code)
        .map_err(|e| CoreError::ExternalFailure(e.to_string()))?;

    let instructor = Instructor {
        instructor_id,
        full_name: fields.full_name,
        national_id: fields.national_id,
        phone: fields.phone,
        email: fields.email,
        join_date: fields.join_date,
        nickname: fields.nickname,
    };
    tx.insert_instructor(&instructor)?;
    Ok(Outcome::InstructorCreated(instructor))
}

fn update_instructor(
    tx: &mut dyn ClubTx,
    instructor_id: &InstructorId,
    draft: &InstructorDraft,
    today: Date,
) -> Result<Outcome, CoreError> {
    if tx.find_instructor(instructor_id)?.is_none() {
        return Err(CoreError::not_found(
            EntityKind::Instructor,
            instructor_id.as_str(),
        ));
    }
    let fields = validate_instructor_draft(draft, today).map_err(CoreError::Validation)?;
    if let Some(other) = tx.instructor_by_national_id(fields.national_id.value())?
        && other.instructor_id != *instructor_id
    {
        return Err(duplicate_national_id(fields.national_id.value()));
    }

    let instructor = Instructor {
        instructor_id: instructor_id.clone(),
        full_name: fields.full_name,
        national_id: fields.national_id,
        phone: fields.phone,
        email: fields.email,
        join_date: fields.join_date,
        nickname: fields.nickname,
    };
    tx.update_instructor(&instructor)?;
    Ok(Outcome::InstructorUpdated(instructor))
}

/// Deletes an instructor, refusing while any activity still names them
/// as responsible.
fn delete_instructor(
    tx: &mut dyn ClubTx,
    instructor_id: InstructorId,
) -> Result<Outcome, CoreError> {
    if tx.find_instructor(&instructor_id)?.is_none() {
        return Err(CoreError::not_found(
            EntityKind::Instructor,
            instructor_id.as_str(),
        ));
    }
    let activities: Vec<Activity> = tx.activities_for_instructor(&instructor_id)?;
    if !activities.is_empty() {
        return Err(CoreError::InstructorHasActivities {
            instructor_id,
            activity_count: activities.len(),
        });
    }
    tx.delete_instructor(&instructor_id)?;
    Ok(Outcome::InstructorDeleted(instructor_id))
}

/// Checks that the responsible instructor is free in the activity's
/// slot; `excluding` is the activity's own code on the update path.
fn check_slot_free(
    tx: &mut dyn ClubTx,
    instructor_id: &InstructorId,
    weekday: Weekday,
    hour: Hour,
    excluding: Option<&ActivityId>,
) -> Result<(), CoreError> {
    let existing: Vec<Activity> = tx.activities_for_instructor(instructor_id)?;
    if let Some(conflict) = find_slot_conflict(&existing, instructor_id, weekday, hour, excluding) {
        return Err(CoreError::InstructorSlotTaken {
            instructor_id: instructor_id.clone(),
            weekday,
            hour,
            existing_activity_id: conflict.activity_id.clone(),
        });
    }
    Ok(())
}

fn create_activity(tx: &mut dyn ClubTx, draft: &ActivityDraft) -> Result<Outcome, CoreError> {
    let fields = validate_activity_draft(draft).map_err(CoreError::Validation)?;
    if tx.find_instructor(&fields.instructor_id)?.is_none() {
        return Err(CoreError::Validation(vec![FieldError::unknown_reference(
            "instructor_id",
            format!("no instructor with code '{}'", fields.instructor_id),
        )]));
    }
    check_slot_free(tx, &fields.instructor_id, fields.weekday, fields.hour, None)?;

    let code: String = assign_code(EntityKind::Activity, tx.max_activity_code()?.as_deref())?;
    let activity_id: ActivityId = ActivityId::parse(&code)
        .map_err(|e| CoreError::ExternalFailure(e.to_string()))?;

    let activity = Activity {
        activity_id,
        name: fields.name,
        weekday: fields.weekday,
        hour: fields.hour,
        description: fields.description,
        monthly_base_price: fields.monthly_base_price,
        instructor_id: fields.instructor_id,
    };
    tx.insert_activity(&activity)?;
    Ok(Outcome::ActivityCreated(activity))
}

fn update_activity(
    tx: &mut dyn ClubTx,
    activity_id: &ActivityId,
    draft: &ActivityDraft,
) -> Result<Outcome, CoreError> {
    if tx.find_activity(activity_id)?.is_none() {
        return Err(CoreError::not_found(
            EntityKind::Activity,
            activity_id.as_str(),
        ));
    }
    let fields = validate_activity_draft(draft).map_err(CoreError::Validation)?;
    if tx.find_instructor(&fields.instructor_id)?.is_none() {
        return Err(CoreError::Validation(vec![FieldError::unknown_reference(
            "instructor_id",
            format!("no instructor with code '{}'", fields.instructor_id),
        )]));
    }
    // The record being updated must not collide with itself when it
    // keeps its current slot.
    check_slot_free(
        tx,
        &fields.instructor_id,
        fields.weekday,
        fields.hour,
        Some(activity_id),
    )?;

    let activity = Activity {
        activity_id: activity_id.clone(),
        name: fields.name,
        weekday: fields.weekday,
        hour: fields.hour,
        description: fields.description,
        monthly_base_price: fields.monthly_base_price,
        instructor_id: fields.instructor_id,
    };
    tx.update_activity(&activity)?;
    Ok(Outcome::ActivityUpdated(activity))
}

/// Deletes an activity, refusing while its roster is non-empty.
fn delete_activity(tx: &mut dyn ClubTx, activity_id: ActivityId) -> Result<Outcome, CoreError> {
    if tx.find_activity(&activity_id)?.is_none() {
        return Err(CoreError::not_found(
            EntityKind::Activity,
            activity_id.as_str(),
        ));
    }
    let enrolled_count: u64 = tx.enrollment_count(&activity_id)?;
    if enrolled_count > 0 {
        return Err(CoreError::ActivityHasEnrolledMembers {
            activity_id,
            enrolled_count,
        });
    }
    tx.delete_activity(&activity_id)?;
    Ok(Outcome::ActivityDeleted(activity_id))
}

/// Links a member and an activity. Enrolling an already-enrolled pair
/// is a no-op reported through `changed`.
fn enroll(
    tx: &mut dyn ClubTx,
    member_id: MemberId,
    activity_id: ActivityId,
) -> Result<Outcome, CoreError> {
    if tx.find_member(&member_id)?.is_none() {
        return Err(CoreError::not_found(EntityKind::Member, member_id.as_str()));
    }
    if tx.find_activity(&activity_id)?.is_none() {
        return Err(CoreError::not_found(
            EntityKind::Activity,
            activity_id.as_str(),
        ));
    }
    let changed: bool = if tx.enrollment_exists(&member_id, &activity_id)? {
        false
    } else {
        tx.insert_enrollment(&member_id, &activity_id)?;
        true
    };
    Ok(Outcome::Enrolled {
        member_id,
        activity_id,
        changed,
    })
}

/// Unlinks a member and an activity. Unenrolling a pair that is not
/// enrolled is a no-op reported through `changed`.
fn unenroll(
    tx: &mut dyn ClubTx,
    member_id: MemberId,
    activity_id: ActivityId,
) -> Result<Outcome, CoreError> {
    if tx.find_member(&member_id)?.is_none() {
        return Err(CoreError::not_found(EntityKind::Member, member_id.as_str()));
    }
    if tx.find_activity(&activity_id)?.is_none() {
        return Err(CoreError::not_found(
            EntityKind::Activity,
            activity_id.as_str(),
        ));
    }
    let changed: bool = if tx.enrollment_exists(&member_id, &activity_id)? {
        tx.delete_enrollment(&member_id, &activity_id)?;
        true
    } else {
        false
    };
    Ok(Outcome::Unenrolled {
        member_id,
        activity_id,
        changed,
    })
}
