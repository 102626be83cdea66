// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clubhouse_domain::{ActivityId, EntityKind, FieldError, Hour, InstructorId, Weekday};

/// Errors surfaced by core operations.
///
/// `Validation` and `InstructorSlotTaken` are raised before any
/// persistence attempt and leave the store untouched; the
/// referential-integrity pair and `ExternalFailure` roll the enclosing
/// transaction back before surfacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// One or more field-level rule violations; the entity was not
    /// persisted and the input can be corrected and resubmitted.
    Validation(Vec<FieldError>),
    /// A referenced identifier does not resolve.
    NotFound {
        /// The kind of entity looked up.
        entity: EntityKind,
        /// The identifier that did not resolve.
        id: String,
    },
    /// The responsible instructor already holds another activity in the
    /// requested slot.
    InstructorSlotTaken {
        /// The double-booked instructor.
        instructor_id: InstructorId,
        /// The colliding day.
        weekday: Weekday,
        /// The colliding hour.
        hour: Hour,
        /// The activity already occupying the slot.
        existing_activity_id: ActivityId,
    },
    /// The instructor cannot be deleted while responsible for
    /// activities.
    InstructorHasActivities {
        /// The instructor whose deletion was blocked.
        instructor_id: InstructorId,
        /// How many activities the instructor is responsible for.
        activity_count: usize,
    },
    /// The activity cannot be deleted while members are enrolled.
    ActivityHasEnrolledMembers {
        /// The activity whose deletion was blocked.
        activity_id: ActivityId,
        /// How many members are enrolled.
        enrolled_count: u64,
    },
    /// The repository, transaction, or aggregation routine raised an
    /// unexpected error.
    ExternalFailure(String),
}

impl CoreError {
    /// Convenience constructor for an unresolved identifier.
    #[must_use]
    pub fn not_found(entity: EntityKind, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_owned(),
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            }
            Self::NotFound { entity, id } => {
                write!(f, "No {entity} with code '{id}'")
            }
            Self::InstructorSlotTaken {
                instructor_id,
                weekday,
                hour,
                existing_activity_id,
            } => {
                write!(
                    f,
                    "Instructor {instructor_id} already runs activity {existing_activity_id} on {weekday} at {hour}"
                )
            }
            Self::InstructorHasActivities {
                instructor_id,
                activity_count,
            } => {
                write!(
                    f,
                    "Instructor {instructor_id} cannot be deleted: responsible for {activity_count} activities"
                )
            }
            Self::ActivityHasEnrolledMembers {
                activity_id,
                enrolled_count,
            } => {
                write!(
                    f,
                    "Activity {activity_id} cannot be deleted: {enrolled_count} members are enrolled"
                )
            }
            Self::ExternalFailure(msg) => write!(f, "External failure: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}
