// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{ActivityId, InstructorId, MemberId};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use time::Date;

// Format rules for identity fields. The patterns are literals, so
// compilation cannot fail at runtime.
#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("format pattern is a valid literal")
}

static NATIONAL_ID_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{8}[A-Z]$"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{9}$"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[\w.\-]+@[\w\-]+(\.[\w\-]+)*\.[A-Za-z0-9]{2,}$"));

/// A Spanish national identity document (DNI): 8 digits followed by one
/// uppercase letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NationalId {
    value: String,
}

impl NationalId {
    /// Parses a national id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidNationalId` if the value is not
    /// exactly 8 digits followed by one uppercase A-Z letter.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if NATIONAL_ID_RE.is_match(value) {
            Ok(Self {
                value: value.to_owned(),
            })
        } else {
            Err(DomainError::InvalidNationalId(value.to_owned()))
        }
    }

    /// Returns the raw document value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A contact phone number: exactly 9 digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    value: String,
}

impl Phone {
    /// Parses a phone number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPhone` if the value is not exactly
    /// 9 digits.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if PHONE_RE.is_match(value) {
            Ok(Self {
                value: value.to_owned(),
            })
        } else {
            Err(DomainError::InvalidPhone(value.to_owned()))
        }
    }

    /// Returns the raw phone number.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An email address matching `local@domain.tld`, where local and domain
/// parts use word characters, dots and hyphens, and the TLD is at least
/// two alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    value: String,
}

impl Email {
    /// Parses an email address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmail` if the value does not match
    /// the accepted pattern.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if EMAIL_RE.is_match(value) {
            Ok(Self {
                value: value.to_owned(),
            })
        } else {
            Err(DomainError::InvalidEmail(value.to_owned()))
        }
    }

    /// Returns the raw address.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Membership category assigned to a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
    D,
    E,
}

impl Category {
    /// Parses a category from a single-character string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCategory` if the string is not one
    /// of `A` through `E`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            _ => Err(DomainError::InvalidCategory(s.to_owned())),
        }
    }

    /// Parses a category from its character form.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCategory` if the character is not
    /// `A` through `E`.
    pub fn from_char(c: char) -> Result<Self, DomainError> {
        match c {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            'E' => Ok(Self::E),
            _ => Err(DomainError::InvalidCategory(c.to_string())),
        }
    }

    /// Returns the character representation of this category.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Day of the week an activity takes place on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// The seven canonical values in calendar order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Parses a weekday from its canonical name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeekday` if the string is not one of
    /// the seven canonical day names.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Monday" => Ok(Self::Monday),
            "Tuesday" => Ok(Self::Tuesday),
            "Wednesday" => Ok(Self::Wednesday),
            "Thursday" => Ok(Self::Thursday),
            "Friday" => Ok(Self::Friday),
            "Saturday" => Ok(Self::Saturday),
            "Sunday" => Ok(Self::Sunday),
            _ => Err(DomainError::InvalidWeekday(s.to_owned())),
        }
    }

    /// Returns the canonical name of this weekday.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An activity start hour constrained to the facility's operating hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hour {
    value: u8,
}

impl Hour {
    /// First operating hour of the day.
    pub const MIN: u8 = 8;
    /// Last operating hour of the day.
    pub const MAX: u8 = 22;

    /// Creates a new `Hour`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::HourOutOfRange` if the value is outside the
    /// operating-hours range.
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self { value })
        } else {
            Err(DomainError::HourOutOfRange(value))
        }
    }

    /// Returns the hour value (24-hour clock).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }
}

impl std::fmt::Display for Hour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.value)
    }
}

/// A person enrolled in the facility, distinct from staff.
///
/// The enrollment relation to activities is held in an explicit join
/// relation owned by the store, not as a back-reference set on the entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Member code (primary key, immutable after creation).
    pub member_id: MemberId,
    /// Full name.
    pub full_name: String,
    /// National identity document, unique across members.
    pub national_id: NationalId,
    /// Date of birth; members must be adults.
    pub birth_date: Date,
    /// Contact phone.
    pub phone: Phone,
    /// Contact email.
    pub email: Email,
    /// Date the member joined; never in the future.
    pub join_date: Date,
    /// Assigned membership category.
    pub category: Category,
}

// Entity identity is the member code: two instances with the same code
// describe the same member regardless of other field values.
impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.member_id == other.member_id
    }
}

impl Eq for Member {}

impl std::hash::Hash for Member {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.member_id.hash(state);
    }
}

/// A staff member responsible for running activities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    /// Instructor code (primary key, immutable after creation).
    pub instructor_id: InstructorId,
    /// Full name.
    pub full_name: String,
    /// National identity document, unique across instructors.
    pub national_id: NationalId,
    /// Contact phone.
    pub phone: Phone,
    /// Contact email.
    pub email: Email,
    /// Date the instructor joined; never in the future.
    pub join_date: Date,
    /// Informal display name, if any.
    pub nickname: Option<String>,
}

impl PartialEq for Instructor {
    fn eq(&self, other: &Self) -> bool {
        self.instructor_id == other.instructor_id
    }
}

impl Eq for Instructor {}

impl std::hash::Hash for Instructor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.instructor_id.hash(state);
    }
}

/// A scheduled class, owned by exactly one instructor, with zero or more
/// enrolled members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Activity code (primary key, immutable after creation).
    pub activity_id: ActivityId,
    /// Display name.
    pub name: String,
    /// Day of the week the activity runs.
    pub weekday: Weekday,
    /// Start hour within operating hours.
    pub hour: Hour,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Monthly base price in whole currency units.
    pub monthly_base_price: u32,
    /// The instructor responsible for this activity.
    pub instructor_id: InstructorId,
}

impl Activity {
    /// Returns whether this activity occupies the given `(weekday, hour)`
    /// slot.
    #[must_use]
    pub fn occupies_slot(&self, weekday: Weekday, hour: Hour) -> bool {
        self.weekday == weekday && self.hour == hour
    }
}

impl PartialEq for Activity {
    fn eq(&self, other: &Self) -> bool {
        self.activity_id == other.activity_id
    }
}

impl Eq for Activity {}

impl std::hash::Hash for Activity {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.activity_id.hash(state);
    }
}
