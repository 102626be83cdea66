// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod queries;
mod statistics;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{Outcome, apply};
pub use command::Command;
pub use error::CoreError;
pub use queries::{
    MemberActivityView, activity_roster, get_activity, get_instructor, get_member,
    instructor_activities, list_activities, list_instructors, list_members, member_activity_view,
    search_activities,
};
pub use statistics::activity_statistics;
pub use store::{ClubStore, ClubTx, RawActivityStatistics};
