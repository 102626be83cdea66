// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-activity roster aggregation.
//!
//! The store owns the aggregation routine and hands the raw figures
//! back; decoding them into domain types happens in the coordination
//! layer.

use std::collections::BTreeMap;

use clubhouse::RawActivityStatistics;
use clubhouse_domain::{Activity, ActivityId, Member, age_in_years};
use diesel::SqliteConnection;
use num_traits::ToPrimitive;
use time::Date;

use crate::error::PersistenceError;
use crate::queries;

/// Aggregates the roster of one activity: enrolled count, average age
/// at `today`, modal category letter and total monthly revenue.
///
/// An empty roster yields zero figures and no modal category. Category
/// ties break to the lexicographically smallest letter.
pub fn activity_statistics_raw(
    conn: &mut SqliteConnection,
    activity_id: &ActivityId,
    today: Date,
) -> Result<RawActivityStatistics, PersistenceError> {
    let activity: Activity = queries::find_activity(conn, activity_id)?.ok_or_else(|| {
        PersistenceError::NotFound(format!("activity '{activity_id}' does not exist"))
    })?;
    let roster: Vec<Member> = queries::members_for_activity(conn, activity_id)?;
    if roster.is_empty() {
        return Ok(RawActivityStatistics(0, 0.0, None, 0.0));
    }

    let count: i64 = roster.len().to_i64().ok_or_else(|| {
        PersistenceError::QueryFailed(String::from("roster size exceeds i64"))
    })?;
    let count_f: f64 = count.to_f64().ok_or_else(|| {
        PersistenceError::QueryFailed(String::from("roster size exceeds f64"))
    })?;

    let total_age: i32 = roster
        .iter()
        .map(|member| age_in_years(member.birth_date, today))
        .sum();
    let average_age: f64 = f64::from(total_age) / count_f;

    let mut tallies: BTreeMap<char, u32> = BTreeMap::new();
    for member in &roster {
        *tallies.entry(member.category.as_char()).or_insert(0) += 1;
    }
    // BTreeMap iterates in letter order, so keeping only strictly larger
    // tallies leaves the smallest letter on a tie.
    let mut modal: Option<(char, u32)> = None;
    for (letter, tally) in tallies {
        if modal.is_none_or(|(_, best)| tally > best) {
            modal = Some((letter, tally));
        }
    }

    let revenue: f64 = count_f * f64::from(activity.monthly_base_price);
    Ok(RawActivityStatistics(
        count,
        average_age,
        modal.map(|(letter, _)| letter),
        revenue,
    ))
}
