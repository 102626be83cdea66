// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed façade over the store's per-activity aggregation routine.

use clubhouse_domain::{ActivityId, ActivityStatistics, Category, EntityKind};
use time::Date;

use crate::error::CoreError;
use crate::store::{ClubStore, RawActivityStatistics};

/// Computes the enrollment statistics for one activity.
///
/// Aggregation runs inside the store; this façade only checks that the
/// activity exists and decodes the raw figures into domain types. An
/// empty roster yields zero counts and no modal category. `today`
/// anchors the average-age calculation.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no activity holds the code, and
/// `ExternalFailure` if the aggregation routine produces figures that do
/// not decode (a negative count or an unknown category letter).
pub fn activity_statistics<S: ClubStore>(
    store: &S,
    activity_id: &ActivityId,
    today: Date,
) -> Result<ActivityStatistics, CoreError> {
    store.transaction(|tx| {
        if tx.find_activity(activity_id)?.is_none() {
            return Err(CoreError::not_found(
                EntityKind::Activity,
                activity_id.as_str(),
            ));
        }
        let raw: RawActivityStatistics = tx.activity_statistics_raw(activity_id, today)?;
        decode(&raw)
    })
}

fn decode(raw: &RawActivityStatistics) -> Result<ActivityStatistics, CoreError> {
    let RawActivityStatistics(count, average_age, category_letter, revenue) = raw;
    let enrolled_count: u32 = u32::try_from(*count).map_err(|_| {
        CoreError::ExternalFailure(format!("aggregation produced a negative roster count: {count}"))
    })?;
    let most_common_category: Option<Category> = match category_letter {
        Some(letter) => Some(Category::from_char(*letter).map_err(|e| {
            CoreError::ExternalFailure(format!("aggregation produced an unknown category: {e}"))
        })?),
        None => None,
    };
    Ok(ActivityStatistics {
        enrolled_count,
        average_age: *average_age,
        most_common_category,
        total_monthly_revenue: *revenue,
    })
}
