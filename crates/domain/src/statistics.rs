// Copyright (C) 2026 Clubhouse Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Category;
use serde::{Deserialize, Serialize};

/// Precomputed per-activity metrics as shaped for display.
///
/// Produced by decoding the four positional outputs of the store's
/// aggregation routine; the core performs no aggregation of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityStatistics {
    /// Number of members currently enrolled.
    pub enrolled_count: u32,
    /// Mean age in years of the enrolled members; `0.0` for an empty
    /// roster.
    pub average_age: f64,
    /// Modal membership category among the enrolled members; `None` for
    /// an empty roster.
    pub most_common_category: Option<Category>,
    /// Enrolled count multiplied by the activity's monthly base price.
    pub total_monthly_revenue: f64,
}
