// 🔎 Bucket Selection - pull revenue/count figures out of aggregation results

use crate::formatting::finite_or_zero;
use crate::stats::{BreakdownType, DepartmentBreakdownEntry, RevenueBucket};
use log::debug;
use serde::{Deserialize, Serialize};

/// Revenue and payment count of one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub revenue: f64,
    pub count: u64,
}

impl BucketSummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0 && self.revenue == 0.0
    }
}

impl From<&RevenueBucket> for BucketSummary {
    fn from(bucket: &RevenueBucket) -> Self {
        BucketSummary {
            revenue: finite_or_zero(bucket.revenue),
            count: bucket.count.unwrap_or(0),
        }
    }
}

/// Figures of the first bucket whose tag equals `category_id`
///
/// Missing input, an empty sequence or no matching tag all yield `{0, 0}`.
/// Duplicate tags are not merged: the first match wins.
pub fn select_bucket_by_category(buckets: Option<&[RevenueBucket]>, category_id: &str) -> BucketSummary {
    let found = buckets
        .unwrap_or_default()
        .iter()
        .find(|bucket| bucket.id.as_deref() == Some(category_id));

    match found {
        Some(bucket) => BucketSummary::from(bucket),
        None => {
            debug!("No revenue bucket tagged {:?}", category_id);
            BucketSummary::default()
        }
    }
}

/// Breakdown entries of one payment type, in their original order
pub fn filter_breakdown_by_type(
    entries: Option<&[DepartmentBreakdownEntry]>,
    kind: BreakdownType,
) -> Vec<&DepartmentBreakdownEntry> {
    entries
        .unwrap_or_default()
        .iter()
        .filter(|entry| entry.id.kind.as_deref() == Some(kind.as_str()))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
