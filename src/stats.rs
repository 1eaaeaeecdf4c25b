// 📊 Statistics Aggregate - the snapshot the dashboard views are built from
//
// Shapes mirror the JSON produced by the backend aggregation endpoints.
// Every numeric field is optional: the aggregation pipeline omits or nulls
// fields for empty groups, and the formatting layer turns those into zeros.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// REVENUE BUCKETS
// ============================================================================

/// One element of a revenue-by-category aggregation.
///
/// Category tags (`id`) are neither guaranteed unique nor present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBucket {
    /// Category tag, e.g. "college" or "departmental"
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,

    #[serde(default)]
    pub revenue: Option<f64>,

    #[serde(default)]
    pub count: Option<u64>,
}

impl RevenueBucket {
    pub fn new(id: impl Into<String>, revenue: f64, count: u64) -> Self {
        RevenueBucket {
            id: Some(id.into()),
            revenue: Some(revenue),
            count: Some(count),
        }
    }
}

// ============================================================================
// ACCOUNT LEDGERS
// ============================================================================

/// Running totals of one financial account (e.g. "college_general").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLedger {
    #[serde(default)]
    pub total_revenue: Option<f64>,

    #[serde(default)]
    pub expenses: Option<f64>,

    #[serde(default)]
    pub available_balance: Option<f64>,
}

impl AccountLedger {
    pub fn new(total_revenue: f64, expenses: f64, available_balance: f64) -> Self {
        AccountLedger {
            total_revenue: Some(total_revenue),
            expenses: Some(expenses),
            available_balance: Some(available_balance),
        }
    }
}

// ============================================================================
// DEPARTMENT BREAKDOWN
// ============================================================================

/// Payment type an entry of the department breakdown belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownType {
    College,
    Departmental,
}

impl BreakdownType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakdownType::College => "college",
            BreakdownType::Departmental => "departmental",
        }
    }
}

/// Grouping key of a breakdown entry.
///
/// Only `type` is interpreted here; department, level and any other
/// grouping keys are carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakdownKey {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentBreakdownEntry {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: BreakdownKey,

    #[serde(default)]
    pub revenue: Option<f64>,

    #[serde(default)]
    pub count: Option<u64>,
}

impl DepartmentBreakdownEntry {
    /// Build an entry with a `type` and a `department` grouping key
    pub fn new(kind: BreakdownType, department: &str, revenue: f64, count: u64) -> Self {
        let mut extra = serde_json::Map::new();
        extra.insert("department".to_string(), serde_json::json!(department));

        DepartmentBreakdownEntry {
            id: BreakdownKey {
                kind: Some(kind.as_str().to_string()),
                extra,
            },
            revenue: Some(revenue),
            count: Some(count),
        }
    }

    pub fn department(&self) -> Option<&str> {
        self.id.extra.get("department").and_then(|v| v.as_str())
    }
}

// ============================================================================
// FINANCIAL STATS SNAPSHOT
// ============================================================================

/// Snapshot consumed by the super-admin, college and department views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStats {
    /// Ledgers keyed by canonical account name
    #[serde(default)]
    pub accounts: BTreeMap<String, AccountLedger>,

    #[serde(default)]
    pub revenue_by_type: Option<Vec<RevenueBucket>>,

    #[serde(default)]
    pub department_breakdown: Option<Vec<DepartmentBreakdownEntry>>,

    #[serde(default)]
    pub total_revenue: Option<f64>,

    #[serde(default)]
    pub total_payments: Option<u64>,

    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

impl FinancialStats {
    /// Parse a snapshot from the backend's JSON payload
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// TESTS
// ============================================================================
