// Dashboard Statistics - Core Library
// Turns backend aggregation snapshots into display-ready dashboard values

pub mod stats;
pub mod config;
pub mod error;
pub mod formatting;
pub mod accounts;
pub mod selection;
pub mod levels;
pub mod cards;

// Re-export commonly used types
pub use stats::{
    FinancialStats, RevenueBucket, AccountLedger,
    DepartmentBreakdownEntry, BreakdownKey, BreakdownType,
};
pub use config::FormatConfig;
pub use error::LevelParseError;
pub use formatting::{
    StatsFormatter,
    format_currency, compute_net_amount, compute_maintenance_ratio, maintenance_ratio,
};
pub use accounts::{AccountNameRegistry, format_account_name};
pub use selection::{BucketSummary, select_bucket_by_category, filter_breakdown_by_type};
pub use levels::{LevelFilter, LevelQuery, normalize_level_for_query};
pub use cards::{AccountCard, RevenueLine, RevenueSummary, account_cards, revenue_summary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
