// 🗂️ Dashboard Cards - display-ready values for the account and revenue views

use crate::formatting::StatsFormatter;
use crate::selection::{select_bucket_by_category, BucketSummary};
use crate::stats::{BreakdownType, FinancialStats};
use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT CARDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCard {
    /// Canonical account key
    pub key: String,
    pub label: String,
    pub total_revenue: String,
    pub expenses: String,
    pub available_balance: String,
}

// ============================================================================
// REVENUE SUMMARY
// ============================================================================

/// Revenue of one payment type before and after maintenance deduction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueLine {
    pub summary: BucketSummary,
    pub net_amount: f64,
    pub gross_display: String,
    pub net_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub college: RevenueLine,
    pub departmental: RevenueLine,
    pub total_revenue: String,
    pub total_payments: u64,
}

impl StatsFormatter {
    /// One card per ledger: built-in accounts first in table order, then
    /// any other keys alphabetically
    pub fn account_cards(&self, stats: &FinancialStats) -> Vec<AccountCard> {
        let mut keys: Vec<&String> = stats.accounts.keys().collect();
        let rank = |key: &str| self.labels().position(key).unwrap_or(usize::MAX);
        keys.sort_by(|a, b| (rank(a.as_str()), a).cmp(&(rank(b.as_str()), b)));

        keys.into_iter()
            .map(|key| {
                let ledger = &stats.accounts[key];
                AccountCard {
                    key: key.clone(),
                    label: self.account_name(key),
                    total_revenue: self.format_currency(ledger.total_revenue),
                    expenses: self.format_currency(ledger.expenses),
                    available_balance: self.format_currency(ledger.available_balance),
                }
            })
            .collect()
    }

    pub fn revenue_line(&self, summary: BucketSummary) -> RevenueLine {
        let net_amount = self.compute_net_amount(summary.revenue, summary.count);
        RevenueLine {
            summary,
            net_amount,
            gross_display: self.format_currency(summary.revenue),
            net_display: self.format_currency(net_amount),
        }
    }

    /// College vs departmental revenue of a snapshot
    ///
    /// Snapshot totals fall back to the sum of both payment types when the
    /// backend did not report them.
    pub fn revenue_summary(&self, stats: &FinancialStats) -> RevenueSummary {
        let buckets = stats.revenue_by_type.as_deref();
        let college = select_bucket_by_category(buckets, BreakdownType::College.as_str());
        let departmental = select_bucket_by_category(buckets, BreakdownType::Departmental.as_str());

        let total_revenue = stats
            .total_revenue
            .filter(|v| v.is_finite())
            .unwrap_or(college.revenue + departmental.revenue);
        let total_payments = stats
            .total_payments
            .unwrap_or(college.count.saturating_add(departmental.count));

        RevenueSummary {
            college: self.revenue_line(college),
            departmental: self.revenue_line(departmental),
            total_revenue: self.format_currency(total_revenue),
            total_payments,
        }
    }
}

/// Account cards with the default formatter
pub fn account_cards(stats: &FinancialStats) -> Vec<AccountCard> {
    StatsFormatter::global().account_cards(stats)
}

/// Revenue summary with the default formatter
pub fn revenue_summary(stats: &FinancialStats) -> RevenueSummary {
    StatsFormatter::global().revenue_summary(stats)
}

// ============================================================================
// TESTS
// ============================================================================
