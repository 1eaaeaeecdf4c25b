// 💰 Display Formatting - amounts, ratios and net revenue
//
// Everything here is total: missing, null, NaN and infinite inputs format
// as zero instead of leaking "NaN" or "Infinity" into the dashboard.

use crate::accounts::AccountNameRegistry;
use crate::config::FormatConfig;
use log::debug;
use std::sync::LazyLock;

static DEFAULT_FORMATTER: LazyLock<StatsFormatter> = LazyLock::new(|| StatsFormatter::new(FormatConfig::default()));

// ============================================================================
// STATS FORMATTER
// ============================================================================

/// Formatter bound to a [`FormatConfig`]
///
/// The free functions of this module use the process-wide default
/// configuration ("₦", fee 200, grouped thousands).
#[derive(Debug, Clone)]
pub struct StatsFormatter {
    config: FormatConfig,
    labels: AccountNameRegistry,
}

impl Default for StatsFormatter {
    fn default() -> Self {
        Self::new(FormatConfig::default())
    }
}

impl StatsFormatter {
    pub fn new(config: FormatConfig) -> Self {
        let mut labels = AccountNameRegistry::with_defaults();
        for (key, label) in &config.account_labels {
            labels.register(key.clone(), label.clone());
        }

        StatsFormatter { config, labels }
    }

    pub fn global() -> &'static StatsFormatter {
        &DEFAULT_FORMATTER
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn labels(&self) -> &AccountNameRegistry {
        &self.labels
    }

    /// Format an amount as currency: `1234567.0` → `"₦1,234,567"`
    ///
    /// Whole amounts carry no decimals; fractional amounts are rounded to
    /// two decimals with trailing zeros trimmed (`1234.5` → `"₦1,234.5"`).
    pub fn format_currency(&self, amount: impl Into<Option<f64>>) -> String {
        let value = finite_or_zero(amount.into());
        let fixed = format!("{:.2}", value.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
        let digits = if self.config.thousands_grouping {
            group_thousands(whole)
        } else {
            whole.to_string()
        };
        let decimals = match fraction.trim_end_matches('0') {
            "" => String::new(),
            trimmed => format!(".{}", trimmed),
        };

        format!("{}{}{}{}", sign, self.config.currency_symbol, digits, decimals)
    }

    /// Revenue left after the per-payment maintenance deduction, never negative
    pub fn compute_net_amount(&self, gross_amount: impl Into<Option<f64>>, payment_count: u64) -> f64 {
        let gross = finite_or_zero(gross_amount.into());
        (gross - self.maintenance_deduction(payment_count)).max(0.0)
    }

    /// Total maintenance deducted for a number of payments
    pub fn maintenance_deduction(&self, payment_count: u64) -> f64 {
        payment_count as f64 * sanitize_fee(self.config.maintenance_fee_per_payment)
    }

    /// Human-readable label for a canonical account key
    pub fn account_name(&self, key: &str) -> String {
        self.labels.label_for(key)
    }
}

/// `available / total * 100`, or `None` when the total is missing, zero or not finite
pub fn maintenance_ratio(available: impl Into<Option<f64>>, total: impl Into<Option<f64>>) -> Option<f64> {
    let total = total.into().filter(|t| t.is_finite() && *t != 0.0)?;
    let ratio = finite_or_zero(available.into()) / total * 100.0;
    ratio.is_finite().then_some(ratio)
}

/// Ratio as a one-decimal percentage; a guarded total yields `"0.0%"`
pub fn compute_maintenance_ratio(available: impl Into<Option<f64>>, total: impl Into<Option<f64>>) -> String {
    match maintenance_ratio(available, total) {
        Some(ratio) => format!("{:.1}%", ratio),
        None => {
            debug!("Maintenance ratio requested with an empty total, reporting 0.0%");
            "0.0%".to_string()
        }
    }
}

/// Format an amount with the default currency settings
pub fn format_currency(amount: impl Into<Option<f64>>) -> String {
    StatsFormatter::global().format_currency(amount)
}

/// Net amount with the default 200-per-payment maintenance fee
pub fn compute_net_amount(gross_amount: impl Into<Option<f64>>, payment_count: u64) -> f64 {
    StatsFormatter::global().compute_net_amount(gross_amount, payment_count)
}

pub(crate) fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Negative or non-finite fees deduct nothing
pub(crate) fn sanitize_fee(fee: f64) -> f64 {
    if fee.is_finite() && fee > 0.0 { fee } else { 0.0 }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(1234567.0), "₦1,234,567");
        assert_eq!(format_currency(500000.0), "₦500,000");
        assert_eq!(format_currency(999.0), "₦999");
        assert_eq!(format_currency(1000.0), "₦1,000");
        assert_eq!(format_currency(0.0), "₦0");
    }

    #[test]
    fn test_format_currency_missing_values() {
        assert_eq!(format_currency(None), "₦0");
        assert_eq!(format_currency(f64::NAN), "₦0");
        assert_eq!(format_currency(f64::INFINITY), "₦0");
    }

    #[test]
    fn test_format_currency_fractions_and_negatives() {
        assert_eq!(format_currency(1234.5), "₦1,234.5");
        assert_eq!(format_currency(1234.56), "₦1,234.56");
        assert_eq!(format_currency(0.05), "₦0.05");
        assert_eq!(format_currency(-500.0), "-₦500");
        assert_eq!(format_currency(-0.001), "₦0");
    }

    #[test]
    fn test_format_currency_large_amounts() {
        assert_eq!(format_currency(1e20), "₦100,000,000,000,000,000,000");
        assert_eq!(format_currency(18446744073709551616.0), "₦18,446,744,073,709,551,616");
        assert_eq!(format_currency(-2e18), "-₦2,000,000,000,000,000,000");
    }

    #[test]
    fn test_format_currency_with_config() {
        let formatter = StatsFormatter::new(
            FormatConfig::default()
                .with_currency_symbol("$")
                .with_thousands_grouping(false),
        );

        assert_eq!(formatter.format_currency(1234567.0), "$1234567");
        assert_eq!(formatter.format_currency(None), "$0");
    }

    #[test]
    fn test_compute_net_amount() {
        assert_eq!(compute_net_amount(1000.0, 3), 400.0);
        assert_eq!(compute_net_amount(100.0, 1), 0.0);
        assert_eq!(compute_net_amount(None, 5), 0.0);
        assert_eq!(compute_net_amount(5000.0, 0), 5000.0);
    }

    #[test]
    fn test_compute_net_amount_custom_fee() {
        let formatter = StatsFormatter::new(FormatConfig::default().with_maintenance_fee(50.0));

        assert_eq!(formatter.compute_net_amount(1000.0, 3), 850.0);
        assert_eq!(formatter.maintenance_deduction(4), 200.0);
    }

    #[test]
    fn test_invalid_fee_deducts_nothing() {
        let config = FormatConfig {
            maintenance_fee_per_payment: -200.0,
            ..FormatConfig::default()
        };
        let formatter = StatsFormatter::new(config);

        assert_eq!(formatter.compute_net_amount(1000.0, 3), 1000.0);
        assert_eq!(formatter.maintenance_deduction(3), 0.0);
        assert_eq!(sanitize_fee(f64::NAN), 0.0);
    }

    #[test]
    fn test_maintenance_ratio() {
        assert_eq!(compute_maintenance_ratio(250.0, 1000.0), "25.0%");
        assert_eq!(compute_maintenance_ratio(1.0, 3.0), "33.3%");
        assert_eq!(compute_maintenance_ratio(None, 1000.0), "0.0%");
    }

    #[test]
    fn test_maintenance_ratio_guarded_total() {
        assert_eq!(compute_maintenance_ratio(250.0, 0.0), "0.0%");
        assert_eq!(compute_maintenance_ratio(250.0, None), "0.0%");
        assert_eq!(compute_maintenance_ratio(250.0, f64::NAN), "0.0%");
        assert_eq!(maintenance_ratio(250.0, 0.0), None);
    }

    #[test]
    fn test_formatter_account_label_overrides() {
        let formatter = StatsFormatter::new(FormatConfig::default().with_account_label("dept_nacoss", "NACOSS"));

        assert_eq!(formatter.account_name("dept_nacoss"), "NACOSS");
        assert_eq!(formatter.account_name("college_general"), "College General");
        assert_eq!(formatter.account_name("dept_x_y"), "Dept X Y");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("12"), "12");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567890"), "1,234,567,890");
    }
}
