// ⚙️ Format Configuration - currency glyph, maintenance fee, label overrides

use crate::formatting::sanitize_fee;
use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₦";
pub const DEFAULT_MAINTENANCE_FEE_PER_PAYMENT: f64 = 200.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatConfig {
    /// Glyph prefixed to every formatted amount
    pub currency_symbol: String,

    /// Deduction applied per payment when computing net revenue
    pub maintenance_fee_per_payment: f64,

    /// Group integer digits by thousands ("1,234,567")
    pub thousands_grouping: bool,

    /// Extra or overriding entries for the account label table
    pub account_labels: BTreeMap<String, String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            maintenance_fee_per_payment: DEFAULT_MAINTENANCE_FEE_PER_PAYMENT,
            thousands_grouping: true,
            account_labels: BTreeMap::new(),
        }
    }
}

impl FormatConfig {
    /// Load configuration from a JSON file; missing fields keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: FormatConfig =
            serde_json::from_str(json).context("Failed to parse format config JSON")?;

        if !config.maintenance_fee_per_payment.is_finite() || config.maintenance_fee_per_payment < 0.0 {
            anyhow::bail!(
                "maintenanceFeePerPayment must be a non-negative number, got {}",
                config.maintenance_fee_per_payment
            );
        }

        Ok(config)
    }

    /// Builder: override the currency glyph
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Builder: override the per-payment maintenance fee (negative or non-finite clamps to 0)
    pub fn with_maintenance_fee(mut self, fee: f64) -> Self {
        self.maintenance_fee_per_payment = sanitize_fee(fee);
        self
    }

    /// Builder: toggle thousands grouping
    pub fn with_thousands_grouping(mut self, grouping: bool) -> Self {
        self.thousands_grouping = grouping;
        self
    }

    /// Builder: add an account label
    pub fn with_account_label(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.account_labels.insert(key.into(), label.into());
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FormatConfig::default();

        assert_eq!(config.currency_symbol, "₦");
        assert_eq!(config.maintenance_fee_per_payment, 200.0);
        assert!(config.thousands_grouping);
        assert!(config.account_labels.is_empty());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FormatConfig::from_json_str(r#"{ "currencySymbol": "$" }"#).unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.maintenance_fee_per_payment, 200.0);
        assert!(config.thousands_grouping);
    }

    #[test]
    fn test_account_labels_from_json() {
        let json = r#"{
            "maintenanceFeePerPayment": 150,
            "thousandsGrouping": false,
            "accountLabels": { "dept_nacoss": "NACOSS" }
        }"#;
        let config = FormatConfig::from_json_str(json).unwrap();

        assert_eq!(config.maintenance_fee_per_payment, 150.0);
        assert!(!config.thousands_grouping);
        assert_eq!(config.account_labels.get("dept_nacoss").map(String::as_str), Some("NACOSS"));
    }

    #[test]
    fn test_negative_fee_rejected() {
        let result = FormatConfig::from_json_str(r#"{ "maintenanceFeePerPayment": -5 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_clamps_invalid_fee() {
        assert_eq!(FormatConfig::default().with_maintenance_fee(-50.0).maintenance_fee_per_payment, 0.0);
        assert_eq!(FormatConfig::default().with_maintenance_fee(f64::INFINITY).maintenance_fee_per_payment, 0.0);
        assert_eq!(FormatConfig::default().with_maintenance_fee(75.0).maintenance_fee_per_payment, 75.0);
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(FormatConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = FormatConfig::from_file("/nonexistent/format.json").unwrap_err();
        assert!(err.to_string().contains("format.json"));
    }
}
