// 🏦 Account Labels - canonical account key → human-readable name
//
// Canonical keys ("college_general", "dept_comssa", ...) are stable
// identifiers coming from the ledger aggregation. Known keys map to fixed
// labels; unknown keys still get a readable label by title-casing their
// underscore-separated words.

use log::debug;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in labels, in the order the dashboard lists the accounts
const DEFAULT_ACCOUNT_LABELS: &[(&str, &str)] = &[
    ("college_general", "College General"),
    ("dept_comssa", "COMSSA"),
    ("dept_icitsa", "ICITSA"),
    ("dept_cydasa", "CYDASA"),
    ("dept_senifsa", "SENIFSA"),
];

static DEFAULT_REGISTRY: LazyLock<AccountNameRegistry> = LazyLock::new(AccountNameRegistry::with_defaults);

// ============================================================================
// ACCOUNT NAME REGISTRY
// ============================================================================

/// Registry of known account labels
///
/// Immutable once built. The process-wide default is available through
/// [`AccountNameRegistry::global`].
#[derive(Debug, Clone, Default)]
pub struct AccountNameRegistry {
    labels: HashMap<String, String>,
    order: Vec<String>,
}

impl AccountNameRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create registry seeded with the built-in account labels
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (key, label) in DEFAULT_ACCOUNT_LABELS {
            registry.register(*key, *label);
        }
        registry
    }

    pub fn global() -> &'static AccountNameRegistry {
        &DEFAULT_REGISTRY
    }

    /// Register (or override) a label
    pub fn register(&mut self, key: impl Into<String>, label: impl Into<String>) {
        let key = key.into();
        if !self.labels.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.labels.insert(key, label.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.labels.contains_key(key)
    }

    /// Position of a key in registration order (used to sort account cards)
    pub fn position(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|k| k == key)
    }

    pub fn count(&self) -> usize {
        self.labels.len()
    }

    /// Label for a canonical key, falling back to title-cased words
    pub fn label_for(&self, key: &str) -> String {
        match self.get(key) {
            Some(label) => label.to_string(),
            None => {
                debug!("No label registered for account key {:?}, using fallback", key);
                fallback_label(key)
            }
        }
    }
}

/// "dept_unknown_unit" → "Dept Unknown Unit"
///
/// Empty segments (leading, trailing or doubled underscores) are dropped.
pub fn fallback_label(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Human-readable label for a canonical account key
pub fn format_account_name(key: &str) -> String {
    AccountNameRegistry::global().label_for(key)
}

// ============================================================================
// TESTS
// ============================================================================
