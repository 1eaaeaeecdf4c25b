// 🎓 Level Filters - UI level selection → payments API query parameter
//
// The backend records direct-entry second-year students under a separate
// "200 D.E" level. Asking for the generic "200" cohort must include them;
// asking for "200 D.E" must return only that cohort.

use crate::error::LevelParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DIRECT_ENTRY_200: &str = "200 D.E";

// ============================================================================
// LEVEL FILTER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LevelFilter {
    All,
    L100,
    L200,
    /// Direct-entry students admitted straight into 200 level
    L200DirectEntry,
    L300,
    L400,
}

impl LevelFilter {
    /// Every option offered by the level selector, in display order
    pub const ALL_OPTIONS: [LevelFilter; 6] = [
        LevelFilter::All,
        LevelFilter::L100,
        LevelFilter::L200,
        LevelFilter::L200DirectEntry,
        LevelFilter::L300,
        LevelFilter::L400,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LevelFilter::All => "all",
            LevelFilter::L100 => "100",
            LevelFilter::L200 => "200",
            LevelFilter::L200DirectEntry => DIRECT_ENTRY_200,
            LevelFilter::L300 => "300",
            LevelFilter::L400 => "400",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LevelFilter::All => "All Levels",
            LevelFilter::L100 => "100 Level",
            LevelFilter::L200 => "200 Level",
            LevelFilter::L200DirectEntry => "200 Level (Direct Entry)",
            LevelFilter::L300 => "300 Level",
            LevelFilter::L400 => "400 Level",
        }
    }
}

impl FromStr for LevelFilter {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LevelFilter::ALL_OPTIONS
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| LevelParseError::UnknownLevel(s.to_string()))
    }
}

impl TryFrom<String> for LevelFilter {
    type Error = LevelParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LevelFilter> for String {
    fn from(level: LevelFilter) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// LEVEL QUERY
// ============================================================================

/// Level parameter as sent to the payments API
///
/// Serializes to `"all"`, a single level string, or an array of levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelQuery {
    Single(String),
    Many(Vec<String>),
}

impl LevelQuery {
    pub fn is_all(&self) -> bool {
        matches!(self, LevelQuery::Single(level) if level == "all")
    }

    pub fn levels(&self) -> Vec<&str> {
        match self {
            LevelQuery::Single(level) => vec![level.as_str()],
            LevelQuery::Many(levels) => levels.iter().map(String::as_str).collect(),
        }
    }

    /// Repeated `key=value` pairs for a query string (`level=200&level=200 D.E`)
    pub fn to_query_pairs(&self, key: &str) -> Vec<(String, String)> {
        self.levels()
            .into_iter()
            .map(|level| (key.to_string(), level.to_string()))
            .collect()
    }
}

/// Normalize a level selection for the payments query
///
/// "200" expands to `["200", "200 D.E"]`; every other value, including
/// "all" and "200 D.E", passes through unchanged.
pub fn normalize_level_for_query(level: LevelFilter) -> LevelQuery {
    match level {
        LevelFilter::L200 => LevelQuery::Many(vec![
            LevelFilter::L200.as_str().to_string(),
            DIRECT_ENTRY_200.to_string(),
        ]),
        other => LevelQuery::Single(other.as_str().to_string()),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_generic_200_includes_direct_entry() {
        let query = normalize_level_for_query(LevelFilter::L200);
        assert_eq!(query, LevelQuery::Many(vec!["200".to_string(), "200 D.E".to_string()]));
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(
            normalize_level_for_query(LevelFilter::L200DirectEntry),
            LevelQuery::Single("200 D.E".to_string())
        );
        assert_eq!(normalize_level_for_query(LevelFilter::All), LevelQuery::Single("all".to_string()));
        assert_eq!(normalize_level_for_query(LevelFilter::L400), LevelQuery::Single("400".to_string()));
        assert!(normalize_level_for_query(LevelFilter::All).is_all());
    }

    #[test]
    fn test_parse_level_filter() {
        assert_eq!("200 D.E".parse::<LevelFilter>(), Ok(LevelFilter::L200DirectEntry));
        assert_eq!("all".parse::<LevelFilter>(), Ok(LevelFilter::All));
        assert_eq!(
            "500".parse::<LevelFilter>(),
            Err(LevelParseError::UnknownLevel("500".to_string()))
        );
    }

    #[test]
    fn test_every_option_round_trips_through_as_str() {
        for level in LevelFilter::ALL_OPTIONS {
            assert_eq!(level.as_str().parse::<LevelFilter>(), Ok(level));
        }
    }

    #[test]
    fn test_level_query_json_shape() {
        let many = serde_json::to_string(&normalize_level_for_query(LevelFilter::L200)).unwrap();
        assert_eq!(many, r#"["200","200 D.E"]"#);

        let all = serde_json::to_string(&normalize_level_for_query(LevelFilter::All)).unwrap();
        assert_eq!(all, r#""all""#);
    }

    #[test]
    fn test_level_filter_deserializes_from_string() {
        let level: LevelFilter = serde_json::from_str(r#""300""#).unwrap();
        assert_eq!(level, LevelFilter::L300);
        assert!(serde_json::from_str::<LevelFilter>(r#""600""#).is_err());
    }

    #[test]
    fn test_query_pairs() {
        let pairs = normalize_level_for_query(LevelFilter::L200).to_query_pairs("level");
        assert_eq!(
            pairs,
            vec![
                ("level".to_string(), "200".to_string()),
                ("level".to_string(), "200 D.E".to_string()),
            ]
        );
    }
}
