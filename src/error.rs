use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelParseError {
    #[error("Unknown level filter: {0:?}")]
    UnknownLevel(String),
}
