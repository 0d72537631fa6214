//! CLI-level error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("--nodes must be at least 1")]
    EmptyGraph,
    #[error("--own index {0} is out of range for a graph of {1} nodes")]
    OwnOutOfRange(usize, usize),
    #[error("--attack {attack} requires {flag}")]
    MissingAttackFlag { attack: &'static str, flag: &'static str },
    #[cfg(feature = "json")]
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
