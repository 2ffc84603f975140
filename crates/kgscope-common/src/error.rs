use thiserror::Error;

#[derive(Debug, Error)]
pub enum KgscopeError {
    /// A gap step was placed somewhere other than strictly between two
    /// node-producing steps. No partial question is returned.
    #[error("Invalid query shape: gap step at position {position} is not between two node steps")]
    InvalidQueryShape { position: usize },

    /// A graph-like value with no node collection. The normalizer maps
    /// this to "nothing to render"; the variant exists for callers that
    /// must report it upward instead.
    #[error("Malformed graph: node collection is missing")]
    MalformedGraph,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KgscopeError>;
