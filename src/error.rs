use thiserror::Error;

/// Reasons a [`SearchTreeConfig`](crate::SearchTreeConfig) can be rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum leaf size must be at least 1")]
    ZeroMinLeafSize,

    #[error("node capacity must be at least 1")]
    ZeroNodeCapacity,
}
