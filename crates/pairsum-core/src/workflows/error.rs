use super::config::ConfigError;
use crate::core::sequence::InvalidArgument;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Batch contains no queries")]
    EmptyBatch,
}
