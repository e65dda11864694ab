//! Custom error types for corti-rs

use thiserror::Error;

/// Main error type for corti-rs
#[derive(Error, Debug)]
pub enum CortiError {
    #[error("Failed to execute 'start' on 'SpeechRecognition': recognition has already started.")]
    AlreadyStarted,

    #[error("Failed to execute 'item' on '{entity}': 1 argument required, but only 0 present.")]
    InvalidArgument { entity: &'static str },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration and scenario loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration value: {field} = {value}")]
    InvalidValue { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, CortiError>;
