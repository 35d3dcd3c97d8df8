use thiserror::Error;

/// The main error type for the `courier` library.
#[derive(Debug, Error)]
pub enum Error {
  #[error("Could not find a suitable candidate for key '{key}'")]
  NotFound { key: String },

  #[error("Too many suitable candidates ({count}) for key '{key}'")]
  AmbiguousMatch { key: String, count: usize },

  #[error("Container error: {0}")]
  Container(#[from] courier_ioc::Error),

  #[error("Configuration file not found: {0}")]
  ConfigNotFound(String),

  #[error("Failed to read configuration file: {0}")]
  ConfigRead(#[from] std::io::Error),

  #[error("Failed to parse configuration: {0}")]
  ConfigParse(String),

  #[error("Invalid configuration value for '{field}': {message}")]
  InvalidConfigValue { field: String, message: String },
}

/// A specialized `Result` type for `courier` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
