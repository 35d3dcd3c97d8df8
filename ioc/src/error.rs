use thiserror::Error;

/// Errors raised while registering or resolving services.
#[derive(Debug, Error)]
pub enum Error {
  #[error("No binding registered for service: {service}")]
  NotRegistered { service: String },

  #[error("Binding for {service} holds a value of an unexpected type")]
  TypeMismatch { service: String },

  #[error("Container was dropped before the factory for {service} was invoked")]
  ContainerDropped { service: String },

  #[error("Failed to construct {service}: {reason}")]
  Construction { service: String, reason: String },
}

impl Error {
  /// Convenience for factories that need to reject construction.
  pub fn construction(service: impl Into<String>, reason: impl ToString) -> Self {
    Error::Construction {
      service: service.into(),
      reason: reason.to_string(),
    }
  }
}

/// A specialized `Result` type for `courier_ioc` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
