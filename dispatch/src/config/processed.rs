use crate::config::raw::{ConfigRaw, ScopeRaw};
use crate::error::{Error, Result};
use crate::message::MessageType;
use courier_ioc::Scope;
use std::collections::HashSet;
use tracing::warn;

const SUPPORTED_VERSION: u32 = 1;

/// Validated wiring configuration consumed by [`crate::bootstrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
  pub sender_scope: Scope,
  pub handlers: Vec<HandlerBinding>,
}

/// One handler candidate to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerBinding {
  pub kind: MessageType,
  pub scope: Scope,
}

impl Default for DispatchConfig {
  fn default() -> Self {
    Self {
      sender_scope: Scope::Transient,
      handlers: MessageType::ALL
        .into_iter()
        .map(|kind| HandlerBinding {
          kind,
          scope: Scope::Transient,
        })
        .collect(),
    }
  }
}

impl From<ScopeRaw> for Scope {
  fn from(raw: ScopeRaw) -> Self {
    match raw {
      ScopeRaw::Transient => Scope::Transient,
      ScopeRaw::Singleton => Scope::Singleton,
    }
  }
}

pub fn process_raw_config(raw: ConfigRaw) -> Result<DispatchConfig> {
  if raw.version != SUPPORTED_VERSION {
    return Err(Error::InvalidConfigValue {
      field: "version".to_string(),
      message: format!(
        "unsupported version {}, expected {}",
        raw.version, SUPPORTED_VERSION
      ),
    });
  }

  let handlers: Vec<HandlerBinding> = raw
    .handlers
    .into_iter()
    .map(|h| HandlerBinding {
      kind: h.kind,
      scope: h.scope.into(),
    })
    .collect();

  // Duplicates are a registration mistake but are kept as written; they
  // surface as an ambiguous match when that kind is resolved.
  let mut seen = HashSet::new();
  for binding in &handlers {
    if !seen.insert(binding.kind) {
      warn!(kind = %binding.kind, "more than one handler configured for message type");
    }
  }
  for kind in MessageType::ALL {
    if !seen.contains(&kind) {
      warn!(%kind, "no handler configured for message type");
    }
  }

  Ok(DispatchConfig {
    sender_scope: raw.sender.scope.into(),
    handlers,
  })
}
