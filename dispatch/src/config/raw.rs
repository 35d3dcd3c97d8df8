use crate::message::MessageType;
use serde::Deserialize;

// --- Top Level Config ---
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigRaw {
  #[serde(default = "default_version")]
  pub version: u32,
  #[serde(default)]
  pub sender: SenderConfigRaw,
  // Absent means "one transient handler per message type".
  #[serde(default = "default_handlers")]
  pub handlers: Vec<HandlerConfigRaw>,
}

impl Default for ConfigRaw {
  fn default() -> Self {
    Self {
      version: default_version(),
      sender: SenderConfigRaw::default(),
      handlers: default_handlers(),
    }
  }
}

fn default_version() -> u32 {
  1
}

fn default_handlers() -> Vec<HandlerConfigRaw> {
  MessageType::ALL
    .into_iter()
    .map(|kind| HandlerConfigRaw {
      kind,
      scope: ScopeRaw::default(),
    })
    .collect()
}

#[derive(Debug, Deserialize, PartialEq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScopeRaw {
  #[default]
  Transient,
  Singleton,
}

// --- Sender ---
#[derive(Debug, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct SenderConfigRaw {
  #[serde(default)]
  pub scope: ScopeRaw,
}

// --- Handlers ---
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HandlerConfigRaw {
  pub kind: MessageType,
  #[serde(default)]
  pub scope: ScopeRaw,
}
