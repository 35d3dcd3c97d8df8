use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of message categories handlers are selected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
  Foo,
  Bar,
}

impl MessageType {
  pub const ALL: [MessageType; 2] = [MessageType::Foo, MessageType::Bar];

  pub fn as_str(&self) -> &'static str {
    match self {
      MessageType::Foo => "Foo",
      MessageType::Bar => "Bar",
    }
  }
}

impl fmt::Display for MessageType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for MessageType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    MessageType::ALL
      .into_iter()
      .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| Error::InvalidConfigValue {
        field: "kind".to_string(),
        message: format!("unknown message type '{}'", s),
      })
  }
}

/// A message travelling through the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
  pub kind: MessageType,
  pub body: String,
}

impl Message {
  pub fn new(kind: MessageType, body: impl Into<String>) -> Self {
    Self {
      kind,
      body: body.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_case_insensitively() {
    assert_eq!("foo".parse::<MessageType>().unwrap(), MessageType::Foo);
    assert_eq!("BAR".parse::<MessageType>().unwrap(), MessageType::Bar);
    assert!("baz".parse::<MessageType>().is_err());
  }

  #[test]
  fn displays_capitalised() {
    assert_eq!(MessageType::Foo.to_string(), "Foo");
    assert_eq!(MessageType::Bar.to_string(), "Bar");
  }
}
