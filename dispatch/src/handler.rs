//! The message-handling capability and its built-in candidates.

use crate::error::Result;
use crate::message::{Message, MessageType};
use crate::resolver::{short_type_name, CanHandle, CandidateResolver, NameHint};
use courier_ioc::Container;
use std::any::type_name;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::info;

/// A candidate able to process messages of one or more [`MessageType`]s.
pub trait MessageHandler: NameHint + Send + Sync {
  fn handle(&self, message: &Message);

  /// Whether this handler accepts messages of `kind`.
  fn can_handle(&self, kind: MessageType) -> bool;

  /// Number of messages handled by this instance so far.
  fn handled(&self) -> usize;
}

impl CanHandle<MessageType> for dyn MessageHandler {
  fn can_handle(&self, key: &MessageType) -> bool {
    MessageHandler::can_handle(self, *key)
  }
}

#[derive(Debug, Default)]
pub struct FooMessageHandler {
  handled: AtomicUsize,
}

impl NameHint for FooMessageHandler {
  fn type_name(&self) -> &'static str {
    short_type_name(type_name::<Self>())
  }
}

impl MessageHandler for FooMessageHandler {
  fn handle(&self, message: &Message) {
    self.handled.fetch_add(1, Ordering::Relaxed);
    info!(handler = self.type_name(), body = %message.body, "handling message");
  }

  fn can_handle(&self, kind: MessageType) -> bool {
    kind == MessageType::Foo
  }

  fn handled(&self) -> usize {
    self.handled.load(Ordering::Relaxed)
  }
}

#[derive(Debug, Default)]
pub struct BarMessageHandler {
  handled: AtomicUsize,
}

impl NameHint for BarMessageHandler {
  fn type_name(&self) -> &'static str {
    short_type_name(type_name::<Self>())
  }
}

impl MessageHandler for BarMessageHandler {
  fn handle(&self, message: &Message) {
    self.handled.fetch_add(1, Ordering::Relaxed);
    info!(handler = self.type_name(), body = %message.body, "handling message");
  }

  fn can_handle(&self, kind: MessageType) -> bool {
    kind == MessageType::Bar
  }

  fn handled(&self) -> usize {
    self.handled.load(Ordering::Relaxed)
  }
}

/// Builds the built-in handler for `kind`.
pub fn handler_for(kind: MessageType) -> Arc<dyn MessageHandler> {
  match kind {
    MessageType::Foo => Arc::new(FooMessageHandler::default()),
    MessageType::Bar => Arc::new(BarMessageHandler::default()),
  }
}

/// Picks the handler for a message type out of every bound handler.
#[derive(Clone)]
pub struct HandlerResolver {
  resolver: CandidateResolver<dyn MessageHandler>,
}

impl HandlerResolver {
  pub fn new(candidates: Vec<Arc<dyn MessageHandler>>) -> Self {
    Self {
      resolver: CandidateResolver::new(candidates),
    }
  }

  pub fn from_container(container: &Container) -> Result<Self> {
    Ok(Self {
      resolver: CandidateResolver::from_container(container)?,
    })
  }

  pub fn candidates(&self) -> &[Arc<dyn MessageHandler>] {
    self.resolver.candidates()
  }

  /// Selects the handler whose capability query accepts `kind`.
  pub fn create(&self, kind: MessageType) -> Result<Arc<dyn MessageHandler>> {
    self.resolver.resolve(&kind)
  }

  /// Selects the handler whose type name starts with `kind`, ignoring case.
  pub fn create_by_name_hint(&self, kind: MessageType) -> Result<Arc<dyn MessageHandler>> {
    self.resolver.resolve_by_name_hint(&kind)
  }

  /// Selects the handler for `message.kind` and hands it the message.
  pub fn dispatch(&self, message: &Message) -> Result<Arc<dyn MessageHandler>> {
    let handler = self.create(message.kind)?;
    handler.handle(message);
    Ok(handler)
  }
}
