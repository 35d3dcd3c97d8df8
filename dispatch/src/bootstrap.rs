//! Explicit composition of the dispatch object graph.

use crate::config::DispatchConfig;
use crate::error::Result;
use crate::handler::{handler_for, HandlerResolver, MessageHandler};
use crate::sender::{MessageQueueRunner, MessageSender};
use courier_ioc::{Container, Factory};
use std::sync::Arc;
use tracing::debug;

/// Builds a container wired according to `config`.
///
/// Registers `MessageSender` with the configured scope, a
/// `Factory<MessageSender>` binding, a singleton `MessageQueueRunner`, one
/// `dyn MessageHandler` candidate per configured handler, and a transient
/// `HandlerResolver` rebuilt from the candidates on every resolution.
pub fn bootstrap(config: &DispatchConfig) -> Result<Arc<Container>> {
  let container = Arc::new(Container::new());
  register_into(&container, config);
  // Resolving the runner once surfaces wiring errors here.
  container.get::<MessageQueueRunner>(None)?;
  debug!(
    sender_scope = ?config.sender_scope,
    handlers = config.handlers.len(),
    "container bootstrapped"
  );
  Ok(container)
}

/// Registers the dispatch services into an existing container.
pub fn register_into(container: &Arc<Container>, config: &DispatchConfig) {
  container.add_scoped(config.sender_scope, |_| Ok(MessageSender::new()));
  container.add_factory::<MessageSender>(None);
  container.add_singleton(|c| {
    let factory = c.get::<Factory<MessageSender>>(None)?;
    Ok(MessageQueueRunner::new((*factory).clone()))
  });

  for binding in &config.handlers {
    let kind = binding.kind;
    container.add_candidate::<dyn MessageHandler>(binding.scope, move |_| {
      Ok(handler_for(kind))
    });
  }

  container.add_transient(|c| Ok(HandlerResolver::new(c.get_all::<dyn MessageHandler>()?)));
}
