#![allow(dead_code)]

use courier::{
  BarMessageHandler, FooMessageHandler, Message, MessageHandler, MessageType, NameHint,
};
use courier_ioc::{Container, Scope};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Routes library logs to the test harness output. Safe to call repeatedly.
pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

/// A second handler for `Foo`, used to provoke ambiguous matches.
#[derive(Default)]
pub struct FooMessageHandler2 {
  handled: AtomicUsize,
}

impl NameHint for FooMessageHandler2 {
  fn type_name(&self) -> &'static str {
    "FooMessageHandler2"
  }
}

impl MessageHandler for FooMessageHandler2 {
  fn handle(&self, _message: &Message) {
    self.handled.fetch_add(1, Ordering::Relaxed);
  }

  fn can_handle(&self, kind: MessageType) -> bool {
    kind == MessageType::Foo
  }

  fn handled(&self) -> usize {
    self.handled.load(Ordering::Relaxed)
  }
}

/// Container with the Foo and Bar handlers bound as candidates.
pub fn foo_bar_container(scope: Scope) -> Container {
  let container = Container::new();
  container.add_candidate::<dyn MessageHandler>(scope, |_| {
    Ok(Arc::new(FooMessageHandler::default()))
  });
  container.add_candidate::<dyn MessageHandler>(scope, |_| {
    Ok(Arc::new(BarMessageHandler::default()))
  });
  container
}
