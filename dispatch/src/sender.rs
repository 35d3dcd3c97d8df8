//! Senders and the queue runner that obtains them through a factory handle.

use crate::error::Result;
use crate::message::Message;
use courier_ioc::Factory;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::info;

static NEXT_SENDER_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct MessageSender {
  id: usize,
  sent: AtomicUsize,
}

impl MessageSender {
  pub fn new() -> Self {
    Self {
      id: NEXT_SENDER_ID.fetch_add(1, Ordering::Relaxed),
      sent: AtomicUsize::new(0),
    }
  }

  /// Process-unique id, handy for telling instances apart in logs.
  pub fn id(&self) -> usize {
    self.id
  }

  pub fn send(&self, message: &Message) {
    self.sent.fetch_add(1, Ordering::Relaxed);
    info!(sender = self.id, kind = %message.kind, body = %message.body, "sending message");
  }

  pub fn sent(&self) -> usize {
    self.sent.load(Ordering::Relaxed)
  }
}

impl Default for MessageSender {
  fn default() -> Self {
    Self::new()
  }
}

/// Sends each message through a sender obtained from its factory at run time.
///
/// Whether consecutive runs share a sender depends solely on the scope the
/// sender was bound with.
pub struct MessageQueueRunner {
  sender_factory: Factory<MessageSender>,
}

impl MessageQueueRunner {
  pub fn new(sender_factory: Factory<MessageSender>) -> Self {
    Self { sender_factory }
  }

  pub fn run(&self, message: &Message) -> Result<Arc<MessageSender>> {
    let sender = self.sender_factory.create()?;
    sender.send(message);
    Ok(sender)
  }
}
