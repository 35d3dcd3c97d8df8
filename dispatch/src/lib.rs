//! # Courier
//!
//! Resolves exactly one message handler out of every handler bound to the
//! `MessageHandler` capability, and wires the surrounding object graph
//! through an explicit [`courier_ioc::Container`] bootstrap.
//!
//! Resolution outcome depends only on how many candidates match the key:
//! none is [`Error::NotFound`], one is returned as the very instance that was
//! bound, and several is [`Error::AmbiguousMatch`].
//!
//! ## Quick Start
//!
//! ```
//! use courier::{bootstrap, DispatchConfig, HandlerResolver, Message, MessageType, NameHint};
//!
//! let container = bootstrap(&DispatchConfig::default()).unwrap();
//! let handlers = container.get::<HandlerResolver>(None).unwrap();
//!
//! let handler = handlers.dispatch(&Message::new(MessageType::Foo, "hello")).unwrap();
//! assert_eq!(handler.type_name(), "FooMessageHandler");
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handler;
pub mod message;
pub mod resolver;
pub mod sender;

pub use bootstrap::{bootstrap, register_into};
pub use config::{DispatchConfig, HandlerBinding};
pub use error::{Error, Result};
pub use handler::{BarMessageHandler, FooMessageHandler, HandlerResolver, MessageHandler};
pub use message::{Message, MessageType};
pub use resolver::{short_type_name, CanHandle, CandidateResolver, NameHint};
pub use sender::{MessageQueueRunner, MessageSender};
