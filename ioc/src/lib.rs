//! # Courier IoC
//!
//! A thread-safe Inversion of Control (IoC) container for Rust.
//!
//! Services are registered against a concrete type or a trait object, with a
//! transient or singleton scope. Factories receive the container, so a
//! service can resolve its own dependencies when it is built. Registration
//! is explicit and can happen at any point; nothing is discovered by
//! reflection and there is no global instance.
//!
//! ## Core Concepts
//!
//! - **Container**: the registry for all services, shared as `Arc<Container>`.
//! - **Scope**: `Transient` builds a new instance per resolution, `Singleton`
//!   builds one lazily and shares it.
//! - **Candidates**: many implementations bound to one capability, resolved
//!   together with `get_all`.
//! - **Factory**: a zero-argument handle that defers resolution until invoked.
//!
//! ## Quick Start
//!
//! ```
//! use courier_ioc::{Container, Scope};
//! use std::sync::Arc;
//!
//! trait Greeter: Send + Sync {
//!   fn greet(&self) -> String;
//! }
//!
//! struct EnglishGreeter {
//!   message: Arc<String>,
//! }
//!
//! impl Greeter for EnglishGreeter {
//!   fn greet(&self) -> String {
//!     (*self.message).clone()
//!   }
//! }
//!
//! let container = Arc::new(Container::new());
//! container.add_instance_with_name("greeting", String::from("Hello, World!"));
//! container.add_trait::<dyn Greeter>(Scope::Singleton, |c| {
//!   let message = c.get::<String>(Some("greeting"))?;
//!   Ok(Arc::new(EnglishGreeter { message }))
//! });
//!
//! let greeter = container.get::<dyn Greeter>(None).unwrap();
//! assert_eq!(greeter.greet(), "Hello, World!");
//!
//! let later = container.factory::<dyn Greeter>(None);
//! assert!(Arc::ptr_eq(&greeter, &later.create().unwrap()));
//! ```

mod container;
mod core;
mod error;
mod factory;

pub use crate::core::Scope;
pub use container::Container;
pub use error::{Error, Result};
pub use factory::Factory;
