//! Deferred resolution handles.

use crate::container::Container;
use crate::core::describe;
use crate::error::{Error, Result};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Weak};

/// A zero-argument handle that resolves `T` from its container on every call.
///
/// Whether successive calls return the same instance is decided by the
/// scope of the target binding, not by the handle. The handle only keeps a
/// weak reference, so storing it inside a service of the same container
/// does not keep the container alive.
pub struct Factory<T: ?Sized> {
  container: Weak<Container>,
  name: Option<String>,
  _target: PhantomData<fn() -> Arc<T>>,
}

impl<T: ?Sized + Any + Send + Sync> Factory<T> {
  pub(crate) fn new(container: &Arc<Container>, name: Option<&str>) -> Self {
    Self {
      container: Arc::downgrade(container),
      name: name.map(str::to_owned),
      _target: PhantomData,
    }
  }

  /// Resolves a fresh or shared instance of `T`.
  pub fn create(&self) -> Result<Arc<T>> {
    let container = self
      .container
      .upgrade()
      .ok_or_else(|| Error::ContainerDropped {
        service: describe::<T>(self.name.as_deref()),
      })?;
    container.get::<T>(self.name.as_deref())
  }

  /// The binding name this handle resolves, if any.
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }
}

impl<T: ?Sized> Clone for Factory<T> {
  fn clone(&self) -> Self {
    Self {
      container: Weak::clone(&self.container),
      name: self.name.clone(),
      _target: PhantomData,
    }
  }
}

impl<T: ?Sized> fmt::Debug for Factory<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Factory")
      .field("target", &std::any::type_name::<T>())
      .field("name", &self.name)
      .finish()
  }
}
