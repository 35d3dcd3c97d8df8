//! Core, non-public data structures for the IoC container.

use crate::container::Container;
use crate::error::Result;
use once_cell::sync::OnceCell;
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

pub(crate) type AnyBox = Box<dyn Any + Send + Sync>;
pub(crate) type ErasedFactory = Box<dyn Fn(&Container) -> Result<AnyBox> + Send + Sync>;

/// Lifetime policy for a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
  /// A fresh instance is built on every resolution.
  #[default]
  Transient,
  /// One instance per container, built lazily on first resolution.
  Singleton,
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct InjectionKey {
  pub(crate) type_id: TypeId,
  pub(crate) name: Option<String>,
}

impl InjectionKey {
  pub(crate) fn of<T: ?Sized + Any>(name: Option<&str>) -> Self {
    Self {
      type_id: TypeId::of::<T>(),
      name: name.map(str::to_owned),
    }
  }
}

impl fmt::Debug for InjectionKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.name {
      Some(name) => write!(f, "Key(TypeId({:?}), Name({}))", self.type_id, name),
      None => write!(f, "Key(TypeId({:?}))", self.type_id),
    }
  }
}

/// Human readable service description used in errors and logs.
pub(crate) fn describe<T: ?Sized>(name: Option<&str>) -> String {
  match name {
    Some(name) => format!("{} (name: '{}')", type_name::<T>(), name),
    None => type_name::<T>().to_owned(),
  }
}

/// A type-erased binding. The boxed value is always an `Arc<T>` for the
/// registered service type `T`.
pub(crate) enum Provider {
  Instance {
    value: AnyBox,
  },
  Singleton {
    cell: OnceCell<AnyBox>,
    factory: ErasedFactory,
  },
  Transient {
    factory: ErasedFactory,
  },
}

impl Provider {
  pub(crate) fn new(scope: Scope, factory: ErasedFactory) -> Self {
    match scope {
      Scope::Singleton => Provider::Singleton {
        cell: OnceCell::new(),
        factory,
      },
      Scope::Transient => Provider::Transient { factory },
    }
  }

  pub(crate) fn with_value(value: AnyBox) -> Self {
    Provider::Instance { value }
  }

  pub(crate) fn scope(&self) -> Scope {
    match self {
      Provider::Instance { .. } | Provider::Singleton { .. } => Scope::Singleton,
      Provider::Transient { .. } => Scope::Transient,
    }
  }

  /// Produces the stored (singleton) or freshly built (transient) value,
  /// downcast back to `Arc<T>`. Returns `Ok(None)` on a type mismatch.
  pub(crate) fn produce<T: ?Sized + Any + Send + Sync>(
    &self,
    container: &Container,
  ) -> Result<Option<Arc<T>>> {
    match self {
      Provider::Instance { value } => Ok(value.downcast_ref::<Arc<T>>().cloned()),
      Provider::Singleton { cell, factory } => {
        let value = cell.get_or_try_init(|| factory(container))?;
        Ok(value.downcast_ref::<Arc<T>>().cloned())
      }
      Provider::Transient { factory } => {
        let value = factory(container)?;
        Ok(value.downcast::<Arc<T>>().ok().map(|arc| *arc))
      }
    }
  }
}
