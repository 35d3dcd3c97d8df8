//! Picks exactly one candidate out of a multi-bound set.
//!
//! Two matching strategies are offered. The capability query
//! ([`CanHandle`]) is the one to use: each candidate answers for itself and
//! the compiler checks that every candidate implements it. The name hint
//! strategy ([`NameHint`]) compares a declared type name against the key by
//! case-insensitive prefix; it is kept for parity with older wiring and is
//! easy to get wrong (a key `Foo` also matches `FooBarHandler`).

use crate::error::{Error, Result};
use courier_ioc::Container;
use std::any::Any;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, warn};

/// Capability query: does this candidate accept `key`?
pub trait CanHandle<K: ?Sized> {
  fn can_handle(&self, key: &K) -> bool;
}

/// An explicit, reflection-free type name carried by a candidate.
pub trait NameHint {
  fn type_name(&self) -> &'static str;
}

/// Strips the module path from a fully qualified type name.
///
/// ```
/// assert_eq!(courier::short_type_name("a::b::FooHandler"), "FooHandler");
/// assert_eq!(courier::short_type_name("FooHandler"), "FooHandler");
/// ```
pub fn short_type_name(full: &'static str) -> &'static str {
  // Generic arguments may contain `::` themselves, so only look before the first `<`.
  let head = full.split('<').next().unwrap_or(full);
  match head.rfind("::") {
    Some(idx) => &full[idx + 2..],
    None => full,
  }
}

/// Selects one candidate from a read-only candidate set.
pub struct CandidateResolver<C: ?Sized> {
  candidates: Vec<Arc<C>>,
}

impl<C: ?Sized> CandidateResolver<C> {
  pub fn new(candidates: Vec<Arc<C>>) -> Self {
    Self { candidates }
  }

  /// Builds a resolver over every candidate bound to `C` in `container`.
  pub fn from_container(container: &Container) -> Result<Self>
  where
    C: Any + Send + Sync,
  {
    Ok(Self::new(container.get_all::<C>()?))
  }

  pub fn candidates(&self) -> &[Arc<C>] {
    &self.candidates
  }

  pub fn len(&self) -> usize {
    self.candidates.len()
  }

  pub fn is_empty(&self) -> bool {
    self.candidates.is_empty()
  }

  /// Returns the single candidate for which `predicate` holds.
  ///
  /// Every candidate is tested. No match yields [`Error::NotFound`], more
  /// than one yields [`Error::AmbiguousMatch`]; there is no tie-breaking.
  pub fn resolve_with<K, F>(&self, key: &K, mut predicate: F) -> Result<Arc<C>>
  where
    K: Display + ?Sized,
    F: FnMut(&C, &K) -> bool,
  {
    let mut matches: Vec<&Arc<C>> = Vec::new();
    for candidate in &self.candidates {
      if predicate(&**candidate, key) {
        matches.push(candidate);
      }
    }

    match matches.len() {
      0 => {
        warn!(%key, candidates = self.candidates.len(), "no suitable candidate");
        Err(Error::NotFound {
          key: key.to_string(),
        })
      }
      1 => {
        debug!(%key, "resolved candidate");
        Ok(Arc::clone(matches.remove(0)))
      }
      count => {
        warn!(%key, count, "ambiguous candidates");
        Err(Error::AmbiguousMatch {
          key: key.to_string(),
          count,
        })
      }
    }
  }

  /// Capability-query strategy.
  pub fn resolve<K>(&self, key: &K) -> Result<Arc<C>>
  where
    K: Display + ?Sized,
    C: CanHandle<K>,
  {
    self.resolve_with(key, |candidate, key| candidate.can_handle(key))
  }

  /// Naming-convention strategy: case-insensitive prefix of the declared type name.
  pub fn resolve_by_name_hint<K>(&self, key: &K) -> Result<Arc<C>>
  where
    K: Display + ?Sized,
    C: NameHint,
  {
    let prefix = key.to_string().to_lowercase();
    self.resolve_with(key, |candidate, _| {
      candidate.type_name().to_lowercase().starts_with(&prefix)
    })
  }
}

impl<C: ?Sized> Clone for CandidateResolver<C> {
  fn clone(&self) -> Self {
    Self {
      candidates: self.candidates.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Tag(&'static str);

  impl CanHandle<str> for Tag {
    fn can_handle(&self, key: &str) -> bool {
      self.0 == key
    }
  }

  impl NameHint for Tag {
    fn type_name(&self) -> &'static str {
      self.0
    }
  }

  fn resolver(tags: &[&'static str]) -> CandidateResolver<Tag> {
    CandidateResolver::new(tags.iter().copied().map(|t| Arc::new(Tag(t))).collect())
  }

  #[test]
  fn single_match_returns_the_registered_instance() {
    let r = resolver(&["a", "b"]);
    let found = r.resolve("b").unwrap();
    assert!(Arc::ptr_eq(&found, &r.candidates()[1]));
  }

  #[test]
  fn zero_and_many_matches_fail() {
    let r = resolver(&["a", "a", "b"]);
    assert!(matches!(r.resolve("c"), Err(Error::NotFound { .. })));
    assert!(matches!(
      r.resolve("a"),
      Err(Error::AmbiguousMatch { count: 2, .. })
    ));
  }

  #[test]
  fn empty_set_is_not_found() {
    let r = resolver(&[]);
    assert!(r.is_empty());
    assert!(matches!(r.resolve("a"), Err(Error::NotFound { .. })));
  }

  #[test]
  fn name_hint_is_a_case_insensitive_prefix() {
    let r = resolver(&["FooHandler", "BarHandler"]);
    assert_eq!(r.resolve_by_name_hint("foo").unwrap().0, "FooHandler");
    assert_eq!(r.resolve_by_name_hint("BAR").unwrap().0, "BarHandler");
  }

  #[test]
  fn name_hint_prefix_overlap_is_ambiguous() {
    let r = resolver(&["FooHandler", "FooBarHandler"]);
    assert!(matches!(
      r.resolve_by_name_hint("Foo"),
      Err(Error::AmbiguousMatch { count: 2, .. })
    ));
  }

  #[test]
  fn short_type_name_ignores_generic_paths() {
    assert_eq!(short_type_name("x::Wrapper<y::Inner>"), "Wrapper<y::Inner>");
  }
}
