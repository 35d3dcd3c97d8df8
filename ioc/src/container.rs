//! The main `Container` struct and its associated methods.

use crate::core::{describe, AnyBox, ErasedFactory, InjectionKey, Provider, Scope};
use crate::error::{Error, Result};
use crate::factory::Factory;
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, trace};

/// The Inversion of Control (IoC) container.
///
/// Holds single bindings (one provider per type and optional name) and
/// multi-bindings (an ordered list of candidate providers per capability).
/// It is thread-safe and allows registration at any point in the
/// application's lifecycle. Factories receive the container itself, so a
/// service can resolve its own dependencies while being built.
#[derive(Default)]
pub struct Container {
  providers: DashMap<InjectionKey, Arc<Provider>>,
  candidates: DashMap<InjectionKey, Vec<Arc<Provider>>>,
}

fn erase<I: ?Sized + Any + Send + Sync>(
  factory: impl Fn(&Container) -> Result<Arc<I>> + Send + Sync + 'static,
) -> ErasedFactory {
  Box::new(move |container: &Container| {
    factory(container).map(|instance| Box::new(instance) as AnyBox)
  })
}

impl Container {
  /// Creates a new, empty `Container`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- PRIVATE HELPERS ---

  fn bind<I: ?Sized + Any + Send + Sync>(&self, name: Option<&str>, provider: Provider) {
    debug!(
      service = %describe::<I>(name),
      scope = ?provider.scope(),
      "registering binding"
    );
    // A later registration under the same key replaces the earlier one.
    self
      .providers
      .insert(InjectionKey::of::<I>(name), Arc::new(provider));
  }

  fn bind_factory<I: ?Sized + Any + Send + Sync>(
    &self,
    name: Option<&str>,
    scope: Scope,
    factory: impl Fn(&Container) -> Result<Arc<I>> + Send + Sync + 'static,
  ) {
    self.bind::<I>(name, Provider::new(scope, erase(factory)));
  }

  fn bind_concrete<T: Any + Send + Sync>(
    &self,
    name: Option<&str>,
    scope: Scope,
    factory: impl Fn(&Container) -> Result<T> + Send + Sync + 'static,
  ) {
    self.bind_factory::<T>(name, scope, move |c| factory(c).map(Arc::new));
  }

  // --- PUBLIC API ---

  // --- Instance Registration ---
  pub fn add_instance<T: Any + Send + Sync>(&self, instance: T) {
    self.bind::<T>(None, Provider::with_value(Box::new(Arc::new(instance))));
  }
  pub fn add_instance_with_name<T: Any + Send + Sync>(&self, name: &str, instance: T) {
    self.bind::<T>(Some(name), Provider::with_value(Box::new(Arc::new(instance))));
  }

  // --- Singleton Registration ---
  pub fn add_singleton<T: Any + Send + Sync>(
    &self,
    factory: impl Fn(&Container) -> Result<T> + Send + Sync + 'static,
  ) {
    self.bind_concrete(None, Scope::Singleton, factory);
  }
  pub fn add_singleton_with_name<T: Any + Send + Sync>(
    &self,
    name: &str,
    factory: impl Fn(&Container) -> Result<T> + Send + Sync + 'static,
  ) {
    self.bind_concrete(Some(name), Scope::Singleton, factory);
  }

  // --- Transient Registration ---
  pub fn add_transient<T: Any + Send + Sync>(
    &self,
    factory: impl Fn(&Container) -> Result<T> + Send + Sync + 'static,
  ) {
    self.bind_concrete(None, Scope::Transient, factory);
  }
  pub fn add_transient_with_name<T: Any + Send + Sync>(
    &self,
    name: &str,
    factory: impl Fn(&Container) -> Result<T> + Send + Sync + 'static,
  ) {
    self.bind_concrete(Some(name), Scope::Transient, factory);
  }

  /// Registers a concrete type with a scope chosen at runtime.
  pub fn add_scoped<T: Any + Send + Sync>(
    &self,
    scope: Scope,
    factory: impl Fn(&Container) -> Result<T> + Send + Sync + 'static,
  ) {
    self.bind_concrete(None, scope, factory);
  }

  // --- Trait Registration ---
  pub fn add_trait<I: ?Sized + Any + Send + Sync>(
    &self,
    scope: Scope,
    factory: impl Fn(&Container) -> Result<Arc<I>> + Send + Sync + 'static,
  ) {
    self.bind_factory(None, scope, factory);
  }
  pub fn add_trait_with_name<I: ?Sized + Any + Send + Sync>(
    &self,
    name: &str,
    scope: Scope,
    factory: impl Fn(&Container) -> Result<Arc<I>> + Send + Sync + 'static,
  ) {
    self.bind_factory(Some(name), scope, factory);
  }

  // --- Multi-binding ---

  /// Appends one more implementation of the capability `I`.
  ///
  /// Candidates are kept in registration order and are only ever resolved
  /// together through [`Container::get_all`].
  pub fn add_candidate<I: ?Sized + Any + Send + Sync>(
    &self,
    scope: Scope,
    factory: impl Fn(&Container) -> Result<Arc<I>> + Send + Sync + 'static,
  ) {
    let provider = Arc::new(Provider::new(scope, erase(factory)));
    let mut entry = self.candidates.entry(InjectionKey::of::<I>(None)).or_default();
    entry.push(provider);
    debug!(
      capability = %describe::<I>(None),
      ?scope,
      position = entry.len() - 1,
      "registering candidate"
    );
  }

  /// Number of candidates currently bound to the capability `I`.
  pub fn candidate_count<I: ?Sized + Any + Send + Sync>(&self) -> usize {
    self
      .candidates
      .get(&InjectionKey::of::<I>(None))
      .map_or(0, |entry| entry.len())
  }

  // --- Factory indirection ---

  /// Returns a handle that resolves `T` from this container each time it is invoked.
  pub fn factory<T: ?Sized + Any + Send + Sync>(
    self: &Arc<Self>,
    name: Option<&str>,
  ) -> Factory<T> {
    Factory::new(self, name)
  }

  /// Binds `Factory<T>` itself so that consumers can inject the indirection.
  ///
  /// The handle is registered under the same name as its target.
  pub fn add_factory<T: ?Sized + Any + Send + Sync>(self: &Arc<Self>, name: Option<&str>) {
    let handle = self.factory::<T>(name);
    self.bind::<Factory<T>>(name, Provider::with_value(Box::new(Arc::new(handle))));
  }

  // --- Resolution ---

  /// Returns `true` if a single binding exists for `T` under `name`.
  pub fn contains<T: ?Sized + Any + Send + Sync>(&self, name: Option<&str>) -> bool {
    self.providers.contains_key(&InjectionKey::of::<T>(name))
  }

  /// Resolves a service from the container.
  pub fn get<T: ?Sized + Any + Send + Sync>(&self, name: Option<&str>) -> Result<Arc<T>> {
    // Clone the provider out so no map guard is held while its factory runs;
    // factories are free to resolve or register other services.
    let provider = self
      .providers
      .get(&InjectionKey::of::<T>(name))
      .map(|entry| Arc::clone(entry.value()))
      .ok_or_else(|| Error::NotRegistered {
        service: describe::<T>(name),
      })?;

    trace!(service = %describe::<T>(name), "resolving");
    provider
      .produce::<T>(self)?
      .ok_or_else(|| Error::TypeMismatch {
        service: describe::<T>(name),
      })
  }

  /// Resolves every candidate bound to the capability `I`, in registration order.
  ///
  /// Each candidate honours its own scope. An unbound capability yields an
  /// empty list rather than an error.
  pub fn get_all<I: ?Sized + Any + Send + Sync>(&self) -> Result<Vec<Arc<I>>> {
    let providers: Vec<Arc<Provider>> = self
      .candidates
      .get(&InjectionKey::of::<I>(None))
      .map(|entry| entry.value().clone())
      .unwrap_or_default();

    trace!(
      capability = %describe::<I>(None),
      count = providers.len(),
      "resolving candidates"
    );
    providers
      .iter()
      .map(|provider| {
        provider
          .produce::<I>(self)?
          .ok_or_else(|| Error::TypeMismatch {
            service: describe::<I>(None),
          })
      })
      .collect()
  }
}
