mod common;

use common::{foo_bar_container, init_tracing, FooMessageHandler2};
use courier::{
  short_type_name, BarMessageHandler, CandidateResolver, Error, FooMessageHandler,
  HandlerResolver, MessageHandler, MessageType, NameHint,
};
use courier_ioc::Scope;
use std::sync::Arc;

#[test]
fn should_resolve_handler_by_partial_type_name_hint() {
  // Arrange
  init_tracing();
  let container = foo_bar_container(Scope::Transient);
  container.add_transient(|c| Ok(HandlerResolver::new(c.get_all::<dyn MessageHandler>()?)));

  // Act
  let handler_factory = container.get::<HandlerResolver>(None).unwrap();
  let foo_handler = handler_factory.create_by_name_hint(MessageType::Foo).unwrap();
  let bar_handler = handler_factory.create_by_name_hint(MessageType::Bar).unwrap();

  // Assert
  assert_eq!(foo_handler.type_name(), "FooMessageHandler");
  assert_eq!(bar_handler.type_name(), "BarMessageHandler");
}

#[test]
fn built_in_handlers_declare_their_short_type_name() {
  assert_eq!(FooMessageHandler::default().type_name(), "FooMessageHandler");
  assert_eq!(BarMessageHandler::default().type_name(), "BarMessageHandler");
  assert_eq!(
    short_type_name(std::any::type_name::<FooMessageHandler>()),
    "FooMessageHandler"
  );
}

#[test]
fn prefix_collision_is_reported_as_ambiguous() {
  // `FooMessageHandler2` also starts with "foo".
  let candidates: Vec<Arc<dyn MessageHandler>> = vec![
    Arc::new(FooMessageHandler::default()),
    Arc::new(FooMessageHandler2::default()),
  ];
  let resolver = HandlerResolver::new(candidates);

  assert!(matches!(
    resolver.create_by_name_hint(MessageType::Foo),
    Err(Error::AmbiguousMatch { count: 2, .. })
  ));
  assert!(matches!(
    resolver.create_by_name_hint(MessageType::Bar),
    Err(Error::NotFound { .. })
  ));
}

#[test]
fn generic_resolver_accepts_string_keys() {
  struct Named(&'static str);
  impl NameHint for Named {
    fn type_name(&self) -> &'static str {
      self.0
    }
  }

  let resolver = CandidateResolver::new(vec![
    Arc::new(Named("QuxHandler")),
    Arc::new(Named("ZapHandler")),
  ]);

  assert_eq!(resolver.len(), 2);
  assert_eq!(resolver.resolve_by_name_hint("qux").unwrap().0, "QuxHandler");
  assert_eq!(resolver.resolve_by_name_hint("ZAP").unwrap().0, "ZapHandler");
  assert!(resolver.resolve_by_name_hint("Handler").is_err());
}
