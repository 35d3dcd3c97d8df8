use courier::config::{find_config_file, load_from_file};
use courier::{bootstrap, DispatchConfig, HandlerResolver, Message, MessageQueueRunner, MessageType};

fn main() -> courier::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  // Fall back to the built-in wiring when no courier.yaml is around.
  let config = match find_config_file(None) {
    Ok(path) => load_from_file(&path)?,
    Err(_) => DispatchConfig::default(),
  };

  let container = bootstrap(&config)?;
  let handlers = container.get::<HandlerResolver>(None)?;
  let runner = container.get::<MessageQueueRunner>(None)?;

  for (kind, body) in [(MessageType::Foo, "first"), (MessageType::Bar, "second")] {
    let message = Message::new(kind, body);
    handlers.dispatch(&message)?;
    let sender = runner.run(&message)?;
    println!("{} sent via sender #{}", kind, sender.id());
  }

  Ok(())
}
