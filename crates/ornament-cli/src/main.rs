use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::Context;
use async_trait::async_trait;
use clap::Parser;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ornament_core::ports::{ReportSink, StdoutSink, TracingSink};
use ornament_core::{
    Args, CallError, Callable, Circle, DecoratorConfig, FnCallable, PluginRegistry, StackBuilder,
    TypedFn,
};

/// ornament - tour of the call wrappers, the plugin registry and Circle
#[derive(Parser, Debug)]
#[command(name = "ornament")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON wrapper stack applied to an extra demo callable
    config: Option<PathBuf>,

    /// Send wrapper reports to the log instead of stdout
    #[arg(long)]
    log_reports: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Deserialize)]
struct Greeting {
    name: String,
    age: Option<u32>,
}

fn make_greeting(g: Greeting) -> String {
    match g.age {
        None => format!("Howdy {}!", g.name),
        Some(age) if age < 100 => format!("Whoa {}! {} already, you are growing up!", g.name, age),
        Some(age) => format!("Hey {}! You're {}? Impressive!", g.name, age),
    }
}

/// Prints a greeting and returns how many it has printed so far.
struct Greeter {
    greeted: AtomicU32,
}

impl Greeter {
    fn new() -> Self {
        Self {
            greeted: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl Callable for Greeter {
    fn name(&self) -> &str {
        "greet"
    }

    async fn call(&self, args: &Args) -> Result<Value, CallError> {
        let (name,): (String,) = args
            .decode()
            .map_err(|e| CallError::failed("greet", format!("json decode: {e}")))?;
        println!("Hello {name}");
        let n = self.greeted.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(json!(n))
    }
}

fn named_greeting(name: &str, greeting: &'static str) -> Arc<dyn Callable> {
    Arc::new(FnCallable::from_sync(name, move |args| {
        let who = args.get(0).and_then(Value::as_str).unwrap_or("stranger");
        Ok(json!(format!("{greeting} {who}")))
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let sink: Arc<dyn ReportSink> = if cli.log_reports {
        Arc::new(TracingSink)
    } else {
        Arc::new(StdoutSink)
    };
    let registry = Arc::new(PluginRegistry::new());

    // fail on a bad config before running any demo
    let configured_stack = match &cli.config {
        Some(path) => {
            let config = DecoratorConfig::from_path(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            tracing::info!(path = %path.display(), layers = config.layers.len(), "loaded config");
            Some(StackBuilder::from_config(&config, sink.clone(), registry.clone())?)
        }
        None => None,
    };

    // (A) timer
    let waste_some_time = StackBuilder::new(sink.clone()).timer().build(Arc::new(
        TypedFn::<(u32,), (), _>::new("waste_some_time", |(num_times,): (u32,)| async move {
            for _ in 0..num_times {
                let _: u64 = std::hint::black_box((0..10_000u64).map(|i| i * i).sum());
            }
            Ok::<_, CallError>(())
        }),
    ));
    waste_some_time.call(&Args::new().arg(1)).await?;
    waste_some_time.call(&Args::new().arg(999)).await?;

    // (B) debug
    let greeting = StackBuilder::new(sink.clone()).debug().build(Arc::new(
        TypedFn::<Greeting, String, _>::new("make_greeting", |g: Greeting| async move {
            Ok::<_, CallError>(make_greeting(g))
        }),
    ));
    greeting.call(&Args::new().kwarg("name", "Benjamin")).await?;
    greeting
        .call(&Args::new().kwarg("name", "Richard").kwarg("age", 112))
        .await?;

    // (C) slow down
    let countdown = StackBuilder::new(sink.clone())
        .slow_down()
        .build(Arc::new(FnCallable::from_sync("countdown", |args| {
            let from = args.get(0).and_then(Value::as_u64).unwrap_or(0);
            println!("{from}");
            Ok(json!(from))
        })));
    for n in (1..=3).rev() {
        countdown.call(&Args::new().arg(n)).await?;
    }
    println!("Liftoff!");

    // (D) plugin registry
    let plugins = StackBuilder::new(sink.clone()).register(registry.clone());
    plugins.build(named_greeting("say_hello", "Hello"));
    plugins.build(named_greeting("be_awesome", "Yo"));
    println!("plugins: {:?}", registry.names());

    let plugin = registry
        .choose_random(&mut rand::thread_rng())
        .context("no plugins registered")?;
    println!("Using {:?}", plugin.name());
    let greeted = plugin.call(&Args::new().arg("Alice")).await?;
    println!("{greeted}");

    // (E) repeat
    let greet = StackBuilder::new(sink.clone())
        .repeat(4)?
        .build(Arc::new(Greeter::new()));
    let count = greet.call(&Args::new().arg("World")).await?;
    println!("greeted {count} times");

    // (F) circle
    let mut circle = Circle::new(5.0)?;
    println!(
        "radius={} area={} volume(h=2)={}",
        circle.radius(),
        circle.area(),
        circle.cylinder_volume(2.0)
    );
    circle.set_radius(2.0)?;
    println!("radius={} area={}", circle.radius(), circle.area());
    if let Err(e) = circle.set_radius(-1.0) {
        println!("rejected: {e} (radius still {})", circle.radius());
    }
    println!(
        "unit circle radius={} pi={}",
        Circle::unit_circle().radius(),
        Circle::pi()
    );

    // (G) config-driven stack: `ornament-cli demos/stack.json`
    if let Some(stack) = configured_stack {
        let configured = stack.build(Arc::new(TypedFn::<Greeting, String, _>::new(
            "configured_greeting",
            |g: Greeting| async move { Ok::<_, CallError>(make_greeting(g)) },
        )));
        configured
            .call(&Args::new().kwarg("name", "Dorrisile").kwarg("age", 116))
            .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_is_not_read_as_a_config_path() {
        let err = Cli::try_parse_from(["ornament", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn unknown_flag_is_rejected_at_parse_time() {
        let err = Cli::try_parse_from(["ornament", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn parses_config_path_and_flags() {
        let cli = Cli::try_parse_from(["ornament", "demos/stack.json", "--log-reports", "-d"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("demos/stack.json")));
        assert!(cli.log_reports);
        assert!(cli.debug);
    }

    #[test]
    fn no_arguments_runs_without_config() {
        let cli = Cli::try_parse_from(["ornament"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.log_reports);
    }
}
