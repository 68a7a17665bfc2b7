//! Counter + Todos terminal front-end
//!
//! Reads commands from stdin, dispatches them to the store and re-renders
//! the whole view after every dispatch.

use counter_todos::cli::{self, Command, Outcome};
use counter_todos::view::{Profile, render_app};
use counter_todos::{AppStore, Config, RootEnvironment, create_store};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unistate_runtime::metrics::MetricsServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Logs go to stderr so they never interleave with the rendered view
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| counter_todos::config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(?config, "Starting counter-todos");

    let mut metrics = MetricsServer::new();
    if config.metrics_enabled {
        metrics.start()?;
    }

    let store = Arc::new(create_store(RootEnvironment::default(), config.store_config()));
    let profile = Profile::new(config.profile.name.clone(), config.profile.job.clone());

    let _renderer = {
        let weak = Arc::downgrade(&store);
        let profile = profile.clone();
        store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                println!("\n{}\n", render_app(&profile, &store.get_state()));
            }
        })
    };

    let action_log = spawn_action_log(&store);

    println!("{}\n", render_app(&profile, &store.get_state()));
    println!("type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("error: {e}");
                continue;
            },
        };

        match cli::execute(&store, &metrics, command) {
            Outcome::Dispatched => {},
            Outcome::Output(text) => println!("{text}"),
            Outcome::Quit => break,
        }
    }

    action_log.abort();
    tracing::info!("Shutting down");
    Ok(())
}

/// Log every dispatched action from the broadcast channel
fn spawn_action_log(store: &AppStore) -> tokio::task::JoinHandle<()> {
    let mut actions = store.subscribe_actions();
    tokio::spawn(async move {
        loop {
            match actions.recv().await {
                Ok(action) => tracing::info!(action = action.type_name(), "dispatched"),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "action log fell behind");
                },
                Err(RecvError::Closed) => break,
            }
        }
    })
}
