//! Spire terminal client.
//!
//! Runs an auto-play session against the runtime and prints each new battle
//! log line. Reward choices are automatic unless `SPIRE_INTERACTIVE` is set.
mod config;
mod logging;
mod prompt;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::broadcast::{Receiver, error::RecvError};

use config::ClientConfig;
use prompt::StdinPolicy;
use runtime::{
    AutoPlay, AutoPlayConfig, Event, FirstOffer, RewardPolicy, Runtime, RuntimeConfig, Topic,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let log_session = logging::init(&config)?;

    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            seed: config.seed,
            ..RuntimeConfig::default()
        })
        .build()
        .await?;
    let handle = runtime.handle();

    println!(
        "Spire (seed {}) - session {}, logs in {}",
        runtime.game_seed(),
        log_session.session_id,
        log_session.log_file.display()
    );

    let printer = tokio::spawn(print_log(runtime.subscribe(Topic::Log)));

    let policy: Arc<dyn RewardPolicy> = if config.interactive {
        Arc::new(StdinPolicy::new())
    } else {
        Arc::new(FirstOffer)
    };
    let autoplay_config = AutoPlayConfig {
        max_floors: config.max_floors,
        ..AutoPlayConfig::default().with_cadence(config.tick)
    };
    let autoplay = AutoPlay::spawn(handle.clone(), autoplay_config, policy);

    let stopper = autoplay.stopper();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stopper.stop();
        }
    });

    let report = autoplay.join().await?;
    let state = handle.query_state().await?;

    if let Some(path) = &config.dump_state {
        let json = serde_json::to_string_pretty(&state).context("serializing game state")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing state dump to {}", path.display()))?;
        tracing::info!("State written to {}", path.display());
    }

    drop(handle);
    runtime.shutdown().await?;
    printer.await.context("log printer task")?;

    println!("{}", render::status_line(&state));
    println!("{}", render::summary(&report));
    Ok(())
}

/// Prints log lines until the runtime shuts down.
async fn print_log(mut rx: Receiver<Event>) {
    loop {
        match rx.recv().await {
            Ok(Event::Log(event)) => {
                for entry in &event.entries {
                    println!("{}", render::log_line(entry));
                }
            }
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                println!("  ... {skipped} log updates skipped");
            }
            Err(RecvError::Closed) => break,
        }
    }
}
