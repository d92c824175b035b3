//! # peoplehubd — peoplehub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize structured logging
//! - Construct the in-memory store, the clock and the person service
//! - Seed the demo records when enabled
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod seed;

use std::sync::Arc;

use peoplehub_adapter_http_axum::router;
use peoplehub_adapter_http_axum::state::AppState;
use peoplehub_app::clock::AnyClock;
use peoplehub_app::services::person_service::PersonService;
use peoplehub_app::store::InMemoryPersonStore;
use peoplehub_domain::collation::Collator;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Store & services
    let locale = config.locale()?;
    let store = InMemoryPersonStore::new(Collator::new(locale));
    let clock = AnyClock::from_fixed_date(config.clock.fixed_date);
    let person_service = Arc::new(PersonService::new(store, clock));

    if config.people.seed_demo_data {
        let seeded = seed::demo_records(&person_service).await?;
        tracing::info!(count = seeded.len(), "seeded demo records");
    }

    // HTTP
    let app = router::build(AppState::from_arc(person_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, %locale, ?clock, "peoplehubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("peoplehubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
