//! Runtime services and shared state for triage-desk.

use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    server,
    service::{board::BoardClient, llm::LlmClient, notify::Notifier},
    triage::Triage,
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the board client, LLM client, notifier, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The ticketing board client instance.
    pub board: BoardClient,
    /// The LLM client instance.
    pub llm: LlmClient,
    /// The human-handoff notifier instance.
    pub notifier: Notifier,
    /// The triage orchestrator.
    pub triage: Triage,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the board client.
        let board = BoardClient::trello(&config)?;

        // Initialize the LLM client.
        let llm = LlmClient::ollama(&config)?;

        // Initialize the handoff notifier.
        let notifier = Notifier::log();

        let triage = Triage::new(config.clone(), board.clone(), llm.clone(), notifier.clone());

        Ok(Self { config, board, llm, notifier, triage })
    }

    /// Serve the inbound HTTP surface until shutdown.
    pub async fn start(&self) -> Void {
        let router = server::build_router(self.triage.clone());
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr.as_str()).await?;

        info!("Listening on {}.", listener.local_addr()?);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received.");
}
