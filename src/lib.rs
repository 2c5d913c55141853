//! Library root for `triage-desk`.
//!
//! Triage-desk is an LLM-powered ticket-triage orchestrator designed to:
//! - Record every incoming question as a ticket on a tracking board
//! - Ask a model whether it can answer the question confidently
//! - Route each ticket to an AI-resolved or needs-human lane
//! - Notify human agents when a question is handed off
//!
//! The service integrates with Trello for ticketing and Ollama for inference.
//! The architecture is built around extensible traits that allow for different
//! implementations of each service.

#[deny(missing_docs)]
pub mod base;
pub mod runtime;
pub mod server;
pub mod service;
pub mod triage;

use base::{config::Config, types::Void};
use rustls::crypto;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the triage-desk runtime:
/// - Initializes the crypto provider
/// - Creates the runtime context with board, LLM, and notifier clients
/// - Starts the inbound HTTP surface
pub async fn start(config: Config) -> Void {
    info!("Starting triage-desk ...");

    // Start the crypto provider.
    crypto::ring::default_provider().install_default().unwrap();

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
