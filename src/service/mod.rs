//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the external collaborators of the
//! triage pipeline:
//! - Ticketing board services (e.g., Trello)
//! - LLM services (e.g., Ollama)
//! - Human-handoff notification sinks
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod board;
pub mod llm;
pub mod notify;
