//! Human-handoff notification sinks.
//!
//! The default sink only logs the handoff. The trait exists so a real
//! deployment can substitute an email, chat, or queue emitter without touching
//! orchestration logic.

use crate::base::types::{HandoffNotice, Void};
use async_trait::async_trait;
use std::sync::Arc;
use std::ops::Deref;
use tracing::{instrument, warn};

// Traits.

/// Generic human-handoff notifier trait that sinks must implement.
#[async_trait]
pub trait GenericNotifier: Send + Sync + 'static {
    /// Announce that a ticket has been escalated to a human agent.
    async fn notify_handoff(&self, notice: &HandoffNotice) -> Void;
}

// Structs.

/// Notifier for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<dyn GenericNotifier>,
}

impl Deref for Notifier {
    type Target = dyn GenericNotifier;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl Notifier {
    pub fn new(inner: Arc<dyn GenericNotifier>) -> Self {
        Self { inner }
    }

    /// Creates the logging notifier.
    pub fn log() -> Self {
        Self { inner: Arc::new(LogNotifier) }
    }
}

// Specific implementations.

/// Notifier that surfaces handoffs in the service logs.
pub struct LogNotifier;

#[async_trait]
impl GenericNotifier for LogNotifier {
    #[instrument(skip_all)]
    async fn notify_handoff(&self, notice: &HandoffNotice) -> Void {
        warn!(
            ticket_id = %notice.ticket_id,
            ticket_url = %notice.ticket_url,
            question = %notice.question,
            answer = %notice.answer,
            timestamp = %notice.timestamp.to_rfc3339(),
            "Ticket escalated to a human agent."
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn log_notifier_always_succeeds() {
        let notice = HandoffNotice {
            ticket_id: "abc123".to_string(),
            ticket_url: "https://trello.com/c/abc123".to_string(),
            question: "What is user X's salary?".to_string(),
            answer: "ERR_FOR_HUMAN".to_string(),
            timestamp: Utc::now(),
        };

        assert!(Notifier::log().notify_handoff(&notice).await.is_ok());
    }
}
