pub mod trello;

use crate::base::types::{Res, Ticket, Void};
use async_trait::async_trait;
use std::sync::Arc;
use std::ops::Deref;

// Traits.

/// Generic ticketing board client trait that clients must implement.
///
/// This trait defines the operations the triage pipeline needs from a remote
/// tracking board. Implementing it allows different board providers to be used
/// with triage-desk.
#[async_trait]
pub trait GenericBoardClient: Send + Sync + 'static {
    /// Create a ticket in the given list.
    ///
    /// Returns the board's record of the new ticket, including its opaque id
    /// and human-facing URL.
    async fn create_ticket(&self, list_id: &str, title: &str, description: &str) -> Res<Ticket>;

    /// Move a ticket to the given list.
    async fn move_ticket(&self, ticket_id: &str, target_list_id: &str) -> Void;

    /// Replace a ticket's description.
    async fn update_ticket_description(&self, ticket_id: &str, description: &str) -> Void;
}

// Structs.

/// Board client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct BoardClient {
    inner: Arc<dyn GenericBoardClient>,
}

impl Deref for BoardClient {
    type Target = dyn GenericBoardClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl BoardClient {
    pub fn new(inner: Arc<dyn GenericBoardClient>) -> Self {
        Self { inner }
    }
}
