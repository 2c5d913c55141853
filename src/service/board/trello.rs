//! Integration with the Trello cards API.
//!
//! This module provides the Trello implementation of the ticketing board
//! gateway. Authentication rides on `key`/`token` query parameters; a card's
//! list id doubles as its triage lane.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::base::{
    config::Config,
    types::{Res, Ticket, Void},
};

use super::{BoardClient, GenericBoardClient};

// Extra methods on `BoardClient` applied by the trello implementation.

impl BoardClient {
    pub fn trello(config: &Config) -> Res<Self> {
        let client = TrelloBoardClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Specific implementations.

/// Trello board client implementation.
#[derive(Clone)]
pub struct TrelloBoardClient {
    client: reqwest::Client,
    api_url: String,
    key: String,
    token: String,
}

/// The subset of a Trello card the pipeline cares about.
#[derive(Debug, Deserialize)]
struct TrelloCard {
    id: String,
    #[serde(rename = "shortUrl")]
    short_url: String,
}

impl TrelloBoardClient {
    /// Create a new Trello board client.
    #[instrument(name = "TrelloBoardClient::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(config.http_timeout_secs)).build()?;

        Ok(Self {
            client,
            api_url: config.trello_api_url.clone(),
            key: config.trello_key.clone(),
            token: config.trello_token.clone(),
        })
    }

    fn auth_query(&self) -> [(&'static str, &str); 2] {
        [("key", self.key.as_str()), ("token", self.token.as_str())]
    }
}

#[async_trait]
impl GenericBoardClient for TrelloBoardClient {
    #[instrument(skip(self, description))]
    async fn create_ticket(&self, list_id: &str, title: &str, description: &str) -> Res<Ticket> {
        let payload = json!({
            "idList": list_id,
            "name": title,
            "desc": description,
            "due": null,
        });

        let card: TrelloCard = self
            .client
            .post(&self.api_url)
            .query(&self.auth_query())
            .json(&payload)
            .send()
            .await
            .context("trello: create card request failed")?
            .error_for_status()
            .context("trello: create card rejected")?
            .json()
            .await
            .context("trello: create card response malformed")?;

        info!(card_id = %card.id, "Created card.");

        Ok(Ticket { id: card.id, url: card.short_url })
    }

    #[instrument(skip(self))]
    async fn move_ticket(&self, ticket_id: &str, target_list_id: &str) -> Void {
        let payload = json!({ "idList": target_list_id });

        self.client
            .put(format!("{}/{ticket_id}", self.api_url))
            .query(&self.auth_query())
            .json(&payload)
            .send()
            .await
            .context("trello: move card request failed")?
            .error_for_status()
            .context("trello: move card rejected")?;

        info!(card_id = %ticket_id, list_id = %target_list_id, "Moved card.");

        Ok(())
    }

    #[instrument(skip(self, description))]
    async fn update_ticket_description(&self, ticket_id: &str, description: &str) -> Void {
        let payload = json!({ "desc": description });

        self.client
            .put(format!("{}/{ticket_id}", self.api_url))
            .query(&self.auth_query())
            .json(&payload)
            .send()
            .await
            .context("trello: update card request failed")?
            .error_for_status()
            .context("trello: update card rejected")?;

        info!(card_id = %ticket_id, "Updated card description.");

        Ok(())
    }
}
