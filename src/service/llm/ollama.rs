//! Integration with Ollama's generate API.
//!
//! This module provides the Ollama implementation of the inference gateway.
//! Generation parameters are fixed at construction from config; they are not
//! user-tunable per request. Generation stops on the escalation sentinel or a
//! hallucinated follow-up user turn.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::base::{
    config::Config,
    prompts::{ESCALATION_SENTINEL, USER_TURN_MARKER},
    types::Res,
};

use super::{GenericLlmClient, LlmClient};

// Extra methods on `LlmClient` applied by the ollama implementation.

impl LlmClient {
    pub fn ollama(config: &Config) -> Res<Self> {
        let client = OllamaLlmClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Wire types.

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    num_predict: u32,
    repeat_penalty: f32,
    stop: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

// Specific implementations.

/// Ollama LLM client implementation.
#[derive(Clone)]
pub struct OllamaLlmClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f32,
    top_p: f32,
    top_k: u32,
    num_predict: u32,
    repeat_penalty: f32,
}

impl OllamaLlmClient {
    /// Create a new Ollama LLM client.
    #[instrument(name = "OllamaLlmClient::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(config.http_timeout_secs)).build()?;

        Ok(Self {
            client,
            endpoint: config.ollama_endpoint.clone(),
            model: config.ollama_model.clone(),
            temperature: config.ollama_temperature,
            top_p: config.ollama_top_p,
            top_k: config.ollama_top_k,
            num_predict: config.ollama_num_predict,
            repeat_penalty: config.ollama_repeat_penalty,
        })
    }
}

#[async_trait]
impl GenericLlmClient for OllamaLlmClient {
    #[instrument(skip_all)]
    async fn generate(&self, prompt: &str) -> Res<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
                top_p: self.top_p,
                top_k: self.top_k,
                num_predict: self.num_predict,
                repeat_penalty: self.repeat_penalty,
                stop: vec![ESCALATION_SENTINEL.to_string(), USER_TURN_MARKER.to_string()],
            },
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "Sending generate request.");

        let response: GenerateResponse = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .context("ollama: generate request failed")?
            .error_for_status()
            .context("ollama: generate rejected")?
            .json()
            .await
            .context("ollama: generate response malformed")?;

        Ok(response.response)
    }
}
