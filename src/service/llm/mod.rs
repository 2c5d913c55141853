pub mod ollama;

use crate::base::types::Res;
use async_trait::async_trait;
use std::sync::Arc;
use std::ops::Deref;

// Traits.

/// Generic LLM client trait that clients must implement.
///
/// This trait defines the single capability the triage pipeline consumes from a
/// model provider. Implementing it allows different providers to be used with
/// triage-desk.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Submit a prompt and return the generated answer text.
    async fn generate(&self, prompt: &str) -> Res<String>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LlmClient {
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }
}
