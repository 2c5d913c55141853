//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use crate::base::{prompts, types::TriageLane};

use super::types::Res;

/// Default Trello cards API endpoint.
fn default_trello_api_url() -> String {
    "https://api.trello.com/1/cards".to_string()
}

/// Default Ollama generate endpoint.
fn default_ollama_endpoint() -> String {
    "http://localhost:11434/api/generate".to_string()
}

/// Default Ollama model to use.
fn default_ollama_model() -> String {
    "llama3".to_string()
}

/// Default sampling temperature; low, to favor determinism.
fn default_ollama_temperature() -> f32 {
    0.3
}

/// Default nucleus sampling cutoff.
fn default_ollama_top_p() -> f32 {
    0.9
}

/// Default vocabulary cutoff.
fn default_ollama_top_k() -> u32 {
    40
}

/// Default max generated tokens.
fn default_ollama_num_predict() -> u32 {
    512
}

/// Default repetition penalty.
fn default_ollama_repeat_penalty() -> f32 {
    1.1
}

/// Default triage directive for the model.
fn default_triage_directive() -> String {
    prompts::TRIAGE_DIRECTIVE.to_string()
}

/// Default bind address for the inbound HTTP surface.
fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

/// Default outbound request timeout, in seconds.
fn default_http_timeout_secs() -> u64 {
    120
}

/// Configuration for the triage-desk application.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Shared, cheaply-cloneable configuration payload.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// The resolved configuration values for the triage-desk application.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Trello API key (`TRELLO_KEY`).
    pub trello_key: String,
    /// Trello API token (`TRELLO_TOKEN`).
    pub trello_token: String,
    /// List id of the intake lane (`TRELLO_INTAKE_LIST_ID`).
    pub trello_intake_list_id: String,
    /// List id of the AI-resolved lane (`TRELLO_AI_RESOLVED_LIST_ID`).
    pub trello_ai_resolved_list_id: String,
    /// List id of the human-review lane (`TRELLO_HUMAN_REVIEW_LIST_ID`).
    pub trello_human_review_list_id: String,
    /// Trello cards API endpoint (`TRELLO_API_URL`).
    #[serde(default = "default_trello_api_url")]
    pub trello_api_url: String,
    /// Ollama generate endpoint (`OLLAMA_ENDPOINT`).
    #[serde(default = "default_ollama_endpoint")]
    pub ollama_endpoint: String,
    /// Ollama model to use (`OLLAMA_MODEL`).
    #[serde(default = "default_ollama_model")]
    pub ollama_model: String,
    /// Sampling temperature (`OLLAMA_TEMPERATURE`).
    /// Value between 0 and 1. Lower values make output more focused and deterministic.
    #[serde(default = "default_ollama_temperature")]
    pub ollama_temperature: f32,
    /// Nucleus sampling cutoff (`OLLAMA_TOP_P`).
    #[serde(default = "default_ollama_top_p")]
    pub ollama_top_p: f32,
    /// Vocabulary cutoff (`OLLAMA_TOP_K`).
    #[serde(default = "default_ollama_top_k")]
    pub ollama_top_k: u32,
    /// Max tokens the model may generate per answer (`OLLAMA_NUM_PREDICT`).
    #[serde(default = "default_ollama_num_predict")]
    pub ollama_num_predict: u32,
    /// Repetition penalty (`OLLAMA_REPEAT_PENALTY`).
    #[serde(default = "default_ollama_repeat_penalty")]
    pub ollama_repeat_penalty: f32,
    /// Optional custom triage directive to override the default (`TRIAGE_DIRECTIVE`).
    #[serde(default = "default_triage_directive")]
    pub triage_directive: String,
    /// Bind address for the inbound HTTP surface (`BIND_ADDR`).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Outbound request timeout in seconds (`HTTP_TIMEOUT_SECS`).
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from an optional explicit file path and the environment.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("TRIAGE_DESK"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Validate the configuration once, at startup.
    ///
    /// Absence of any of the board values is a fatal startup error, not a
    /// per-request error.
    pub fn validate(&self) -> Res<()> {
        let required = [
            ("trello_key", &self.trello_key),
            ("trello_token", &self.trello_token),
            ("trello_intake_list_id", &self.trello_intake_list_id),
            ("trello_ai_resolved_list_id", &self.trello_ai_resolved_list_id),
            ("trello_human_review_list_id", &self.trello_human_review_list_id),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(anyhow::anyhow!("`{name}` is not configured."));
            }
        }

        if self.ollama_temperature < 0.0 || self.ollama_temperature > 1.0 {
            return Err(anyhow::anyhow!("Ollama temperature must be between 0 and 1."));
        }

        if self.ollama_num_predict < 1 || self.ollama_num_predict > 8192 {
            return Err(anyhow::anyhow!("Ollama num_predict must be between 1 and 8192."));
        }

        Ok(())
    }

    /// Map a triage lane to its configured board list id.
    pub fn list_id(&self, lane: TriageLane) -> &str {
        match lane {
            TriageLane::Intake => &self.trello_intake_list_id,
            TriageLane::AiResolved => &self.trello_ai_resolved_list_id,
            TriageLane::HumanReview => &self.trello_human_review_list_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_config() -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                trello_key: "key".to_string(),
                trello_token: "token".to_string(),
                trello_intake_list_id: "list-intake".to_string(),
                trello_ai_resolved_list_id: "list-ai".to_string(),
                trello_human_review_list_id: "list-human".to_string(),
                trello_api_url: default_trello_api_url(),
                ollama_endpoint: default_ollama_endpoint(),
                ollama_model: default_ollama_model(),
                ollama_temperature: default_ollama_temperature(),
                ollama_top_p: default_ollama_top_p(),
                ollama_top_k: default_ollama_top_k(),
                ollama_num_predict: default_ollama_num_predict(),
                ollama_repeat_penalty: default_ollama_repeat_penalty(),
                triage_directive: default_triage_directive(),
                bind_addr: default_bind_addr(),
                http_timeout_secs: default_http_timeout_secs(),
            }),
        }
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(filled_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_board_values() {
        let mut config = filled_config();
        Arc::make_mut(&mut config.inner).trello_human_review_list_id = "".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("trello_human_review_list_id"));
    }

    #[test]
    fn validate_rejects_out_of_range_temperature() {
        let mut config = filled_config();
        Arc::make_mut(&mut config.inner).ollama_temperature = 1.5;

        assert!(config.validate().is_err());
    }

    #[test]
    fn lanes_map_to_configured_lists() {
        let config = filled_config();

        assert_eq!(config.list_id(TriageLane::Intake), "list-intake");
        assert_eq!(config.list_id(TriageLane::AiResolved), "list-ai");
        assert_eq!(config.list_id(TriageLane::HumanReview), "list-human");
    }
}
