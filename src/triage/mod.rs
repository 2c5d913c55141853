//! The triage pipeline.
//!
//! This module drives a question through the full run: create a ticket on the
//! board, ask the model for an answer, classify its confidence, transition the
//! ticket to its final lane, and notify a human on handoff.
//!
//! Failure policy: ticket create and move failures are fatal to the run;
//! inference failures are absorbed and routed to human review; description
//! updates and handoff notifications are best-effort. Lane placement is the
//! authoritative outcome, descriptive annotation is not.

pub mod classify;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use crate::{
    base::{
        config::Config,
        prompts::{self, ESCALATION_SENTINEL},
        types::{HandoffNotice, Res, TriageLane, TriageOutcome},
    },
    service::{board::BoardClient, llm::LlmClient, notify::Notifier},
};

/// Max characters of the question carried into the ticket title.
const TITLE_MAX_CHARS: usize = 50;

/// The triage orchestrator.
///
/// Stateless between requests; the board is the system of record. This is
/// trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Triage {
    config: Config,
    board: BoardClient,
    llm: LlmClient,
    notifier: Notifier,
}

impl Triage {
    pub fn new(config: Config, board: BoardClient, llm: LlmClient, notifier: Notifier) -> Self {
        Self { config, board, llm, notifier }
    }

    /// Run the full triage pipeline for one question.
    #[instrument(skip_all)]
    pub async fn triage(&self, question: &str) -> Res<TriageOutcome> {
        info!("New question received.");

        // Create the ticket first, so a record exists even if inference fails.
        // A create failure is fatal: there is no ticket to update.

        let ticket = self
            .board
            .create_ticket(self.config.list_id(TriageLane::Intake), &ticket_title(question), &intake_description(question, Utc::now()))
            .await?;

        info!(ticket_id = %ticket.id, ticket_url = %ticket.url, "Ticket created in intake lane.");

        // Ask the model. Any failure becomes the escalation sentinel: inference
        // must never undo ticket creation, and must never crash the request.

        let prompt = prompts::render_triage_prompt(prompts::get_triage_directive(&self.config), question);

        let answer = match self.llm.generate(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(err) => {
                warn!(ticket_id = %ticket.id, "Inference failed, routing to human review: {err:#}");
                ESCALATION_SENTINEL.to_string()
            }
        };

        debug!(answer = %answer, "Model answer received.");

        // Classify, then transition the ticket to its final lane. The move is
        // fatal on failure; the description update is not.

        if classify::can_auto_resolve(&answer) {
            self.board.move_ticket(&ticket.id, self.config.list_id(TriageLane::AiResolved)).await?;

            let description = resolution_description(&answer, "Resolved by AI", Utc::now());
            if let Err(err) = self.board.update_ticket_description(&ticket.id, &description).await {
                warn!(ticket_id = %ticket.id, "Description update failed after move: {err:#}");
            }

            info!(ticket_id = %ticket.id, "Question resolved by AI.");

            Ok(TriageOutcome::ResolvedByAi {
                question: question.to_string(),
                answer,
                ticket,
            })
        } else {
            self.board.move_ticket(&ticket.id, self.config.list_id(TriageLane::HumanReview)).await?;

            let description = resolution_description(&answer, "Escalated to human", Utc::now());
            if let Err(err) = self.board.update_ticket_description(&ticket.id, &description).await {
                warn!(ticket_id = %ticket.id, "Description update failed after move: {err:#}");
            }

            let notice = HandoffNotice {
                ticket_id: ticket.id.clone(),
                ticket_url: ticket.url.clone(),
                question: question.to_string(),
                answer: answer.clone(),
                timestamp: Utc::now(),
            };

            if let Err(err) = self.notifier.notify_handoff(&notice).await {
                warn!(ticket_id = %ticket.id, "Handoff notification failed: {err:#}");
            }

            info!(ticket_id = %ticket.id, "Question escalated to a human agent.");

            Ok(TriageOutcome::EscalatedToHuman {
                question: question.to_string(),
                answer,
                ticket,
            })
        }
    }
}

/// Derive a ticket title from the question.
fn ticket_title(question: &str) -> String {
    let mut title: String = question.chars().take(TITLE_MAX_CHARS).collect();

    if question.chars().count() > TITLE_MAX_CHARS {
        title.push_str("...");
    }

    title
}

/// Description for a freshly created intake ticket.
fn intake_description(question: &str, at: DateTime<Utc>) -> String {
    format!("**Question:** {question}\n\n**Status:** In progress\n**Date:** {}", at.to_rfc3339())
}

/// Description applied once the ticket reaches its final lane.
fn resolution_description(answer: &str, status: &str, at: DateTime<Utc>) -> String {
    format!("**AI answer:** {answer}\n\n**Status:** {status}\n**Resolution date:** {}", at.to_rfc3339())
}
