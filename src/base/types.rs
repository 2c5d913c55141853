//! Common types and result aliases shared across triage-desk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The crate's boxed error type.
pub type Err = anyhow::Error;
/// Fallible result carrying the crate error type.
pub type Res<T> = Result<T, Err>;
/// A fallible operation with no success value.
pub type Void = Res<()>;

/// Inbound triage request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageRequest {
    /// The end user's question to be triaged.
    pub question: String,
}

/// A ticket record on the remote board.
///
/// The board owns the ticket's lifecycle; this system only creates it and then
/// mutates it within a single triage run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Opaque board-assigned ticket id.
    pub id: String,
    /// Human-facing URL of the ticket.
    pub url: String,
}

/// One of the three fixed destinations a ticket can occupy on the board.
///
/// Within a single run, transitions are `Intake -> AiResolved` or
/// `Intake -> HumanReview`, never both, never reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriageLane {
    /// The intake lane where new tickets land.
    Intake,
    /// The lane for tickets resolved by the AI.
    AiResolved,
    /// The lane for tickets escalated to a human agent.
    HumanReview,
}

/// Result of a completed triage run.
///
/// Fatal failures (ticket create/move) are reported through the `Err` arm of
/// `Res<TriageOutcome>` rather than a variant here; the inbound surface turns
/// them into a generic error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TriageOutcome {
    /// The question was answered by the AI and the ticket moved to the AI-resolved lane.
    ResolvedByAi {
        /// The original question.
        question: String,
        /// The model's answer.
        answer: String,
        /// The ticket record on the board.
        ticket: Ticket,
    },
    /// The question was escalated and the ticket moved to the human-review lane.
    EscalatedToHuman {
        /// The original question.
        question: String,
        /// The model's answer (or the escalation sentinel).
        answer: String,
        /// The ticket record on the board.
        ticket: Ticket,
    },
}

impl TriageOutcome {
    /// The lane the ticket ended in for this outcome.
    pub fn lane(&self) -> TriageLane {
        match self {
            TriageOutcome::ResolvedByAi { .. } => TriageLane::AiResolved,
            TriageOutcome::EscalatedToHuman { .. } => TriageLane::HumanReview,
        }
    }
}

/// Everything a human-handoff sink needs to pick up an escalated ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffNotice {
    /// Opaque board-assigned ticket id.
    pub ticket_id: String,
    /// Human-facing URL of the ticket.
    pub ticket_url: String,
    /// The original question.
    pub question: String,
    /// The model's answer (or the escalation sentinel).
    pub answer: String,
    /// When the handoff was raised.
    pub timestamp: DateTime<Utc>,
}
