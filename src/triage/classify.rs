//! Resolution-confidence heuristic for raw model answers.

use tracing::debug;

use crate::base::prompts::ESCALATION_SENTINEL;

/// Minimum character count for a substantive answer.
pub const MIN_ANSWER_CHARS: usize = 10;

/// Answers mentioning "error" below this length are treated as error output.
pub const ERROR_ANSWER_MAX_CHARS: usize = 50;

/// Decide whether a raw model answer can stand as the resolution of a ticket.
///
/// This is a heuristic, not a semantic evaluation: ambiguous or short answers
/// default to human review, since a false "resolved" is worse than an
/// unnecessary escalation. Rules are applied in order; first match wins.
pub fn can_auto_resolve(answer: &str) -> bool {
    let trimmed = answer.trim();

    if trimmed == ESCALATION_SENTINEL {
        debug!("Answer is exactly the escalation sentinel.");
        return false;
    }

    if answer.contains(ESCALATION_SENTINEL) {
        debug!("Answer contains the escalation sentinel.");
        return false;
    }

    if trimmed.chars().count() < MIN_ANSWER_CHARS {
        debug!(chars = trimmed.chars().count(), "Answer too short to be substantive.");
        return false;
    }

    if answer.to_lowercase().contains("error") && answer.chars().count() < ERROR_ANSWER_MAX_CHARS {
        debug!("Answer looks like an error message.");
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_sentinel_is_escalated() {
        assert!(!can_auto_resolve("ERR_FOR_HUMAN"));
        assert!(!can_auto_resolve("  ERR_FOR_HUMAN  \n"));
    }

    #[test]
    fn embedded_sentinel_is_escalated() {
        assert!(!can_auto_resolve("I think the answer is ERR_FOR_HUMAN, sorry about that."));
    }

    #[test]
    fn short_answers_are_escalated() {
        assert!(!can_auto_resolve(""));
        assert!(!can_auto_resolve("Yes."));
        assert!(!can_auto_resolve("   ok   "));
    }

    #[test]
    fn short_error_answers_are_escalated() {
        assert!(!can_auto_resolve("Error: connection refused"));
        assert!(!can_auto_resolve("internal ERROR occurred"));
    }

    #[test]
    fn long_answers_mentioning_error_are_resolvable() {
        let answer = "If you see an error during login, clear the browser cache and retry the sign-in flow.";
        assert!(answer.chars().count() >= ERROR_ANSWER_MAX_CHARS);
        assert!(can_auto_resolve(answer));
    }

    #[test]
    fn substantive_answers_are_resolvable() {
        assert!(can_auto_resolve("Open the settings page and click \"Reset password\" to receive a reset link by email."));
    }

    #[test]
    fn length_checks_count_characters_not_bytes() {
        // Nine characters, well over ten bytes.
        assert!(!can_auto_resolve("ééééééééé"));
    }
}
