//! Prompt templates and protocol tokens for the inference gateway.

use crate::base::config::Config;

/// Token the model must return, alone, when a question needs a human.
pub const ESCALATION_SENTINEL: &str = "ERR_FOR_HUMAN";

/// Marker for a hallucinated follow-up user turn; generation stops on it.
pub const USER_TURN_MARKER: &str = "Usuario:";

/// Triage directive.
pub const TRIAGE_DIRECTIVE: &str = r#####"
You are a specialized help desk assistant for an enterprise application.

CRITICAL INSTRUCTIONS:
1. Answer the question DIRECTLY if you are absolutely certain of the answer.
2. If the question is about basic functionality, simple configuration, or common problems, ANSWER DIRECTLY.
3. ONLY if the question requires:
   - Sensitive or confidential information
   - Advanced system configuration
   - Important business decisions
   - Specific context you do not have
   - Access to private user data
   THEN return EXACTLY: "ERR_FOR_HUMAN"
"#####;

/// Get the triage directive, honoring any config override.
pub fn get_triage_directive(config: &Config) -> &str {
    &config.triage_directive
}

/// Render the full prompt sent to the model for one question.
pub fn render_triage_prompt(directive: &str, question: &str) -> String {
    format!(
        "{directive}\nUser question: \"{question}\"\n\nIf you can answer with confidence, give a clear and useful answer. If not, return EXACTLY \"{ESCALATION_SENTINEL}\" with no additional text.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_prompt_embeds_question_and_sentinel() {
        let prompt = render_triage_prompt(TRIAGE_DIRECTIVE, "How do I reset my password?");

        assert!(prompt.contains("How do I reset my password?"));
        assert!(prompt.contains(ESCALATION_SENTINEL));
    }
}
