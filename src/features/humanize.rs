use tracing::{error, info};

use crate::ai::LlmClient;
use crate::errors::StyleError;
use crate::prompt::build_humanize_prompt;

/// Rewrite `text` so it reads like a human author's draft.
pub async fn humanize_text(client: &LlmClient, text: &str) -> Result<String, StyleError> {
    let prompt = build_humanize_prompt(text);

    match client.complete(&prompt, None).await {
        Ok(response_text) => {
            let rewritten = response_text.trim().to_string();
            info!("Humanized text of {} chars", rewritten.chars().count());
            Ok(rewritten)
        }
        Err(e) => {
            error!("Humanizing rewrite failed: {}", e);
            Err(e)
        }
    }
}
