use serde::Serialize;
use tracing::{error, info};

use crate::ai::LlmClient;
use crate::errors::StyleError;
use crate::prompt::build_mimic_prompt;

/// Write a new article about `keywords` in the style described by `style`.
///
/// `style` is usually the descriptor returned by
/// [`analyze_style`](crate::features::analyze::analyze_style), but any
/// serializable value is accepted and sent as compact JSON.
pub async fn generate_mimic_text<S>(
    client: &LlmClient,
    style: &S,
    keywords: &str,
) -> Result<String, StyleError>
where
    S: Serialize + ?Sized,
{
    let result = async {
        let style_json = serde_json::to_string(style)?;
        let prompt = build_mimic_prompt(&style_json, keywords);
        let response_text = client.complete(&prompt, None).await?;
        Ok::<_, StyleError>(response_text.trim().to_string())
    }
    .await;

    match &result {
        Ok(text) => info!("Generated mimic text of {} chars", text.chars().count()),
        Err(e) => error!("Mimic text generation failed: {}", e),
    }

    result
}
