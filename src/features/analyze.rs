use serde_json::Value;
use tracing::{error, info};

use crate::ai::{LlmClient, extract_json};
use crate::core::models::StyleDescriptor;
use crate::errors::StyleError;
use crate::prompt::build_style_analysis_prompt;

/// Ask the model to describe the writing style of `text`.
///
/// The model's answer is run through the JSON extractor; the result must be a
/// JSON object but is otherwise passed through unchecked.
pub async fn analyze_style(client: &LlmClient, text: &str) -> Result<StyleDescriptor, StyleError> {
    let result = async {
        let prompt = build_style_analysis_prompt(text);
        let response_text = client.complete(&prompt, None).await?;

        match extract_json(&response_text)? {
            Value::Object(map) => Ok::<_, StyleError>(map),
            other => Err(StyleError::JsonParse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
    .await;

    match &result {
        Ok(style) => info!("Style analysis returned {} top-level fields", style.len()),
        Err(e) => error!("Style analysis failed: {}", e),
    }

    result
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
