use tracing::info;

use crate::ai::LlmClient;
use crate::core::models::PipelineOutput;
use crate::errors::StyleError;

use super::{analyze_style, generate_mimic_text, humanize_text};

/// Analyze `source_text`, write a mimic article about `keywords`, then
/// humanize it. The first failing stage aborts the run.
pub async fn run_pipeline(
    client: &LlmClient,
    source_text: &str,
    keywords: &str,
) -> Result<PipelineOutput, StyleError> {
    info!("Pipeline stage 1/3: analyzing style");
    let style = analyze_style(client, source_text).await?;

    info!("Pipeline stage 2/3: generating mimic text");
    let mimic_text = generate_mimic_text(client, &style, keywords).await?;

    info!("Pipeline stage 3/3: humanizing");
    let humanized_text = humanize_text(client, &mimic_text).await?;

    Ok(PipelineOutput {
        style,
        mimic_text,
        humanized_text,
    })
}
