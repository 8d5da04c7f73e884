use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sampling temperature sent with every completion request.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Upper bound on generated tokens sent with every completion request.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Style features reported by the model.
///
/// The shape is whatever the model returned; only JSON well-formedness is
/// checked before it is handed back to the caller.
pub type StyleDescriptor = Map<String, Value>;

/// Everything produced by one analyze → mimic → humanize run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub style: StyleDescriptor,
    pub mimic_text: String,
    pub humanized_text: String,
}
