/// stylecraft - writing-style analysis and imitation on top of a chat-completion API.
///
/// The crate assembles prompts for three operations and sends each one to a
/// DeepSeek-compatible `/chat/completions` endpoint:
/// 1. Style analysis: describe the style of a source text as a JSON object
/// 2. Mimic generation: write a new article on given keywords in that style
/// 3. Humanizing rewrite: rework generated text so it reads like a human draft
///
/// # Architecture
///
/// - `ai::client` performs the single HTTP call per operation (reqwest)
/// - `ai::extract` pulls the JSON payload out of the model's answer
/// - `features` composes prompts, the client and the extractor
/// - `core::config` reads the API key and endpoint from the environment
///
/// # Example
///
/// ```no_run
/// use stylecraft::ai::LlmClient;
/// use stylecraft::core::config::AppConfig;
/// use stylecraft::features::{analyze_style, generate_mimic_text, humanize_text};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     stylecraft::setup_logging();
///
///     let config = AppConfig {
///         api_key: "dummy_key".to_string(),
///         api_url: None,
///         model: None,
///     };
///     let client = LlmClient::from_config(&config);
///
///     let style = analyze_style(&client, "窗外的雨下了一整夜。").await?;
///     let draft = generate_mimic_text(&client, &style, "秋天, 故乡").await?;
///     let final_text = humanize_text(&client, &draft).await?;
///     println!("{final_text}");
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;

pub use errors::StyleError;

/// Configure structured logging with JSON format.
///
/// Safe to call more than once; only the first call installs the subscriber.
///
/// # Example
///
/// ```
/// stylecraft::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
