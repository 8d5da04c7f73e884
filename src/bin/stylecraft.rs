use std::io::Read;

use anyhow::{Context, bail};
use stylecraft::ai::LlmClient;
use stylecraft::core::config::AppConfig;
use stylecraft::features::{analyze_style, run_pipeline};
use tracing::{error, info};

const USAGE: &str = "usage: stylecraft [--analyze-only] <keywords...> < source.txt";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    analyze_only: bool,
    keywords: String,
    help: bool,
}

/// Parses command-line arguments (without the program name).
fn parse_args<I>(args: I) -> anyhow::Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut analyze_only = false;
    let mut help = false;
    let mut keywords: Vec<String> = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--analyze-only" => analyze_only = true,
            "-h" | "--help" => help = true,
            _ => keywords.push(arg),
        }
    }

    let keywords = keywords.join(" ");
    if !help && !analyze_only && keywords.trim().is_empty() {
        bail!("{USAGE}");
    }

    Ok(Args {
        analyze_only,
        keywords,
        help,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stylecraft::setup_logging();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = AppConfig::from_env().inspect_err(|e| error!("Config error: {}", e))?;

    let mut source_text = String::new();
    std::io::stdin()
        .read_to_string(&mut source_text)
        .context("Failed to read source text from stdin")?;
    if source_text.trim().is_empty() {
        bail!("No source text on stdin. {USAGE}");
    }

    let client = LlmClient::from_config(&config);
    info!("Using model {}", client.model_name());

    let output = if args.analyze_only {
        serde_json::to_string_pretty(&analyze_style(&client, &source_text).await?)?
    } else {
        serde_json::to_string_pretty(&run_pipeline(&client, &source_text, &args.keywords).await?)?
    };

    println!("{output}");
    Ok(())
}
