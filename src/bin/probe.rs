use std::io;
use std::process;

use colored::*;

use llm_probe::api::HttpChatClient;
use llm_probe::config::Config;
use llm_probe::probe::{probe_non_streaming, probe_streaming};

const STREAMING_PROMPT: &str = "Streaming test. Hello!";
const NON_STREAMING_PROMPT: &str = "Non-streaming test. Good evening!";

/// End-to-end connectivity check: one streaming and one non-streaming
/// request with fixed prompts. API errors are reported but never fatal.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let client = HttpChatClient::new(&config.api_key, &config.api_endpoint)?;
    let mut stdout = io::stdout();

    probe_streaming(&client, &config.model, STREAMING_PROMPT, &mut stdout).await?;
    println!();
    probe_non_streaming(&client, &config.model, NON_STREAMING_PROMPT, &mut stdout).await?;

    println!(
        "{}",
        "If you can read model output above, the API connection is working.".dimmed()
    );

    Ok(())
}
