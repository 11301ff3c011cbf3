use std::io;
use std::process;

use clap::Parser;
use colored::*;

use llm_probe::api::HttpChatClient;
use llm_probe::chat::run_chat_loop;
use llm_probe::cli::Args;
use llm_probe::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    if config.verbose {
        eprintln!("{}", format!("[ai-chat] Using model: {}", config.model).dimmed());
        eprintln!(
            "{}",
            format!("[ai-chat] Endpoint: {}", config.api_endpoint).dimmed()
        );
        eprintln!("{}", "[ai-chat] Type exit, quit or q to leave.".dimmed());
    }

    let client = HttpChatClient::new(&config.api_key, &config.api_endpoint)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_chat_loop(stdin.lock(), &mut stdout, &client, &config).await?;

    Ok(())
}
