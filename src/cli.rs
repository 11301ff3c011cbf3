use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ai-chat")]
#[command(about = "Interactive chat against an OpenAI-compatible API", long_about = None)]
pub struct Args {
    #[arg(short = 'm', long = "model", help = "Model to use (default: gpt-4o-mini)")]
    pub model: Option<String>,

    #[arg(
        long = "api-endpoint",
        help = "Custom chat completions URL (e.g., http://localhost:11434/v1/chat/completions)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Print request details to stderr")]
    pub verbose: bool,
}
