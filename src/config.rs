use std::env;

use crate::cli::Args;
use crate::error::{ProbeError, Result};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

pub struct Config {
    pub api_key: String,
    pub api_endpoint: String,
    pub model: String,
    pub verbose: bool,
}

impl Config {
    /// Configuration for the chat binary: CLI argument wins over environment
    /// variable, which wins over the built-in default.
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let api_key = validate_key(API_KEY_VAR, env::var(API_KEY_VAR).ok())?;

        let model = args
            .model
            .clone()
            .or_else(|| env::var("AI_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| env::var("AI_API_ENDPOINT").ok())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(Config {
            api_key,
            api_endpoint,
            model,
            verbose: args.verbose,
        })
    }

    /// Environment-only configuration, used by the probe binary.
    pub fn from_env() -> Result<Self> {
        let api_key = validate_key(API_KEY_VAR, env::var(API_KEY_VAR).ok())?;

        Ok(Config {
            api_key,
            api_endpoint: env::var("AI_API_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            model: env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            verbose: false,
        })
    }
}

/// Presence check for the credential. Unset and empty are the same failure;
/// the value itself is opaque and never inspected further.
pub fn validate_key(var: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(ProbeError::MissingCredential(var.to_string())),
    }
}
