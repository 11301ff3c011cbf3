use std::env;
use std::process;

use colored::*;

use llm_probe::config::{validate_key, API_KEY_VAR};

/// Checks that the API credential is present in the environment. Performs
/// no network I/O. The key value is only echoed with --show-key.
fn main() {
    let show_key = env::args().skip(1).any(|arg| arg == "--show-key");

    match validate_key(API_KEY_VAR, env::var(API_KEY_VAR).ok()) {
        Ok(key) => {
            if show_key {
                println!("{}", format!("{} is set: {}", API_KEY_VAR, key).green());
            } else {
                println!("{}", format!("{} is set.", API_KEY_VAR).green());
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    }
}
