use std::io::{BufRead, Write};

use colored::*;

use crate::api::ChatClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::RequestBody;

const EXIT_SENTINELS: [&str; 3] = ["exit", "quit", "q"];

fn is_exit(input: &str) -> bool {
    EXIT_SENTINELS
        .iter()
        .any(|sentinel| input.eq_ignore_ascii_case(sentinel))
}

/// The interactive read loop. Each turn reads one line, streams the reply
/// to `output`, and writes one newline to separate turns. API errors are
/// printed and the loop keeps going; only the exit sentinel or the end of
/// the input stream ends the session.
pub async fn run_chat_loop<R, W, C>(
    mut input: R,
    output: &mut W,
    client: &C,
    config: &Config,
) -> Result<()>
where
    R: BufRead,
    W: Write + Send,
    C: ChatClient + ?Sized,
{
    let mut line = String::new();

    loop {
        write!(output, "you: ")?;
        output.flush()?;

        line.clear();
        match input.read_line(&mut line) {
            // EOF and a broken stdin both end the session like an exit.
            Ok(0) | Err(_) => {
                writeln!(output)?;
                return Ok(());
            }
            Ok(_) => {}
        }

        let prompt = line.trim();
        if is_exit(prompt) {
            return Ok(());
        }

        let request = RequestBody::user_prompt(&config.model, prompt, true);
        match client.stream(&request, output).await {
            Ok(()) => writeln!(output)?,
            Err(e) => writeln!(output, "{}", e.to_string().red())?,
        }
    }
}
