use std::io::Write;

use colored::*;

use crate::api::ChatClient;
use crate::error::Result;
use crate::models::RequestBody;

/// Streaming connectivity probe: fragments are written to `out` as they
/// arrive, with no trailing newline. API failures are printed, not returned;
/// the only error this surfaces is a failure to write to `out` itself.
pub async fn probe_streaming<C>(
    client: &C,
    model: &str,
    prompt: &str,
    out: &mut (dyn Write + Send),
) -> Result<()>
where
    C: ChatClient + ?Sized,
{
    let request = RequestBody::user_prompt(model, prompt, true);
    if let Err(e) = client.stream(&request, out).await {
        writeln!(out, "{}", e.to_string().red())?;
    }
    Ok(())
}

/// Non-streaming connectivity probe: the full response text is written to
/// `out` as one line. Same error containment as [`probe_streaming`].
pub async fn probe_non_streaming<C>(
    client: &C,
    model: &str,
    prompt: &str,
    out: &mut (dyn Write + Send),
) -> Result<()>
where
    C: ChatClient + ?Sized,
{
    let request = RequestBody::user_prompt(model, prompt, false);
    match client.complete(&request).await {
        Ok(text) => writeln!(out, "{}", text)?,
        Err(e) => writeln!(out, "{}", e.to_string().red())?,
    }
    Ok(())
}
