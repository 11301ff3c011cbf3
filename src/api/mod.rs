pub mod client;
pub mod streaming;

use std::io::Write;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::RequestBody;

pub use client::HttpChatClient;

/// Boundary to the chat API. The HTTP implementation lives in
/// [`client`]; tests substitute their own.
#[async_trait]
pub trait ChatClient {
    /// Issue a non-streaming request and return the full response text.
    async fn complete(&self, request: &RequestBody) -> Result<String>;

    /// Issue a streaming request, writing each text fragment to `sink` as
    /// it arrives. The sink is flushed per fragment; no trailing newline is
    /// written.
    async fn stream(&self, request: &RequestBody, sink: &mut (dyn Write + Send)) -> Result<()>;
}
