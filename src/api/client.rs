use std::io::Write;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::api::streaming::{delta_content, SseBuffer, SseEvent};
use crate::api::ChatClient;
use crate::error::{ProbeError, Result};
use crate::models::{ChatResponse, RequestBody};

/// Chat API client over reqwest. Configured once at startup and read-only
/// afterwards; no timeout is set beyond the transport defaults.
pub struct HttpChatClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpChatClient {
    pub fn new(api_key: &str, endpoint: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| ProbeError::Api(format!("invalid authorization header: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(HttpChatClient {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    async fn dispatch(&self, request: &RequestBody) -> Result<reqwest::Response> {
        let response = self.http.post(&self.endpoint).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProbeError::Api(format!("HTTP {}: {}", status, body)));
        }

        Ok(response)
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn complete(&self, request: &RequestBody) -> Result<String> {
        let response = self.dispatch(request).await?;
        let parsed: ChatResponse = response.json().await?;
        Ok(parsed.first_content().unwrap_or_default().to_string())
    }

    async fn stream(&self, request: &RequestBody, sink: &mut (dyn Write + Send)) -> Result<()> {
        let response = self.dispatch(request).await?;

        let mut byte_stream = response.bytes_stream();
        let mut buffer = SseBuffer::new();

        while let Some(chunk) = byte_stream.next().await {
            let chunk = chunk?;
            for event in buffer.push(&String::from_utf8_lossy(&chunk)) {
                match event {
                    SseEvent::Done => {
                        sink.flush()?;
                        return Ok(());
                    }
                    SseEvent::Data(payload) => {
                        if let Some(text) = delta_content(&payload) {
                            write!(sink, "{}", text)?;
                            sink.flush()?;
                        }
                    }
                }
            }
        }

        // Stream closed without [DONE]; whatever arrived has been written.
        sink.flush()?;
        Ok(())
    }
}
