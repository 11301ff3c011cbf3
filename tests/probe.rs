use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use llm_probe::api::ChatClient;
use llm_probe::error::{ProbeError, Result};
use llm_probe::models::RequestBody;
use llm_probe::probe::{probe_non_streaming, probe_streaming};

struct MockClient {
    fragments: Vec<&'static str>,
    reply: &'static str,
    expected_prompt: Option<&'static str>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockClient {
    fn replying(reply: &'static str) -> Self {
        MockClient {
            fragments: vec![],
            reply,
            expected_prompt: None,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn streaming(fragments: Vec<&'static str>) -> Self {
        MockClient {
            fragments,
            reply: "",
            expected_prompt: None,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        MockClient {
            fail: true,
            ..MockClient::replying("")
        }
    }
}

#[async_trait]
impl ChatClient for MockClient {
    async fn complete(&self, request: &RequestBody) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProbeError::Api("quota exceeded".to_string()));
        }
        if let Some(expected) = self.expected_prompt {
            assert_eq!(request.messages[0].content, expected);
        }
        Ok(self.reply.to_string())
    }

    async fn stream(&self, _request: &RequestBody, sink: &mut (dyn Write + Send)) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProbeError::Api("connection reset".to_string()));
        }
        for fragment in &self.fragments {
            write!(sink, "{}", fragment)?;
            sink.flush()?;
        }
        Ok(())
    }
}

#[tokio::test]
async fn non_streaming_probe_prints_full_response() {
    let client = MockClient {
        expected_prompt: Some("Hi"),
        ..MockClient::replying("Hello!")
    };
    let mut out = Vec::new();

    probe_non_streaming(&client, "gpt-4o-mini", "Hi", &mut out)
        .await
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Hello!\n");
}

#[tokio::test]
async fn non_streaming_probe_is_idempotent() {
    let client = MockClient::replying("same answer");

    let mut first = Vec::new();
    probe_non_streaming(&client, "gpt-4o-mini", "Hi", &mut first)
        .await
        .unwrap();

    let mut second = Vec::new();
    probe_non_streaming(&client, "gpt-4o-mini", "Hi", &mut second)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(client.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn streaming_probe_concatenates_fragments() {
    let client = MockClient::streaming(vec!["Hel", "lo", "", " there"]);
    let mut out = Vec::new();

    probe_streaming(&client, "gpt-4o-mini", "Hi", &mut out)
        .await
        .unwrap();

    // The empty fragment contributes nothing; no trailing newline is added.
    assert_eq!(String::from_utf8(out).unwrap(), "Hello there");
}

#[tokio::test]
async fn probe_errors_are_contained() {
    let client = MockClient::failing();
    let mut out = Vec::new();

    probe_streaming(&client, "gpt-4o-mini", "Hi", &mut out)
        .await
        .unwrap();
    probe_non_streaming(&client, "gpt-4o-mini", "Hi", &mut out)
        .await
        .unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("API error: connection reset"));
    assert!(printed.contains("API error: quota exceeded"));
}
