use crate::models::StreamResponse;

/// One server-sent event worth acting on.
#[derive(Debug, PartialEq)]
pub enum SseEvent {
    /// A `data:` payload (JSON chunk, unparsed).
    Data(String),
    /// The `data: [DONE]` terminator.
    Done,
}

/// Reassembles SSE lines from arbitrarily split byte chunks. Network reads
/// can cut a line anywhere, so incoming text is held until a newline lands.
#[derive(Default)]
pub struct SseBuffer {
    pending: String,
}

impl SseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk of decoded bytes; returns the events completed by it.
    pub fn push(&mut self, chunk: &str) -> Vec<SseEvent> {
        self.pending.push_str(chunk);

        let mut events = Vec::new();
        while let Some(newline_pos) = self.pending.find('\n') {
            let line = self.pending[..newline_pos].trim_end_matches('\r').to_string();
            self.pending = self.pending[newline_pos + 1..].to_string();

            // Blank keep-alives and comment lines carry nothing.
            if line.is_empty() || line.starts_with(':') {
                continue;
            }

            if let Some(colon_pos) = line.find(':') {
                let field = line[..colon_pos].trim();
                let value = line[colon_pos + 1..].trim_start();

                if field == "data" {
                    if value == "[DONE]" {
                        events.push(SseEvent::Done);
                    } else {
                        events.push(SseEvent::Data(value.to_string()));
                    }
                }
                // "event", "id", "retry" and unknown fields are ignored.
            }
        }

        events
    }
}

/// Extract the visible text of a streamed chunk payload, if any. Malformed
/// JSON and chunks without `delta.content` both yield `None`.
pub fn delta_content(payload: &str) -> Option<String> {
    let parsed: StreamResponse = serde_json::from_str(payload).ok()?;
    parsed
        .choices?
        .into_iter()
        .next()?
        .delta?
        .content
        .filter(|content| !content.is_empty())
}
