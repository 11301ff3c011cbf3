use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Clone)]
pub struct RequestBody {
    pub model: String,
    pub messages: Vec<Message>,
    pub stream: bool,
}

impl RequestBody {
    /// A single-turn request: one user message, no history.
    pub fn user_prompt(model: &str, prompt: &str, stream: bool) -> Self {
        RequestBody {
            model: model.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream,
        }
    }
}

// Streaming chunk shape. Every field is optional: a chunk that carries no
// visible text is skipped, not rejected.
#[derive(Deserialize)]
pub struct StreamResponse {
    pub choices: Option<Vec<StreamChoice>>,
}

#[derive(Deserialize)]
pub struct StreamChoice {
    pub delta: Option<Delta>,
}

#[derive(Deserialize)]
pub struct Delta {
    pub content: Option<String>,
}

// Non-streaming response shape.
#[derive(Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ResponseChoice>,
}

#[derive(Deserialize)]
pub struct ResponseChoice {
    pub message: ResponseMessage,
}

#[derive(Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, if the model returned any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}
