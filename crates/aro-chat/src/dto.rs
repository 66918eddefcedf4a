use super::*;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub chat: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    pub message: String,
    pub prompt: String,
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatEntry {
    pub prompt: String,
    pub response: String,
    /// Unix seconds.
    pub created_at: u64,
}

impl From<&Chat> for ChatEntry {
    fn from(chat: &Chat) -> Self {
        Self {
            prompt: chat.prompt().to_string(),
            response: chat.response().to_string(),
            created_at: chat
                .created_at()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
        }
    }
}
