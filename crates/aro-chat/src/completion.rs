use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Default OpenAI-compatible endpoint.
pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1";
/// Default model served through the endpoint.
pub const OPENROUTER_MODEL: &str = "mistralai/mistral-small-3.2-24b-instruct:free";

/// Fixed framing placed ahead of the member's question.
const PREAMBLE: &str = "\
You are answering as a licensed healthcare professional. \
Reply briefly and calmly, give clear advice with next steps \
(home care, when to see a doctor, emergency warning signs), \
avoid unnecessary questions, and close with a short note that \
this is not a substitute for professional medical care.

User input:
";

/// Source of assistant replies.
#[allow(async_fn_in_trait)]
pub trait Completion {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError>;
}

/// Chat completions over an OpenAI-compatible HTTP API.
pub struct OpenRouter {
    client: reqwest::Client,
    url: String,
    model: String,
    key: String,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Reply,
}

#[derive(Deserialize)]
struct Reply {
    content: Option<String>,
}

impl OpenRouter {
    pub fn new(url: String, model: String, key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            model,
            key,
        }
    }
    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.url.trim_end_matches('/'))
    }
    fn request(&self, prompt: &str) -> CompletionRequest<'_> {
        CompletionRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content: format!("{}{}", PREAMBLE, prompt),
            }],
        }
    }
}

impl Completion for OpenRouter {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.key)
            .json(&self.request(prompt))
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ChatError::Upstream(status.as_u16(), body));
        }
        let body: CompletionResponse = resp.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ChatError::Empty)
    }
}
