/// Failures while obtaining an assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    Request(String),
    Upstream(u16, String),
    Empty,
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(s) => write!(f, "completion request failed: {}", s),
            Self::Upstream(code, s) => write!(f, "completion endpoint returned {}: {}", code, s),
            Self::Empty => write!(f, "failed to generate ai response"),
        }
    }
}

impl std::error::Error for ChatError {}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e.to_string())
    }
}
