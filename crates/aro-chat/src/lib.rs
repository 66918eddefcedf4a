//! Health assistant chat.
//!
//! Relays a signed-in member's question to an OpenAI-compatible completion
//! endpoint and keeps the exchange.
//!
//! - [`Chat`] — One prompt/response exchange
//! - [`Completion`] — Source of assistant replies ([`OpenRouter`] over HTTP)
//! - [`Transcript`] — Chat history store (in-memory [`Transcripts`], PostgreSQL with `database`)
mod chat;
mod completion;
mod dto;
mod error;
mod handlers;
mod transcript;

pub use chat::*;
pub use completion::*;
pub use dto::*;
pub use error::*;
pub use handlers::*;
pub use transcript::*;
