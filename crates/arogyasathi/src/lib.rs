//! Healthcare assistant backend.
//!
//! This facade crate re-exports all public aro crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Identifiers, session parameters, and route defaults
//! - [`pg`] — PostgreSQL connectivity and schema installation
//! - [`auth`] — Tokens, cookies, the route gate, and member endpoints
//! - [`chat`] — Completions and chat transcripts
//! - [`server`] — Unified backend

pub use aro_core   as core;
pub use aro_pg     as pg;
pub use aro_auth   as auth;
pub use aro_chat   as chat;
pub use aro_server as server;
