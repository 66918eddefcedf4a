//! Session authentication and route protection.
//!
//! JWT identity tokens with Argon2 password hashing, carried in an
//! httpOnly session cookie and enforced per request by a route gate.
//!
//! ## Identity
//!
//! - [`Member`] — Registered user record
//! - [`Credentials`] — Credential store (in-memory [`Memory`], PostgreSQL with `database`)
//! - [`password`] — Argon2 hashing and verification
//!
//! ## Tokens and Cookies
//!
//! - [`Claims`] — JWT payload structure
//! - [`Crypto`] — Token issuance and verification under one secret
//! - [`Jar`] — Session cookie attach/clear
//!
//! ## Gating
//!
//! - [`Routes`] — Path classification into public, auth-only, protected
//! - [`Gate`] — Per-request allow/redirect decision
//! - [`gatekeeper`] — actix middleware running the gate
//! - [`Auth`] — Extractor for verified callers
mod claims;
mod crypto;
mod dto;
mod error;
mod gate;
mod handlers;
mod jar;
mod memory;
mod member;
mod middleware;
pub mod password;
mod repository;
mod routes;

pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use error::*;
pub use gate::*;
pub use handlers::*;
pub use jar::*;
pub use memory::*;
pub use member::*;
pub use middleware::*;
pub use repository::*;
pub use routes::*;
