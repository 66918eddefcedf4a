//! Core identifiers, traits, and constants for arogyasathi.
//!
//! This crate provides the foundational types and configuration defaults
//! shared by the auth, chat, and server crates.
#![allow(dead_code)]

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and fuzzing loops.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> TryFrom<&str> for ID<T> {
    type Error = uuid::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        uuid::Uuid::parse_str(s).map(Self::from)
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Arbitrary for ID<T> {
    fn random() -> Self {
        Self::from(uuid::Uuid::new_v4())
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Name of the cookie carrying the identity token.
pub const COOKIE: &str = "arogyasathi-authentication";
/// Lifetime of tokens minted at sign-in.
pub const SESSION_DURATION: std::time::Duration = std::time::Duration::from_secs(7 * 24 * 60 * 60);

// ============================================================================
// ROUTE TABLE DEFAULTS
// Prefix lists must stay disjoint; the gate refuses overlapping tables.
// ============================================================================
/// Where unauthenticated visitors of protected pages are sent.
pub const SIGNIN_ROUTE: &str = "/auth/sign-in";
/// Where authenticated visitors of auth-only pages are sent.
pub const LANDING_ROUTE: &str = "/chatbot";
/// Pages only meaningful without a session.
pub const AUTH_ROUTES: &[&str] = &["/auth/sign-in"];
/// Pages requiring a verified session.
pub const PROTECTED_ROUTES: &[&str] = &[
    "/chatbot",
    "/emergency",
    "/reports",
    "/user-profile",
    "/womens-health",
];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory receiving one log file per backend run.
#[cfg(feature = "server")]
const LOG_DIR: &str = "logs";

/// Terminal gets INFO and up; `logs/backend-<unix secs>.log` gets DEBUG,
/// which is where the gate records why a token was rejected. Driver
/// chatter from `tokio_postgres` and `rustls` is kept out of both.
#[cfg(feature = "server")]
pub fn log() {
    use simplelog::ColorChoice;
    use simplelog::CombinedLogger;
    use simplelog::ConfigBuilder;
    use simplelog::TermLogger;
    use simplelog::TerminalMode;
    use simplelog::WriteLogger;
    let config = ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .add_filter_ignore_str("tokio_postgres")
        .add_filter_ignore_str("rustls")
        .build();
    let started = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let path = format!("{}/backend-{}.log", LOG_DIR, started);
    std::fs::create_dir_all(LOG_DIR).expect("create log directory");
    let file = std::fs::File::create(&path).expect("create log file");
    CombinedLogger::init(vec![
        TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(log::LevelFilter::Debug, config, file),
    ])
    .expect("install logger");
    log::info!("logging to {}", path);
}

/// Exit at once on Ctrl+C. Requests in flight are dropped.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("ctrl-c, stopping backend");
            std::process::exit(0);
        }
    });
}
