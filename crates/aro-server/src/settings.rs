use aro_auth::AuthError;
use aro_auth::Crypto;
use aro_auth::Jar;
use aro_auth::Routes;
use aro_chat::OPENROUTER_MODEL;
use aro_chat::OPENROUTER_URL;
use aro_chat::OpenRouter;

/// Process configuration, read from flags or the environment.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "backend", about = "ArogyaSathi backend server")]
pub struct Settings {
    /// Socket address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8888")]
    pub bind: String,
    /// PostgreSQL connection string. Users and chats stay in memory without it.
    #[arg(long, env = "DB_URL")]
    pub db_url: Option<String>,
    /// HMAC secret for identity tokens.
    #[arg(long, env = "NEXTAUTH_SECRET", hide_env_values = true)]
    pub secret: String,
    /// Deployment environment; "production" marks cookies Secure.
    #[arg(long, env = "APP_ENV", default_value = "development")]
    pub app_env: String,
    /// Comma separated prefixes requiring a verified session.
    #[arg(long, env = "PROTECTED_ROUTES", value_delimiter = ',')]
    pub protected_routes: Option<Vec<String>>,
    /// Comma separated prefixes only served without a session.
    #[arg(long, env = "AUTH_ROUTES", value_delimiter = ',')]
    pub auth_routes: Option<Vec<String>>,
    #[arg(long, env = "SIGNIN_ROUTE", default_value = aro_core::SIGNIN_ROUTE)]
    pub signin_route: String,
    #[arg(long, env = "LANDING_ROUTE", default_value = aro_core::LANDING_ROUTE)]
    pub landing_route: String,
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true, default_value = "")]
    pub openrouter_key: String,
    #[arg(long, env = "OPENROUTER_URL", default_value = OPENROUTER_URL)]
    pub openrouter_url: String,
    #[arg(long, env = "OPENROUTER_MODEL", default_value = OPENROUTER_MODEL)]
    pub openrouter_model: String,
}

impl Settings {
    pub fn secure(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }
    pub fn jar(&self) -> Jar {
        Jar::new(self.secure())
    }
    pub fn crypto(&self) -> anyhow::Result<Crypto> {
        match self.secret.trim() {
            "" => anyhow::bail!("NEXTAUTH_SECRET must not be empty"),
            secret => Ok(Crypto::new(secret.as_bytes())),
        }
    }
    pub fn routes(&self) -> Result<Routes, AuthError> {
        let defaults = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let prefixes = |list: &Option<Vec<String>>, fallback: &[&str]| match list {
            Some(list) => list
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults(fallback),
        };
        Routes::new(
            prefixes(&self.auth_routes, aro_core::AUTH_ROUTES),
            prefixes(&self.protected_routes, aro_core::PROTECTED_ROUTES),
            self.signin_route.clone(),
            self.landing_route.clone(),
        )
    }
    pub fn completion(&self) -> OpenRouter {
        if self.openrouter_key.is_empty() {
            log::warn!("OPENROUTER_API_KEY not set, chat completions will be rejected upstream");
        }
        OpenRouter::new(
            self.openrouter_url.clone(),
            self.openrouter_model.clone(),
            self.openrouter_key.clone(),
        )
    }
}
