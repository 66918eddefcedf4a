//! ArogyaSathi Backend Server
//!
//! Assembles the route gate, authentication endpoints, and chat endpoints
//! into a single actix-web server. Users and chats live in PostgreSQL when
//! `DB_URL` is configured and in process memory otherwise.
//!
//! ## Submodules
//!
//! - [`settings`] — Flags and environment configuration
//! - [`pages`] — Placeholder page routes guarded by the gate

pub mod pages;
pub mod settings;

pub use settings::Settings;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::middleware::from_fn;
use actix_web::web;
use aro_auth::Credentials;
use aro_auth::Gate;
use aro_auth::Member;
use aro_auth::Memory;
use aro_chat::Chat;
use aro_chat::Completion;
use aro_chat::OpenRouter;
use aro_chat::Transcript;
use aro_chat::Transcripts;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health(client: Option<web::Data<Arc<Client>>>) -> impl Responder {
    let Some(client) = client else {
        return HttpResponse::Ok().body("ok");
    };
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// Registers every route against user store `S`, transcript store `T`,
/// and completion backend `C`. Shared state is expected in app data.
#[rustfmt::skip]
pub fn configure<S, T, C>(cfg: &mut web::ServiceConfig)
where
    S: Credentials + 'static,
    T: Transcript + 'static,
    C: Completion + 'static,
{
    cfg.route("/health", web::get().to(health))
        .service(
            web::scope("/api/auth")
                .route("/sign-up", web::post().to(aro_auth::signup::<S>))
                .route("/sign-in", web::post().to(aro_auth::signin::<S>))
                .route("/sign-out", web::post().to(aro_auth::signout)),
        )
        .service(
            web::scope("/api/user")
                .route("/get-user", web::get().to(aro_auth::me::<S>)),
        )
        .service(
            web::scope("/api/chats")
                .route("", web::get().to(aro_chat::history::<T>))
                .route("/chat", web::post().to(aro_chat::chat::<C, T>)),
        )
        .configure(pages::configure);
}

pub async fn run(settings: Settings) -> anyhow::Result<()> {
    match settings.db_url.as_deref() {
        Some(url) => {
            let client = aro_pg::db(url).await?;
            aro_pg::install::<Member>(&client).await?;
            aro_pg::install::<Chat>(&client).await?;
            log::info!("schema ready");
            let store = web::Data::new(client);
            serve(&settings, store.clone(), store).await
        }
        None => {
            log::warn!("DB_URL not set, users and chats are kept in memory");
            let users = web::Data::new(Memory::default());
            let chats = web::Data::new(Transcripts::default());
            serve(&settings, users, chats).await
        }
    }
}

#[rustfmt::skip]
async fn serve<S, T>(settings: &Settings, users: web::Data<S>, chats: web::Data<T>) -> anyhow::Result<()>
where
    S: Credentials + Send + Sync + 'static,
    T: Transcript + Send + Sync + 'static,
{
    let crypto = settings.crypto()?;
    let jar = settings.jar();
    let gate = web::Data::new(Gate::new(crypto.clone(), settings.routes()?, jar));
    let crypto = web::Data::new(crypto);
    let jar = web::Data::new(jar);
    let llm = web::Data::new(settings.completion());
    log::info!("starting server on {}", settings.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(aro_auth::gatekeeper))
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(gate.clone())
            .app_data(crypto.clone())
            .app_data(jar.clone())
            .app_data(llm.clone())
            .app_data(users.clone())
            .app_data(chats.clone())
            .configure(configure::<S, T, OpenRouter>)
    })
    .workers(6)
    .bind(settings.bind.as_str())?
    .run()
    .await?;
    Ok(())
}
