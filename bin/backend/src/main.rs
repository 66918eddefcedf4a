//! ArogyaSathi Backend Binary
//!
//! Serves the gated pages plus the auth and chat APIs.
//! Runs on BIND_ADDR (default 0.0.0.0:8888); requires NEXTAUTH_SECRET.

use clap::Parser;

#[tokio::main]
async fn main() {
    let settings = aro_server::Settings::parse();
    aro_core::log();
    aro_core::kys();
    if let Err(e) = aro_server::run(settings).await {
        log::error!("server stopped: {:#}", e);
        std::process::exit(1);
    }
}
