//! Arena agent HTTP service.
//!
//! `GET` on any path answers with a greeting; `POST` on any path takes the
//! arena's JSON update and answers with one action symbol (`F`, `L`, `R`,
//! `T`) as plain text.

mod config;
mod handlers;
mod response;

use actix_web::{App, HttpServer, middleware, web};
use arena_ai::TacticalPolicy;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        workers = ?config.workers,
        max_body_bytes = config.max_body_bytes,
        scan_range = config.engine.scan_range,
        "starting arena server"
    );

    let policy = web::Data::new(TacticalPolicy::new(config.engine));
    let max_body_bytes = config.max_body_bytes;

    let mut server = HttpServer::new(move || {
        let policy = policy.clone();
        App::new()
            .wrap(middleware::Logger::default())
            .configure(|cfg| handlers::configure(cfg, policy, max_body_bytes))
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind((config.host.as_str(), config.port))?.run().await?;

    tracing::info!("arena server stopped");
    Ok(())
}
