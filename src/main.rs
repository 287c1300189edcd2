mod config;
mod db;
mod entities;
mod error;
mod flash;
mod links;
mod models;
mod queries;
mod routes;
mod templates;

use std::sync::Arc;

use axum_extra::extract::cookie::Key;

use crate::{config::Config, queries::Catalog};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub key: Key,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,wmdb=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;
    let key = config.cookie_key()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let state = Arc::new(AppState { catalog: Catalog::new(db), key });

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
