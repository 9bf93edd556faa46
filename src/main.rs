// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

use std::env;
use std::net::SocketAddr;

use devcircle_server::api::router;
use devcircle_server::auth::TokenService;
use devcircle_server::config::{
    DATA_DIR_ENV, JWT_SECRET_DEV_FALLBACK, JWT_SECRET_ENV, LOG_FORMAT_ENV,
};
use devcircle_server::providers::GithubClient;
use devcircle_server::state::AppState;
use devcircle_server::storage::{paths::DATA_ROOT, DocumentStore, StoragePaths};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let data_dir = env::var(DATA_DIR_ENV).unwrap_or_else(|_| DATA_ROOT.to_string());
    let mut store = DocumentStore::new(StoragePaths::new(&data_dir));
    store.initialize()?;

    let jwt_secret = env::var(JWT_SECRET_ENV).unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, falling back to the development secret");
        JWT_SECRET_DEV_FALLBACK.to_string()
    });
    let tokens = TokenService::new(&jwt_secret);

    let github = GithubClient::from_env()?;

    let app = router(AppState::new(store, tokens, github));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .unwrap_or(5000);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    tracing::info!(%addr, data_dir = %data_dir, "devcircle server listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if env::var(LOG_FORMAT_ENV).as_deref() == Ok("json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received, draining connections");
}
