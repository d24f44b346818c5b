mod clock;
mod config;
mod error;
mod navigator;
mod pages;
mod selection;
mod server;
mod session;
mod state;
mod stats;
mod submit;
mod types;
mod web;

#[cfg(test)]
mod tests;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.parse().unwrap_or_default()),
        )
        .with_target(false)
        .init();

    let port = config.http_port;

    tracing::info!(
        online_users = config.online_users,
        tick_ms = config.tick_millis,
        round_secs = clock::ROUND_SECONDS,
        port,
        "color-bet starting"
    );

    let app_state = state::AppState::new(config);
    let router = server::build_router(app_state.clone());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("HTTP server listening on 0.0.0.0:{port}");
    tracing::info!("open http://localhost:{port} in your browser");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
            }
        })
        .await?;

    let game = app_state.navigator.lock().unwrap().unmount();
    if let Some(game) = game {
        game.shutdown().await;
    }
    tracing::info!("color-bet stopped");

    Ok(())
}
