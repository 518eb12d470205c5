//! Serve command - static server for the built site

use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;

use crate::{config::Config, routes::create_router};

/// Run the serve command.
pub async fn run(config: &Config) -> Result<()> {
    let addr = config.server.addr();
    tracing::info!(
        %addr,
        site_root = %config.server.site_root.display(),
        "Starting server"
    );

    if !config.server.index_path().exists() {
        tracing::warn!(
            index = %config.server.index_path().display(),
            "index page missing; build the frontend first"
        );
    }

    let app = create_router(&config.server);
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  {} running at http://{addr}", config.site.title);
    println!("  Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {e}");
    }
}
