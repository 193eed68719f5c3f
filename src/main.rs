use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_api::{
    config::Config, db::driver::Db, handlers::TodoHandler, repository::SledTodoRepo, routes,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let db = Db::open(&config.db_path)
        .with_context(|| format!("could not open database at {}", config.db_path))?;
    let handler = TodoHandler::new(SledTodoRepo::new(db.clone()));
    let app = routes::router(handler);

    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, db = %config.db_path, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.flush()?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
