use anyhow::Context;
use dotenvy::dotenv;
use ecole::bootstrap::bootstrap_database;
use ecole::router::init_router;
use ecole::state::AppState;
use ecole_config::ServerConfig;
use ecole_db::init_db_pool;
use ecole_observability::init_logging;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let db = init_db_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    bootstrap_database(&db)
        .await
        .context("Failed to bootstrap database")?;

    let state = AppState::from_env(db);
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server_config.addr())
        .await
        .with_context(|| format!("Failed to bind port {}", server_config.port))?;

    info!(port = server_config.port, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT"),
        () = terminate => info!("received SIGTERM"),
    }
}
