//! LangCompare server: validates the snippet catalog, then serves the Leptos
//! app with server-side rendering.

mod config;
mod routes;

use std::process::ExitCode;

use catalog::{Catalog, CatalogError};

use crate::config::{ConfigError, ServerConfig};

/// Reasons the server can fail to start.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("snippet catalog invalid: {0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Leptos(String),

    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "langcompare failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    // A missing .env is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }
    let config = ServerConfig::from_env()?;

    let catalog = Catalog::builtin()?;
    tracing::info!(
        examples = catalog.len(),
        categories = catalog.categories().len(),
        languages = catalog.languages().len(),
        "snippet catalog loaded"
    );

    let app = routes::app().map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(host = %config.host, port = config.port, "langcompare listening");
    axum::serve(listener, app).await?;
    Ok(())
}
