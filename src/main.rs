//! # Parking Finder
//!
//! LINE bot answering shared locations with the nearest parking lot and a
//! navigation link. Configures logging, the parking dataset source and the
//! webhook server.

#![recursion_limit = "256"]

pub mod api;
pub mod config;
pub mod consts;
pub mod metric;
pub mod models;
pub mod repo;
pub mod webhook;

use anyhow::Context;
use logfire::config::{MetricsOptions, SendToLogfire};
use ntex::web;
use openssl::ssl::{SslAcceptor, SslFiletype, SslMethod};

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration
    config::init_config()?;

    let app_config = config::APP_CONFIG
        .get()
        .context("failed to get app config")?;

    // Initialize logging and metrics
    let send_to_logfire = if app_config.logfire_token.is_empty() {
        SendToLogfire::No
    } else {
        SendToLogfire::Yes
    };
    let mut logfire_config = logfire::configure()
        .install_panic_handler()
        .with_metrics(Some(MetricsOptions::default()))
        .send_to_logfire(send_to_logfire);
    if !app_config.logfire_token.is_empty() {
        logfire_config = logfire_config.with_token(&app_config.logfire_token);
    }
    let shutdown_handler = logfire_config.finish()?;

    let catalog = build_catalog_source(app_config);
    let line_client = webhook::line::client::LineClient::new(
        app_config.line_channel_access_token.clone(),
    );

    configure_and_run_server(catalog, line_client).await?;

    shutdown_handler.shutdown()?;

    Ok(())
}

/// Parking dataset source shared by all workers.
///
/// Without caching every event reads the file again, so edits to the
/// dataset are picked up without a restart.
#[derive(Clone)]
enum CatalogSourceKind {
    File(repo::json_file::JsonFileCatalog),
    Cached(repo::cached::CachedCatalog),
}

impl CatalogSourceKind {
    fn boxed(self) -> repo::ImplCatalogSource {
        match self {
            CatalogSourceKind::File(source) => Box::new(source),
            CatalogSourceKind::Cached(source) => Box::new(source),
        }
    }
}

fn build_catalog_source(app_config: &config::AppConfig) -> CatalogSourceKind {
    let file_source = repo::json_file::JsonFileCatalog {
        path: app_config.parking_data_path(),
        timeout: app_config.catalog_load_timeout(),
    };

    tracing::info!(
        "parking data at {path}, cached={cached}",
        path = file_source.path.display(),
        cached = app_config.catalog_cache
    );

    if app_config.catalog_cache {
        return CatalogSourceKind::Cached(repo::cached::CachedCatalog::new(file_source));
    }
    CatalogSourceKind::File(file_source)
}

/// Configures SSL acceptor for production environments
fn setup_ssl_acceptor() -> anyhow::Result<openssl::ssl::SslAcceptorBuilder> {
    let mut ssl_acceptor = SslAcceptor::mozilla_intermediate(SslMethod::tls_server())
        .map_err(|e| anyhow::anyhow!("Failed to create SSL acceptor: {}", e))?;

    let app_config = config::APP_CONFIG
        .get()
        .context("failed to get app config")?;
    ssl_acceptor
        .set_private_key_file(&app_config.private_key_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load private key from {}: {}",
                app_config.private_key_path,
                e
            )
        })?;

    ssl_acceptor
        .set_certificate_file(&app_config.certificate_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load certificate from {}: {}",
                app_config.certificate_path,
                e
            )
        })?;

    Ok(ssl_acceptor)
}

/// Creates the per-worker application state
fn create_app_state(
    catalog: CatalogSourceKind,
    line_client: webhook::line::client::LineClient,
    channel_secret: String,
) -> webhook::AppState {
    webhook::AppState {
        catalog: catalog.boxed(),
        line_client: Box::new(line_client),
        channel_secret,
    }
}

/// Configures and starts the web server with appropriate SSL settings
async fn configure_and_run_server(
    catalog: CatalogSourceKind,
    line_client: webhook::line::client::LineClient,
) -> anyhow::Result<()> {
    let app_config = config::APP_CONFIG
        .get()
        .context("failed to get app config")?;
    let server_addr = (
        app_config.web_server_host.to_string(),
        app_config.web_server_port,
    );

    let server = web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state(
                catalog.clone(),
                line_client.clone(),
                app_config.line_channel_secret.clone(),
            ))
            .configure(webhook::routes::line)
    });

    let bound_server = if app_config.is_prod() {
        let ssl_acceptor = setup_ssl_acceptor()?;
        server.bind_openssl(server_addr, ssl_acceptor)?
    } else {
        server.bind(server_addr)?
    };

    bound_server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
