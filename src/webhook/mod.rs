//! Webhook handlers for the messaging platform integration
//!
//! ## Modules
//!
//! - [`line`] - LINE Messaging API webhook handlers
//! - [`errors`] - Error responses of the webhook endpoint
//! - [`routes`] - Route configuration

pub mod errors;
pub mod line;
pub mod routes;

use crate::repo;

/// State shared by the webhook handlers of a worker.
pub struct AppState {
    pub catalog: repo::ImplCatalogSource,
    pub line_client: line::client::ImplLineMessenger,
    /// 🔒 SENSITIVE: used to verify request signatures
    pub channel_secret: String,
}
