//! LINE webhook integration module
//!
//! ## Submodules
//!
//! - [`client`] - LINE API client for replying to events
//! - [`handler`] - Dispatches webhook events to the parking lookup
//! - [`outgoing_schemas`] - Request bodies sent to the LINE API
//! - [`routes`] - HTTP endpoint handler (includes signature verification)
//! - [`schemas`] - Data structures for LINE webhook payloads
//! - [`security`] - `X-Line-Signature` verification

pub mod client;
pub mod handler;
pub mod outgoing_schemas;
pub mod routes;
pub mod schemas;
pub mod security;

pub use routes::receive;
