//! # API Module
//!
//! Business logic of the parking finder.
//!
//! ## Modules
//!
//! - [`distance`] - Haversine great-circle distance
//! - [`errors`] - Lookup error taxonomy
//! - [`nearest`] - Validity filter and nearest-facility search
//! - [`parking`] - Event dispatch and lookup orchestration
//! - [`reply`] - User-facing reply texts

pub mod distance;
pub mod errors;
pub mod nearest;
pub mod parking;
pub mod reply;
