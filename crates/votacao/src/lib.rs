//! The shared library for Votação, the cooperative voting control room.
//!
//! This library holds everything the frontend does that is not markup: the typed
//! data model, the HTTP client and resource API for the pautas backend, client-side
//! validation, notification and page state, and the agenda-item card actions.
//! It is target-agnostic so the logic can be exercised natively in tests.

pub mod api;
pub mod card;
pub mod config;
pub mod data;
pub mod errors;
pub mod id;
pub mod log;
pub mod macros;
pub mod notification;
pub mod pautas;
pub mod sequence;
pub mod validation;
pub mod views;

pub use serde;
pub use serde_json;
pub use tracing;
