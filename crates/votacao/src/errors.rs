//! Shared error types and utilities for the votacao project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

pub use crate::api::ApiError;
pub use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}
