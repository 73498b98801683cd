//! Custom hooks for the Votação frontend.

pub mod use_notification;

pub use use_notification::*;
