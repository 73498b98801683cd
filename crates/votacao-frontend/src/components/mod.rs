//! Reusable UI components for the Votação frontend.
//!
//! The agenda-item card, the creation form, the notification banner and the
//! shared page layout.

pub mod app_layout;
pub mod notification_toast;
pub mod pauta_card;
pub mod pauta_form;

pub use app_layout::*;
pub use notification_toast::*;
pub use pauta_card::*;
pub use pauta_form::*;
