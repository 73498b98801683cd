//! Page components for the application's routes.

pub mod dashboard;
pub mod not_found;
pub mod nova_pauta;
pub mod pauta_detail;

pub use dashboard::*;
pub use not_found::*;
pub use nova_pauta::*;
pub use pauta_detail::*;
