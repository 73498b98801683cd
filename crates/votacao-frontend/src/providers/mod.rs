//! Service constructors shared by the pages.

pub mod api;
