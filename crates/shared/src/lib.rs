//! Shared types for the threadline chat client.

pub mod error;
pub mod i18n;
pub mod models;

pub use error::*;
pub use i18n::*;
pub use models::*;
