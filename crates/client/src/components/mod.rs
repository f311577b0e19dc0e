//! Reusable UI components.

pub mod messages;
