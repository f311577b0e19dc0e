//! View components for the application.

pub mod channel_view;

pub use channel_view::ChannelView;
