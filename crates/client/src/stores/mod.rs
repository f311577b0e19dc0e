//! Global stores for application state.

pub mod messages;
pub mod polls;

pub use messages::{channel_messages, ChannelMessages, MESSAGES};
pub use polls::{cache_poll, get_cached_poll, GlobalPolls, PollStore, POLLS};
