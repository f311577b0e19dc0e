//! Context values shared by message components.

pub mod channel_actions;
pub mod chat;
pub mod components;
pub mod message;

pub use channel_actions::{message_dom_id, ChannelActionContext, ChannelActionsProvider};
pub use chat::{ChatContext, ChatProvider};
pub use components::{use_message_components, ComponentOverrides, MessageComponents};
pub use message::{is_own_message, use_message_provider, MessageContext};
