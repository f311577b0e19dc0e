//! Per-message context read by the pieces of a rendered message.

use dioxus::prelude::*;
use threadline_shared::Message;

use super::chat::ChatContext;

#[derive(Clone, Copy)]
pub struct MessageContext {
    pub message: Signal<Message>,
    pub chat: ChatContext,
}

impl MessageContext {
    pub fn is_my_message(&self) -> bool {
        is_own_message(&self.message.read(), self.chat.user_id().as_deref())
    }
}

pub fn is_own_message(message: &Message, current_user_id: Option<&str>) -> bool {
    matches!(
        (message.author_id(), current_user_id),
        (Some(author), Some(me)) if author == me
    )
}

/// Provide a [`MessageContext`] for `message` to the calling component's children,
/// keeping it in sync when the message prop changes.
pub fn use_message_provider(message: Message) -> MessageContext {
    let chat = use_context::<ChatContext>();
    let mut message_sig = use_signal(|| message.clone());
    if *message_sig.peek() != message {
        message_sig.set(message);
    }

    use_context_provider(|| MessageContext {
        message: message_sig,
        chat,
    })
}
