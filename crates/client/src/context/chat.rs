//! Chat-wide context: who the current user is.

use dioxus::prelude::*;
use threadline_shared::User;

#[derive(Clone, Copy, Debug)]
pub struct ChatContext {
    pub current_user: Signal<Option<User>>,
}

impl ChatContext {
    pub fn user_id(&self) -> Option<String> {
        self.current_user.read().as_ref().map(|u| u.id.clone())
    }
}

/// Provider component that sets up the chat context
#[component]
pub fn ChatProvider(#[props(!optional)] user: Option<User>, children: Element) -> Element {
    let mut current_user = use_signal(|| user.clone());
    if *current_user.peek() != user {
        current_user.set(user.clone());
    }

    use_context_provider(|| ChatContext { current_user });

    children
}
