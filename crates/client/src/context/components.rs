//! Renderer overrides for the pieces of a message.
//!
//! A host provides a [`ComponentOverrides`] context to swap in its own avatar,
//! attachment or poll renderer; anything left unset uses the built-in one.

use dioxus::prelude::*;

use crate::components::messages::{
    AttachmentList, AttachmentListProps, Avatar, AvatarProps, PollView, PollViewProps,
};

pub type AvatarComponent = fn(AvatarProps) -> Element;
pub type AttachmentComponent = fn(AttachmentListProps) -> Element;
pub type PollComponent = fn(PollViewProps) -> Element;

#[derive(Clone, Copy, Default)]
pub struct ComponentOverrides {
    pub avatar: Option<AvatarComponent>,
    pub attachment: Option<AttachmentComponent>,
    pub poll: Option<PollComponent>,
}

/// The renderers actually used, after defaults are filled in.
#[derive(Clone, Copy)]
pub struct MessageComponents {
    pub avatar: AvatarComponent,
    pub attachment: AttachmentComponent,
    pub poll: PollComponent,
}

impl Default for MessageComponents {
    fn default() -> Self {
        ComponentOverrides::default().resolve()
    }
}

impl ComponentOverrides {
    pub fn with_avatar(mut self, avatar: AvatarComponent) -> Self {
        self.avatar = Some(avatar);
        self
    }

    pub fn with_attachment(mut self, attachment: AttachmentComponent) -> Self {
        self.attachment = Some(attachment);
        self
    }

    pub fn with_poll(mut self, poll: PollComponent) -> Self {
        self.poll = Some(poll);
        self
    }

    pub fn resolve(&self) -> MessageComponents {
        MessageComponents {
            avatar: self.avatar.unwrap_or(Avatar),
            attachment: self.attachment.unwrap_or(AttachmentList),
            poll: self.poll.unwrap_or(PollView),
        }
    }
}

/// Renderers for the current subtree.
pub fn use_message_components() -> MessageComponents {
    try_use_context::<ComponentOverrides>()
        .unwrap_or_default()
        .resolve()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn CustomAvatar(props: AvatarProps) -> Element {
        rsx! { span { "{props.name}" } }
    }

    #[test]
    fn test_overrides_only_set_what_was_given() {
        let overrides = ComponentOverrides::default().with_avatar(CustomAvatar);
        assert!(overrides.avatar.is_some());
        assert!(overrides.attachment.is_none());
        assert!(overrides.poll.is_none());
    }
}
