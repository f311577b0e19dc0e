//! Message display components.
//!
//! - `MessageItem`: one message in the timeline, providing its `MessageContext`
//! - `QuotedMessage`: preview of the message being replied to
//! - `Avatar`, `AttachmentList`, `PollView`: default renderers, replaceable
//!   through `ComponentOverrides`

pub mod attachment;
pub mod avatar;
pub mod message_item;
pub mod poll_view;
pub mod quoted_message;

#[cfg(test)]
mod test_support;

pub use attachment::{AttachmentList, AttachmentListProps};
pub use avatar::{Avatar, AvatarProps};
pub use message_item::MessageItem;
pub use poll_view::{PollView, PollViewProps};
pub use quoted_message::{
    jump_from_click, resolve_quoted_message, ClickControl, PreviewBody, QuotedMessage,
    QuotedMessageRender, QuotedPreview,
};
