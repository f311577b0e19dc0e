//! Quoted message preview.
//!
//! Shows a compact copy of the message being replied to (sender avatar, text or
//! deletion notice, first attachment or poll) and jumps to the original when
//! clicked. The outer message's own attachments are rendered after the preview.

use dioxus::prelude::*;
use threadline_shared::{Attachment, Message, Poll, User};

use crate::context::{use_message_components, ChannelActionContext, MessageContext};
use crate::i18n::{self, TranslationContext, Translator};
use crate::log_debug;
use crate::stores::{GlobalPolls, PollStore};

/// Result of resolving a message's quote for display.
#[derive(Clone, Debug, PartialEq)]
pub enum QuotedMessageRender {
    /// Nothing to draw at all.
    NoOutput,
    Rendered {
        /// `None` when the quote has nothing worth showing.
        preview: Option<QuotedPreview>,
        /// Attachments of the quoting message itself.
        message_attachments: Vec<Attachment>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuotedPreview {
    pub quoted_message_id: String,
    pub is_mine: bool,
    pub sender: Option<User>,
    pub body: PreviewBody,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PreviewBody {
    Poll(Poll),
    /// The text node is always present, even when `text` is empty.
    Content {
        attachment: Option<Attachment>,
        text: String,
    },
}

/// Decide what the quote preview of `message` shows.
pub fn resolve_quoted_message(
    message: &Message,
    is_mine: bool,
    polls: &impl PollStore,
    translator: &impl Translator,
) -> QuotedMessageRender {
    let Some(quoted) = message.quoted_message.as_deref() else {
        return QuotedMessageRender::NoOutput;
    };

    let poll = quoted.poll_id.as_deref().and_then(|poll_id| {
        let poll = polls.poll(poll_id);
        if poll.is_none() {
            log_debug!("Poll {poll_id} quoted by {} is not resolved yet", message.id);
        }
        poll
    });

    let deleted = quoted.is_deleted();

    let text = if deleted {
        translator.t(i18n::MESSAGE_DELETED)
    } else {
        quoted
            .i18n
            .text_for(&translator.user_language())
            .map(str::to_string)
            .unwrap_or_else(|| quoted.text.clone())
    };

    let attachment = if deleted {
        None
    } else {
        quoted.attachments.first().cloned()
    };

    let preview = if quoted.poll.is_none() && text.is_empty() && attachment.is_none() {
        None
    } else {
        let body = match poll {
            Some(poll) => PreviewBody::Poll(poll),
            None => PreviewBody::Content { attachment, text },
        };
        Some(QuotedPreview {
            quoted_message_id: quoted.id.clone(),
            is_mine,
            sender: quoted.user.clone(),
            body,
        })
    };

    if preview.is_none() && message.attachments.is_empty() {
        return QuotedMessageRender::NoOutput;
    }

    QuotedMessageRender::Rendered {
        preview,
        message_attachments: message.attachments.clone(),
    }
}

/// The parts of a DOM click the preview needs to control.
pub trait ClickControl {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

impl ClickControl for MouseEvent {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }

    fn stop_propagation(&self) {
        Event::stop_propagation(self);
    }
}

/// Swallow the click and ask the channel to jump to the quoted message.
pub fn jump_from_click(evt: &impl ClickControl, quoted_message_id: &str, jump: impl FnOnce(String)) {
    evt.stop_propagation();
    evt.prevent_default();
    jump(quoted_message_id.to_string());
}

#[component]
pub fn QuotedMessage() -> Element {
    let components = use_message_components();
    let message_ctx = use_context::<MessageContext>();
    let translation = use_context::<TranslationContext>();
    let actions = use_context::<ChannelActionContext>();

    let render = resolve_quoted_message(
        &message_ctx.message.read(),
        message_ctx.is_my_message(),
        &GlobalPolls,
        &translation,
    );
    let QuotedMessageRender::Rendered {
        preview,
        message_attachments,
    } = render
    else {
        return rsx! {};
    };

    let AvatarView = components.avatar;
    let AttachmentView = components.attachment;
    let PollView = components.poll;

    rsx! {
        if let Some(preview) = preview {
            {
                let quoted_id = preview.quoted_message_id.clone();
                let class = if preview.is_mine {
                    "quoted-message-preview mine flex items-end gap-2 mb-1 cursor-pointer"
                } else {
                    "quoted-message-preview flex items-end gap-2 mb-1 cursor-pointer"
                };
                rsx! {
                    div {
                        class,
                        "data-testid": "quoted-message",
                        onclick: move |evt: MouseEvent| {
                            jump_from_click(&evt, &quoted_id, |id| actions.jump_to_message.call(id));
                        },
                        if let Some(sender) = preview.sender.as_ref() {
                            AvatarView {
                                class: "quoted-message-sender w-5 h-5 text-xs",
                                image: sender.image.clone(),
                                name: sender.display_name().to_string(),
                                user: Some(sender.clone()),
                            }
                        }
                        div {
                            class: "quoted-message-bubble flex flex-col gap-1 max-w-md px-3 py-2 rounded-xl border border-[#3f4147] bg-[#2b2d31]/70",
                            "data-testid": "quoted-message-contents",
                            {match preview.body.clone() {
                                PreviewBody::Poll(poll) => rsx! {
                                    PollView { poll, is_quoted: true }
                                },
                                PreviewBody::Content { attachment, text } => rsx! {
                                    if let Some(attachment) = attachment {
                                        AttachmentView { attachments: vec![attachment], is_quoted: true }
                                    }
                                    div {
                                        class: "quoted-message-bubble__text text-sm text-[#b5bac1] line-clamp-2",
                                        "data-testid": "quoted-message-text",
                                        "{text}"
                                    }
                                },
                            }}
                        }
                    }
                }
            }
        }
        if !message_attachments.is_empty() {
            AttachmentView { attachments: message_attachments.clone() }
        }
    }
}
