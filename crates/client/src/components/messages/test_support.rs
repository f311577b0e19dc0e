//! Headless rendering of message components with recording renderers.

use std::cell::RefCell;

use dioxus::prelude::*;
use threadline_shared::{LanguageCode, Message, Poll};

use super::{AttachmentListProps, MessageItem, PollViewProps, QuotedMessage};
use crate::context::{use_message_provider, ChannelActionsProvider, ChatProvider, ComponentOverrides};
use crate::i18n::TranslationProvider;
use crate::stores::cache_poll;

thread_local! {
    static ATTACHMENT_CALLS: RefCell<Vec<(usize, bool)>> = const { RefCell::new(Vec::new()) };
    static POLL_CALLS: RefCell<Vec<(String, bool)>> = const { RefCell::new(Vec::new()) };
}

/// What the injected renderers were asked to draw, in render order.
#[derive(Debug, Default)]
pub struct Rendered {
    /// `(attachment count, is_quoted)` per attachment renderer call.
    pub attachments: Vec<(usize, bool)>,
    /// `(poll id, is_quoted)` per poll renderer call.
    pub polls: Vec<(String, bool)>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mount {
    /// `QuotedMessage` alone under a message context.
    Quote,
    /// A full `MessageItem` row.
    Item,
}

fn RecordingAttachments(props: AttachmentListProps) -> Element {
    ATTACHMENT_CALLS.with(|calls| {
        calls
            .borrow_mut()
            .push((props.attachments.len(), props.is_quoted))
    });
    rsx! {}
}

fn RecordingPoll(props: PollViewProps) -> Element {
    POLL_CALLS.with(|calls| calls.borrow_mut().push((props.poll.id.clone(), props.is_quoted)));
    rsx! {}
}

#[component]
fn QuoteHost(message: Message) -> Element {
    use_message_provider(message);
    rsx! { QuotedMessage {} }
}

#[component]
fn Harness(message: Message, polls: Vec<Poll>, mount: Mount) -> Element {
    use_hook(|| polls.iter().cloned().for_each(cache_poll));
    use_context_provider(|| {
        ComponentOverrides::default()
            .with_attachment(RecordingAttachments)
            .with_poll(RecordingPoll)
    });

    rsx! {
        TranslationProvider { language: LanguageCode::english(),
            ChatProvider { user: None,
                ChannelActionsProvider { highlight_duration_ms: 10,
                    {match mount {
                        Mount::Quote => rsx! { QuoteHost { message: message.clone() } },
                        Mount::Item => rsx! { MessageItem { message: message.clone() } },
                    }}
                }
            }
        }
    }
}

/// Build `message` once in a fresh `VirtualDom` and report the renderer calls.
pub fn render_message(message: Message, polls: Vec<Poll>, mount: Mount) -> Rendered {
    ATTACHMENT_CALLS.with(|calls| calls.borrow_mut().clear());
    POLL_CALLS.with(|calls| calls.borrow_mut().clear());

    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            message,
            polls,
            mount,
        },
    );
    dom.rebuild_in_place();

    Rendered {
        attachments: ATTACHMENT_CALLS.with(|calls| calls.take()),
        polls: POLL_CALLS.with(|calls| calls.take()),
    }
}
