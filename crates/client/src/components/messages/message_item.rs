//! A single message in the channel timeline.

use chrono::{DateTime, Local, Utc};
use dioxus::prelude::*;
use threadline_shared::Message;

use super::QuotedMessage;
use crate::context::{
    message_dom_id, use_message_components, use_message_provider, ChannelActionContext,
};
use crate::i18n::{self, TranslationContext, Translator};
use crate::stores::{GlobalPolls, PollStore};

/// Timestamp label relative to `now`: "Today at 2:30 PM", "Yesterday at ...",
/// the weekday within a week, otherwise the date alone.
fn format_timestamp(at: DateTime<Utc>, now: DateTime<Local>) -> String {
    let local = at.with_timezone(&Local);
    let time = local.format("%-I:%M %p");
    match (now.date_naive() - local.date_naive()).num_days() {
        0 => format!("Today at {time}"),
        1 => format!("Yesterday at {time}"),
        2..=6 => format!("{} at {time}", local.format("%A")),
        _ => local.format("%b %-d, %Y").to_string(),
    }
}

/// A deleted reply shows only the deletion notice, never its quote or files.
fn shows_quote(message: &Message) -> bool {
    message.quoted_message.is_some() && !message.is_deleted()
}

/// MessageItem - author header, quote preview, body and attachments.
///
/// ```text
/// +-------------------------------------------------------+
/// |  [B]  bob                             Today at 2:30 PM|
/// |   ( [A] | original text being replied to )           |
/// |  Sounds good to me!                                   |
/// +-------------------------------------------------------+
/// ```
#[component]
pub fn MessageItem(message: Message) -> Element {
    let message_ctx = use_message_provider(message.clone());
    let components = use_message_components();
    let translation = use_context::<TranslationContext>();
    let actions = use_context::<ChannelActionContext>();

    let AvatarView = components.avatar;
    let AttachmentView = components.attachment;
    let PollView = components.poll;

    let is_mine = message_ctx.is_my_message();
    let highlighted = actions.is_highlighted(&message.id);
    let author = message.user.clone().unwrap_or_default();
    let display_name = author.display_name().to_string();
    let timestamp = message
        .created_at
        .map(|at| format_timestamp(at, Local::now()))
        .unwrap_or_default();
    let deleted = message.is_deleted();
    let body = if deleted {
        translation.t(i18n::MESSAGE_DELETED)
    } else {
        message
            .i18n
            .text_for(&translation.user_language())
            .map(str::to_string)
            .unwrap_or_else(|| message.text.clone())
    };
    let poll = message
        .poll_id
        .as_deref()
        .filter(|_| !deleted)
        .and_then(|id| GlobalPolls.poll(id));
    let has_quote = shows_quote(&message);

    let container_class = match (highlighted, is_mine) {
        (true, _) => "bg-[#5865f2]/20 border-l-2 border-[#5865f2]",
        (false, true) => "border-l-2 border-indigo-500/30",
        (false, false) => "border-l-2 border-transparent",
    };

    rsx! {
        div {
            id: message_dom_id(&message.id),
            class: "flex gap-3 px-4 py-2 transition-colors hover:bg-[#2e3035] {container_class}",
            AvatarView {
                class: "w-10 h-10",
                image: author.image.clone(),
                name: display_name.clone(),
                user: message.user.clone(),
            }
            div { class: "flex-1 min-w-0",
                div { class: "flex items-baseline gap-2",
                    span { class: "font-semibold text-white text-sm", "{display_name}" }
                    span { class: "text-xs text-[#b5bac1]", "{timestamp}" }
                }
                if has_quote {
                    QuotedMessage {}
                }
                if !body.is_empty() {
                    p {
                        class: if deleted { "text-[#80848e] italic" } else { "text-[#dbdee1] leading-relaxed whitespace-pre-wrap break-words" },
                        "{body}"
                    }
                }
                if let Some(poll) = poll {
                    PollView { poll }
                }
                // With a quote, the quote preview renders the message's attachments.
                if !has_quote && !deleted && !message.attachments.is_empty() {
                    AttachmentView { attachments: message.attachments.clone() }
                }
            }
        }
    }
}
