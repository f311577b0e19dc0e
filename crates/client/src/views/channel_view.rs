//! Channel view component for displaying chat messages.

use dioxus::prelude::*;

use crate::components::messages::MessageItem;
use crate::context::ChannelActionsProvider;
use crate::stores::channel_messages;

/// Chat area for one channel: header plus the message timeline.
#[component]
pub fn ChannelView(channel_id: String, channel_name: String, highlight_duration_ms: u64) -> Element {
    rsx! {
        div { class: "flex-1 flex flex-col h-screen bg-[#313338]",
            div { class: "h-12 px-4 flex items-center shadow-sm border-b border-[#232428]",
                span { class: "text-[#80848e] text-xl mr-2", "#" }
                span { class: "font-semibold text-white", "{channel_name}" }
            }
            ChannelActionsProvider { highlight_duration_ms,
                div {
                    id: "messages-container",
                    class: "flex-1 overflow-y-auto flex flex-col py-4",
                    MessageList { channel_id }
                }
            }
        }
    }
}

#[component]
fn MessageList(channel_id: String) -> Element {
    let messages = channel_messages(&channel_id);

    if messages.is_empty() {
        return rsx! {
            div { class: "flex-1 flex items-center justify-center text-gray-400",
                "No messages yet"
            }
        };
    }

    rsx! {
        // Spacer that pushes messages to the bottom when they don't fill the container
        div { class: "flex-1" }
        for message in messages {
            MessageItem { key: "{message.id}", message }
        }
    }
}
