//! Global message store for managing channel messages.
//!
//! Messages are organized by channel_id and kept sorted by `created_at`.
//! Messages that quote another message carry their own copy of it, so updates
//! to a message are also pushed into every quote of it.

use std::collections::HashMap;

use dioxus::prelude::*;
use threadline_shared::Message;

/// Messages for a single channel.
#[derive(Default, Clone, PartialEq, Debug)]
pub struct ChannelMessages {
    /// All messages in this channel, sorted by created_at ascending.
    pub messages: Vec<Message>,
    /// Whether the channel history has been loaded.
    pub is_loaded: bool,
}

/// Global message store keyed by channel_id.
pub static MESSAGES: GlobalSignal<HashMap<String, ChannelMessages>> =
    Signal::global(HashMap::new);

impl ChannelMessages {
    /// Add a message to the channel, maintaining sort order by created_at.
    /// Returns false if a message with the same ID already exists.
    pub fn add_message(&mut self, msg: Message) -> bool {
        if self.messages.iter().any(|m| m.id == msg.id) {
            return false;
        }

        let pos = self
            .messages
            .partition_point(|m| m.created_at <= msg.created_at);
        self.messages.insert(pos, msg);
        true
    }

    /// Set the full message history, marking the channel as loaded.
    pub fn set_history(&mut self, mut messages: Vec<Message>) {
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        self.messages = messages;
        self.is_loaded = true;
    }

    /// Replace a stored message (edit, deletion, poll attach) and refresh every
    /// quote of it. Returns false if the message is not in this channel.
    pub fn update_message(&mut self, updated: Message) -> bool {
        for msg in &mut self.messages {
            if let Some(quoted) = msg.quoted_message.as_deref_mut() {
                if quoted.id == updated.id {
                    // Quotes are one level deep.
                    let mut copy = updated.clone();
                    copy.quoted_message = None;
                    *quoted = copy;
                }
            }
        }

        match self.messages.iter_mut().find(|m| m.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, message_id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == message_id)
    }
}

/// Snapshot of a channel's messages
pub fn channel_messages(channel_id: &str) -> Vec<Message> {
    MESSAGES
        .read()
        .get(channel_id)
        .map(|c| c.messages.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use threadline_shared::MessageType;

    fn message(id: &str, minute: u32) -> Message {
        Message {
            id: id.to_string(),
            text: format!("text of {id}"),
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 12, minute, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_message_keeps_order_and_dedups() {
        let mut channel = ChannelMessages::default();
        assert!(channel.add_message(message("b", 5)));
        assert!(channel.add_message(message("a", 1)));
        assert!(channel.add_message(message("c", 9)));
        assert!(!channel.add_message(message("a", 1)));

        let ids: Vec<_> = channel.messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_set_history_sorts_and_marks_loaded() {
        let mut channel = ChannelMessages::default();
        channel.set_history(vec![message("late", 30), message("early", 2)]);
        assert!(channel.is_loaded);
        assert_eq!(channel.messages[0].id, "early");
    }

    #[test]
    fn test_update_message_refreshes_quotes() {
        let mut channel = ChannelMessages::default();
        let original = message("orig", 1);
        let mut reply = message("reply", 2);
        reply.quoted_message_id = Some("orig".into());
        reply.quoted_message = Some(Box::new(original.clone()));
        channel.set_history(vec![original.clone(), reply]);

        let mut deleted = original;
        deleted.r#type = MessageType::Deleted;
        assert!(channel.update_message(deleted));

        assert!(channel.get("orig").unwrap().is_deleted());
        let quoted = channel.get("reply").unwrap().quoted_message.as_deref().unwrap();
        assert!(quoted.is_deleted());
    }

    #[test]
    fn test_update_unknown_message() {
        let mut channel = ChannelMessages::default();
        assert!(!channel.update_message(message("ghost", 0)));
    }
}
