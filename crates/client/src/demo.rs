//! Seed data for the demo channel.

use threadline_shared::{Message, ModelError, User};

use crate::stores::{cache_poll, MESSAGES};

pub const DEMO_CHANNEL_ID: &str = "general";

pub fn demo_user() -> User {
    User {
        id: "alice".to_string(),
        name: Some("Alice".to_string()),
        image: None,
    }
}

const DEMO_MESSAGES: &str = r#"[
  {
    "id": "m1",
    "text": "Where should we go for lunch?",
    "user": {"id": "alice", "name": "Alice"},
    "poll_id": "p1",
    "poll": {
      "id": "p1",
      "name": "Lunch spot",
      "options": [{"id": "o1", "text": "Tacos"}, {"id": "o2", "text": "Ramen"}],
      "vote_counts_by_option": {"o1": 3, "o2": 2},
      "vote_count": 5
    },
    "created_at": "2024-01-01T11:00:00Z"
  },
  {
    "id": "m2",
    "text": "Photos from the offsite",
    "i18n": {"es_text": "Fotos del offsite", "language": "en"},
    "user": {"id": "bob", "name": "Bob", "image": "https://picsum.photos/seed/bob/64"},
    "attachments": [
      {"type": "image", "image_url": "https://picsum.photos/seed/a/640/360", "thumb_url": "https://picsum.photos/seed/a/96"},
      {"type": "image", "image_url": "https://picsum.photos/seed/b/640/360", "thumb_url": "https://picsum.photos/seed/b/96"}
    ],
    "created_at": "2024-01-01T11:05:00Z"
  },
  {
    "id": "m3",
    "text": "The first one is great",
    "user": {"id": "carol"},
    "quoted_message_id": "m2",
    "quoted_message": {
      "id": "m2",
      "text": "Photos from the offsite",
      "i18n": {"es_text": "Fotos del offsite", "language": "en"},
      "user": {"id": "bob", "name": "Bob", "image": "https://picsum.photos/seed/bob/64"},
      "attachments": [
        {"type": "image", "image_url": "https://picsum.photos/seed/a/640/360", "thumb_url": "https://picsum.photos/seed/a/96"},
        {"type": "image", "image_url": "https://picsum.photos/seed/b/640/360", "thumb_url": "https://picsum.photos/seed/b/96"}
      ]
    },
    "created_at": "2024-01-01T11:07:00Z"
  },
  {
    "id": "m4",
    "type": "deleted",
    "text": "oops, wrong channel",
    "user": {"id": "alice", "name": "Alice"},
    "attachments": [{"type": "file", "title": "budget.xlsx", "file_size": 48213}],
    "deleted_at": "2024-01-01T11:09:00Z",
    "created_at": "2024-01-01T11:08:00Z"
  },
  {
    "id": "m5",
    "text": "What was that?",
    "user": {"id": "bob", "name": "Bob", "image": "https://picsum.photos/seed/bob/64"},
    "quoted_message_id": "m4",
    "quoted_message": {
      "id": "m4",
      "type": "deleted",
      "text": "oops, wrong channel",
      "user": {"id": "alice", "name": "Alice"},
      "attachments": [{"type": "file", "title": "budget.xlsx", "file_size": 48213}],
      "deleted_at": "2024-01-01T11:09:00Z"
    },
    "created_at": "2024-01-01T11:10:00Z"
  },
  {
    "id": "m6",
    "text": "Tacos, obviously",
    "user": {"id": "carol"},
    "quoted_message_id": "m1",
    "quoted_message": {
      "id": "m1",
      "text": "",
      "user": {"id": "alice", "name": "Alice"},
      "poll_id": "p1",
      "poll": {"id": "p1", "name": "Lunch spot"}
    },
    "created_at": "2024-01-01T11:12:00Z"
  },
  {
    "id": "m7",
    "text": "Menu attached",
    "user": {"id": "alice", "name": "Alice"},
    "quoted_message_id": "m0",
    "quoted_message": {"id": "m0", "text": "", "user": {"id": "system"}},
    "attachments": [{"type": "file", "title": "menu.pdf", "asset_url": "https://example.com/menu.pdf", "file_size": 1572864}],
    "created_at": "2024-01-01T11:15:00Z"
  }
]"#;

pub fn demo_messages() -> Result<Vec<Message>, ModelError> {
    Ok(serde_json::from_str(DEMO_MESSAGES)?)
}

/// Load the demo history into the message and poll stores.
pub fn seed_demo_channel() -> Result<(), ModelError> {
    let messages = demo_messages()?;
    for poll in messages.iter().filter_map(|m| m.poll.clone()) {
        cache_poll(poll);
    }

    MESSAGES
        .write()
        .entry(DEMO_CHANNEL_ID.to_string())
        .or_default()
        .set_history(messages);
    Ok(())
}
