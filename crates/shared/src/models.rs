//! Shared chat data models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::i18n::I18n;

// --- Identity ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl User {
    /// Name to show next to the avatar, falling back to the user id.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }
}

// --- Objects ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Giphy,
    Video,
    Audio,
    VoiceRecording,
    File,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl Attachment {
    /// Classify the attachment, falling back to the mime type and then to a
    /// generic file when the `type` tag is missing or unknown.
    pub fn kind(&self) -> AttachmentKind {
        match self.r#type.as_deref() {
            Some("image") => return AttachmentKind::Image,
            Some("giphy") => return AttachmentKind::Giphy,
            Some("video") => return AttachmentKind::Video,
            Some("audio") => return AttachmentKind::Audio,
            Some("voiceRecording") => return AttachmentKind::VoiceRecording,
            _ => {}
        }
        match self.mime_type.as_deref() {
            Some(m) if m.starts_with("image/") => AttachmentKind::Image,
            Some(m) if m.starts_with("video/") => AttachmentKind::Video,
            Some(m) if m.starts_with("audio/") => AttachmentKind::Audio,
            _ => AttachmentKind::File,
        }
    }

    /// Best URL for a small preview image.
    pub fn preview_url(&self) -> Option<&str> {
        self.thumb_url
            .as_deref()
            .or(self.image_url.as_deref())
            .or(self.asset_url.as_deref())
    }
}

// --- Polls ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PollOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Poll {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub options: Vec<PollOption>,
    #[serde(default)]
    pub vote_counts_by_option: HashMap<String, u32>,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub enforce_unique_vote: bool,
    #[serde(default)]
    pub is_closed: bool,
}

impl Poll {
    pub fn votes_for(&self, option_id: &str) -> u32 {
        self.vote_counts_by_option.get(option_id).copied().unwrap_or(0)
    }
}

// --- Messaging ---

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Regular,
    Ephemeral,
    Error,
    Reply,
    System,
    Deleted,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub r#type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quoted_message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quoted_message: Option<Box<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub i18n: I18n,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Decode a message payload as delivered by the chat backend.
    pub fn from_json(payload: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// A message is deleted when it carries a deletion timestamp or the
    /// `deleted` type tag.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some() || self.r#type == MessageType::Deleted
    }

    pub fn author_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_by_timestamp_or_type() {
        let deleted_at = Message::from_json(
            r#"{"id":"m1","text":"hello","deleted_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(deleted_at.is_deleted());

        let typed = Message::from_json(r#"{"id":"m2","type":"deleted"}"#).unwrap();
        assert!(typed.is_deleted());

        let live = Message::from_json(r#"{"id":"m3","type":"regular","deleted_at":null}"#).unwrap();
        assert!(!live.is_deleted());
    }

    #[test]
    fn test_decode_nested_quoted_message() {
        let msg = Message::from_json(
            r#"{
                "id": "outer",
                "text": "replying",
                "quoted_message_id": "inner",
                "quoted_message": {
                    "id": "inner",
                    "text": "hello",
                    "i18n": {"en_text": "hola"},
                    "attachments": [{"type": "image", "image_url": "https://cdn/a.png"}],
                    "user": {"id": "u1", "name": "Alice"}
                },
                "attachments": [{"type": "file", "title": "notes.pdf"}]
            }"#,
        )
        .unwrap();

        let quoted = msg.quoted_message.as_deref().unwrap();
        assert_eq!(quoted.id, "inner");
        assert_eq!(quoted.r#type, MessageType::Regular);
        assert_eq!(quoted.attachments[0].kind(), AttachmentKind::Image);
        assert_eq!(msg.attachments[0].kind(), AttachmentKind::File);
        assert_eq!(quoted.author_id(), Some("u1"));
    }

    #[test]
    fn test_decode_rejects_malformed_payload() {
        assert!(matches!(
            Message::from_json(r#"{"text":"no id"}"#),
            Err(ModelError::Decode(_))
        ));
    }

    #[test]
    fn test_user_display_name_falls_back_to_id() {
        let named = User {
            id: "u1".into(),
            name: Some("Alice".into()),
            image: None,
        };
        let blank = User {
            id: "u2".into(),
            name: Some(String::new()),
            image: None,
        };
        assert_eq!(named.display_name(), "Alice");
        assert_eq!(blank.display_name(), "u2");
        assert_eq!(User { id: "u3".into(), ..Default::default() }.display_name(), "u3");
    }

    #[test]
    fn test_attachment_kind_from_mime() {
        let att = Attachment {
            mime_type: Some("video/mp4".into()),
            ..Default::default()
        };
        assert_eq!(att.kind(), AttachmentKind::Video);
        assert_eq!(Attachment::default().kind(), AttachmentKind::File);
    }

    #[test]
    fn test_poll_votes_for_missing_option() {
        let poll: Poll = serde_json::from_str(
            r#"{"id":"p1","name":"Lunch?","options":[{"id":"a","text":"Pizza"}],"vote_counts_by_option":{"a":3}}"#,
        )
        .unwrap();
        assert_eq!(poll.votes_for("a"), 3);
        assert_eq!(poll.votes_for("b"), 0);
    }
}
