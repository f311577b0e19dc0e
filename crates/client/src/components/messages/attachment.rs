//! Default attachment renderer.
//!
//! In quoted mode every attachment collapses to a small thumbnail or label so
//! it fits inside the quote bubble.

use dioxus::prelude::*;
use threadline_shared::{Attachment, AttachmentKind};

use crate::i18n::{self, StaticTranslator, TranslationContext, Translator};

#[derive(Props, Clone, PartialEq)]
pub struct AttachmentListProps {
    pub attachments: Vec<Attachment>,
    #[props(default)]
    pub is_quoted: bool,
}

/// Human-readable file size, e.g. `512 B`, `1.5 KB`, `3.0 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

fn label(attachment: &Attachment, fallback: &str) -> String {
    attachment
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn AttachmentList(props: AttachmentListProps) -> Element {
    let container_class = if props.is_quoted {
        "attachments attachments--quoted flex gap-1"
    } else {
        "attachments flex flex-col gap-2 mt-2"
    };

    rsx! {
        div { class: container_class,
            for (index, attachment) in props.attachments.iter().enumerate() {
                AttachmentItem {
                    key: "{index}",
                    attachment: attachment.clone(),
                    is_quoted: props.is_quoted,
                }
            }
        }
    }
}

#[component]
fn AttachmentItem(attachment: Attachment, is_quoted: bool) -> Element {
    let translation = try_use_context::<TranslationContext>();
    let t = move |key: &str| match translation {
        Some(ctx) => ctx.t(key),
        None => StaticTranslator::default().t(key),
    };
    let name = label(&attachment, &t(i18n::ATTACHMENT));
    let url = attachment.asset_url.clone().unwrap_or_default();

    match (attachment.kind(), is_quoted) {
        (AttachmentKind::Image | AttachmentKind::Giphy, true) => rsx! {
            img {
                class: "w-12 h-12 rounded object-cover",
                src: attachment.preview_url().unwrap_or_default(),
                alt: "{name}",
            }
        },
        (AttachmentKind::Image | AttachmentKind::Giphy, false) => rsx! {
            img {
                class: "max-w-sm max-h-80 rounded-lg object-contain",
                src: attachment.image_url.as_deref().or(attachment.preview_url()).unwrap_or_default(),
                alt: "{name}",
            }
        },
        (AttachmentKind::Video, false) => rsx! {
            video { class: "max-w-sm rounded-lg", src: "{url}", controls: true }
        },
        (AttachmentKind::Audio, false) => rsx! {
            audio { src: "{url}", controls: true }
        },
        (AttachmentKind::VoiceRecording, _) => {
            let voice = t(i18n::VOICE_MESSAGE);
            if is_quoted {
                rsx! { span { class: "text-xs text-[#b5bac1]", "🎤 {voice}" } }
            } else {
                rsx! {
                    div { class: "flex items-center gap-2",
                        span { class: "text-sm text-[#dbdee1]", "🎤 {voice}" }
                        audio { src: "{url}", controls: true }
                    }
                }
            }
        }
        (_, true) => rsx! {
            span { class: "text-xs text-[#b5bac1] truncate max-w-[8rem]", "📎 {name}" }
        },
        (_, false) => {
            let size = attachment.file_size.map(format_file_size);
            rsx! {
                a {
                    class: "flex items-center gap-3 px-3 py-2 rounded-lg bg-[#2b2d31] border border-[#3f4147] hover:border-[#5865f2] max-w-sm",
                    href: "{url}",
                    target: "_blank",
                    span { class: "text-xl", "📄" }
                    div { class: "min-w-0",
                        div { class: "text-sm text-white truncate", "{name}" }
                        if let Some(size) = size {
                            div { class: "text-xs text-[#b5bac1]", "{size}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_label_falls_back_when_title_missing() {
        let untitled = Attachment {
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(label(&untitled, "Attachment"), "Attachment");

        let titled = Attachment {
            title: Some("notes.pdf".into()),
            ..Default::default()
        };
        assert_eq!(label(&titled, "Attachment"), "notes.pdf");
    }
}
