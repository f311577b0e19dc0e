//! Default poll renderer.

use dioxus::prelude::*;
use threadline_shared::Poll;

use crate::i18n::{self, StaticTranslator, TranslationContext, Translator};

#[derive(Props, Clone, PartialEq)]
pub struct PollViewProps {
    pub poll: Poll,
    #[props(default)]
    pub is_quoted: bool,
}

/// Share of the total votes held by one option, as a whole percentage.
pub fn vote_share(votes: u32, total: u32) -> u32 {
    if total == 0 {
        0
    } else {
        ((votes as u64 * 100 + total as u64 / 2) / total as u64) as u32
    }
}

pub fn PollView(props: PollViewProps) -> Element {
    let translation = try_use_context::<TranslationContext>();
    let t = move |key: &str| match translation {
        Some(ctx) => ctx.t(key),
        None => StaticTranslator::default().t(key),
    };
    let poll = props.poll;

    if props.is_quoted {
        let label = t(i18n::POLL);
        return rsx! {
            div { class: "poll poll--quoted flex items-center gap-1 text-sm text-[#dbdee1]",
                span { "📊" }
                span { class: "text-[#b5bac1]", "{label}:" }
                span { class: "truncate", "{poll.name}" }
            }
        };
    }

    let votes_label = t(i18n::VOTES);
    let closed_label = t(i18n::POLL_CLOSED);
    let total = poll.vote_count;

    rsx! {
        div { class: "poll mt-2 max-w-sm rounded-xl border border-[#3f4147] bg-[#2b2d31] p-4",
            div { class: "flex items-start justify-between gap-2",
                h4 { class: "font-semibold text-white", "{poll.name}" }
                if poll.is_closed {
                    span { class: "text-xs px-2 py-0.5 rounded bg-[#4e5058] text-white", "{closed_label}" }
                }
            }
            if let Some(description) = poll.description.as_ref() {
                p { class: "text-sm text-[#b5bac1] mt-1", "{description}" }
            }
            ul { class: "mt-3 flex flex-col gap-2",
                for option in poll.options.iter() {
                    {
                        let votes = poll.votes_for(&option.id);
                        let share = vote_share(votes, total);
                        rsx! {
                            li { key: "{option.id}", class: "relative rounded-lg overflow-hidden bg-[#1e1f22]",
                                div {
                                    class: "absolute inset-y-0 left-0 bg-[#5865f2]/30",
                                    style: "width: {share}%",
                                }
                                div { class: "relative flex justify-between px-3 py-1.5 text-sm text-[#dbdee1]",
                                    span { "{option.text}" }
                                    span { class: "text-[#b5bac1]", "{votes}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "mt-2 text-xs text-[#b5bac1]", "{total} {votes_label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_share() {
        assert_eq!(vote_share(0, 0), 0);
        assert_eq!(vote_share(1, 3), 33);
        assert_eq!(vote_share(2, 3), 67);
        assert_eq!(vote_share(5, 5), 100);
    }
}
