//! Threadline Client - Main entry point
//!
//! Renders a seeded demo channel with replies quoting text, images, a poll,
//! a deleted message and an empty message.
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use threadline_client::{
    demo::{demo_user, seed_demo_channel, DEMO_CHANNEL_ID},
    log_error, log_info,
    views::ChannelView,
    ChatProvider, ClientSettings, TranslationProvider,
};

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("threadline_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let settings = use_hook(ClientSettings::load);
    let language = settings.language_or_default();

    use_hook(|| match seed_demo_channel() {
        Ok(()) => log_info!("Seeded #{DEMO_CHANNEL_ID}"),
        Err(e) => log_error!("Failed to seed demo channel: {e}"),
    });

    rsx! {
        document::Script { src: "https://cdn.tailwindcss.com" }

        TranslationProvider { language,
            ChatProvider { user: Some(demo_user()),
                ChannelView {
                    channel_id: DEMO_CHANNEL_ID.to_string(),
                    channel_name: DEMO_CHANNEL_ID.to_string(),
                    highlight_duration_ms: settings.highlight_duration_ms,
                }
            }
        }
    }
}
