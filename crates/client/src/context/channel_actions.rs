//! Channel-level actions available to message components.

use dioxus::prelude::*;

use crate::log_debug;

/// DOM id of the element wrapping a rendered message.
pub fn message_dom_id(message_id: &str) -> String {
    format!("message-{message_id}")
}

#[derive(Clone, Copy)]
pub struct ChannelActionContext {
    /// Scroll to and highlight a message in the current channel view.
    pub jump_to_message: Callback<String>,
    /// Message currently highlighted after a jump, if any.
    pub highlighted_message_id: Signal<Option<String>>,
}

impl ChannelActionContext {
    pub fn is_highlighted(&self, message_id: &str) -> bool {
        self.highlighted_message_id.read().as_deref() == Some(message_id)
    }
}

#[cfg(target_arch = "wasm32")]
fn scroll_into_view(message_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.get_element_by_id(&message_dom_id(message_id)) {
        Some(element) => element.scroll_into_view(),
        None => crate::log_warn!("Message {message_id} is not rendered in this view"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_into_view(message_id: &str) {
    let dom_id = match serde_json::to_string(&message_dom_id(message_id)) {
        Ok(id) => id,
        Err(e) => {
            crate::log_error!("Cannot address message {message_id}: {e}");
            return;
        }
    };
    let found = document::eval(&format!(
        "const el = document.getElementById({dom_id});\n\
         if (el) el.scrollIntoView({{ behavior: 'smooth', block: 'center' }});\n\
         return el !== null;"
    ));
    let message_id = message_id.to_string();
    spawn(async move {
        match found.join::<bool>().await {
            Ok(true) => {}
            Ok(false) => log_debug!("Message {message_id} is not rendered in this view"),
            Err(e) => crate::log_warn!("Scroll to message {message_id} failed: {e:?}"),
        }
    });
}

async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(tokio::time::Duration::from_millis(ms)).await;
}

/// Provider component that sets up the default jump-to-message behavior:
/// scroll the target into view and highlight it for `highlight_duration_ms`.
#[component]
pub fn ChannelActionsProvider(highlight_duration_ms: u64, children: Element) -> Element {
    let mut highlighted_message_id = use_signal(|| None::<String>);

    let jump_to_message = use_callback(move |message_id: String| {
        log_debug!("Jumping to message {message_id}");
        scroll_into_view(&message_id);
        highlighted_message_id.set(Some(message_id.clone()));

        spawn(async move {
            sleep_ms(highlight_duration_ms).await;
            // A later jump owns the highlight now.
            if highlighted_message_id.peek().as_deref() == Some(message_id.as_str()) {
                highlighted_message_id.set(None);
            }
        });
    });

    use_context_provider(|| ChannelActionContext {
        jump_to_message,
        highlighted_message_id,
    });

    children
}
