//! Threadline Client - Dioxus chat components
//!
//! Message timeline components for a Dioxus chat client, centered on the
//! quoted-message preview shown above replies.

#![allow(non_snake_case)]

pub mod config;
pub mod context;
pub mod demo;
pub mod i18n;
pub mod logging;
pub mod storage;
pub mod stores;

pub mod components;
pub mod views;

pub use config::ClientSettings;
pub use context::{ChannelActionContext, ChatProvider, ComponentOverrides, MessageContext};
pub use i18n::{TranslationContext, TranslationProvider, Translator};
