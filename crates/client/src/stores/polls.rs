//! Poll store for polls already resolved by the data layer.
//!
//! Lookups are synchronous reads; a poll that has not been resolved yet is
//! simply absent.

use std::collections::HashMap;

use dioxus::prelude::*;
use threadline_shared::Poll;

/// Read access to resolved polls, keyed by poll id.
pub trait PollStore {
    fn poll(&self, poll_id: &str) -> Option<Poll>;
}

impl PollStore for HashMap<String, Poll> {
    fn poll(&self, poll_id: &str) -> Option<Poll> {
        self.get(poll_id).cloned()
    }
}

/// Resolved polls, keyed by poll id
pub static POLLS: GlobalSignal<HashMap<String, Poll>> = Signal::global(HashMap::new);

/// [`PollStore`] backed by the global [`POLLS`] signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalPolls;

impl PollStore for GlobalPolls {
    fn poll(&self, poll_id: &str) -> Option<Poll> {
        get_cached_poll(poll_id)
    }
}

/// Cache a poll (from a message payload or a poll update event)
pub fn cache_poll(poll: Poll) {
    POLLS.write().insert(poll.id.clone(), poll);
}

/// Get a cached poll
pub fn get_cached_poll(poll_id: &str) -> Option<Poll> {
    POLLS.read().get(poll_id).cloned()
}
