use parking_lot::RwLock;

use crate::tag::{impl_tagged, Tag, TagList};

/// Prefix of every event representation.
pub const EVENT_PREFIX: &str = "event|";

/// Text event. Only the most recent send is kept.
#[derive(Debug, Default)]
pub struct Event {
    last: RwLock<String>,
    tags: TagList,
}

impl Event {
    pub fn new(tags: &[Tag]) -> Self {
        Self {
            last: RwLock::new(String::new()),
            tags: TagList::new(tags),
        }
    }

    /// Send with empty text: representation becomes `event|`.
    pub fn send(&self) {
        self.send_with_text("");
    }

    /// Representation becomes `event|<text>`, replacing the previous one.
    pub fn send_with_text(&self, text: &str) {
        let mut repr = String::with_capacity(EVENT_PREFIX.len() + text.len());
        repr.push_str(EVENT_PREFIX);
        repr.push_str(text);
        *self.last.write() = repr;
    }

    /// Representation of the latest send; empty before the first one.
    pub fn last_sent(&self) -> String {
        self.last.read().clone()
    }
}

impl_tagged!(Event);
