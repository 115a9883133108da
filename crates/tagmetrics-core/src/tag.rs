//! Tags: immutable key/value labels and the append-only list instruments keep.

use std::fmt;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A single dimension of a metric.
///
/// Fields are private so a tag cannot change after construction. Any string
/// is accepted, including empty ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    key: String,
    value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

/// Ordered tag sequence. Order is significant and duplicates are kept.
pub type Tags = Vec<Tag>;

/// Append-only tag storage shared by every instrument.
///
/// A batch appended by one call lands contiguously: the whole slice is
/// extended under a single write lock.
#[derive(Debug, Default)]
pub(crate) struct TagList {
    inner: RwLock<Tags>,
}

impl TagList {
    pub(crate) fn new(initial: &[Tag]) -> Self {
        Self {
            inner: RwLock::new(initial.to_vec()),
        }
    }

    pub(crate) fn snapshot(&self) -> Tags {
        self.inner.read().clone()
    }

    pub(crate) fn extend(&self, tags: &[Tag]) {
        if tags.is_empty() {
            return;
        }
        self.inner.write().extend_from_slice(tags);
    }

    pub(crate) fn push(&self, tag: Tag) {
        self.inner.write().push(tag);
    }
}

/// Tag capability shared by all instruments.
///
/// `with_tags` and `with_tag` append and return `&Self` for chaining:
/// `counter.with_tag("region", "eu").inc()`.
pub trait Tagged {
    /// Full append history, in call order.
    fn tags(&self) -> Tags;

    /// Append every tag of `tags`, in order.
    fn with_tags(&self, tags: &[Tag]) -> &Self;

    /// Append a single tag.
    fn with_tag(&self, key: &str, value: &str) -> &Self;
}

/// Implements [`Tagged`] for an instrument whose tag list lives in `self.tags`.
macro_rules! impl_tagged {
    ($ty:ty) => {
        impl $crate::tag::Tagged for $ty {
            fn tags(&self) -> $crate::tag::Tags {
                self.tags.snapshot()
            }

            fn with_tags(&self, tags: &[$crate::tag::Tag]) -> &Self {
                self.tags.extend(tags);
                self
            }

            fn with_tag(&self, key: &str, value: &str) -> &Self {
                self.tags.push($crate::tag::Tag::new(key, value));
                self
            }
        }
    };
}

pub(crate) use impl_tagged;
