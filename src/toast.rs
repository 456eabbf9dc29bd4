//! Presentation-owned notification queue.
//!
//! Producers enqueue a message with a lifetime; a single render loop prunes
//! expired entries. Nothing here touches the rendering surface, so any part
//! of the app can produce notices without knowing how they are drawn.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub fn class_suffix(self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    expires_at: Instant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NoticeQueue {
    next_id: u64,
    entries: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.push_for(level, message, DEFAULT_NOTICE_DURATION);
    }

    pub fn push_for(&mut self, level: NoticeLevel, message: impl Into<String>, ttl: Duration) {
        self.push_at(level, message, Instant::now() + ttl);
    }

    /// Deadline-injectable variant for tests.
    pub fn push_at(&mut self, level: NoticeLevel, message: impl Into<String>, expires_at: Instant) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(Notice {
            id,
            level,
            message: message.into(),
            expires_at,
        });
    }

    /// Drop every entry whose deadline has passed.
    pub fn prune(&mut self, now: Instant) {
        self.entries.retain(|notice| notice.expires_at > now);
    }

    pub fn has_expired(&self, now: Instant) -> bool {
        self.entries.iter().any(|notice| notice.expires_at <= now)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new()
    }
}
