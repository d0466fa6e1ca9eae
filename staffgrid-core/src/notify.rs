//! Transient notification banners.
//!
//! Every intake outcome posts a banner. Banners expire on their own after a
//! fixed lifetime; there is no user dismissal, no deduplication, and no
//! queueing — rapid successive posts simply stack independent banners.

use std::time::{Duration, Instant};

/// Fixed banner lifetime.
pub const NOTICE_LIFETIME: Duration = Duration::from_millis(3000);

/// Banner kind, affects styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient banner: a title line plus a message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level,
        }
    }

    /// A success banner.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new("Success", message, NoticeLevel::Success)
    }

    /// An error banner.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message, NoticeLevel::Error)
    }
}

/// The set of currently visible banners, newest last, each with the instant
/// it was posted.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    entries: Vec<(Notice, Instant)>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a banner now.
    pub fn post(&mut self, notice: Notice) {
        self.post_at(notice, Instant::now());
    }

    /// Post a banner with an explicit timestamp. Expiry tests drive the
    /// board with synthetic instants instead of wall-clock sleeps.
    pub fn post_at(&mut self, notice: Notice, at: Instant) {
        self.entries.push((notice, at));
    }

    /// Visible banners with their posting instants.
    pub fn entries(&self) -> &[(Notice, Instant)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every banner whose lifetime has elapsed at `now`. Returns how
    /// many were removed.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|(_, posted)| now.duration_since(*posted) < NOTICE_LIFETIME);
        before - self.entries.len()
    }

    /// Earliest upcoming expiry, for the event loop's timer. `None` when no
    /// banner is visible.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries
            .iter()
            .map(|(_, posted)| *posted + NOTICE_LIFETIME)
            .min()
    }
}
