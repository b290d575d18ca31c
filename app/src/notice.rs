//! Transient banner messages
//!
//! The board holds at most one notice. Auto-dismissal is scheduled by the
//! host; a dismissal only applies if its id is still the current one, so a
//! stale timer never clears a newer banner.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub type NoticeId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub text: String,
    /// `None` for banners that stay until replaced
    pub dismiss_after_ms: Option<u64>,
}

impl Notice {
    pub fn dismiss_after(&self) -> Option<Duration> {
        self.dismiss_after_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone)]
pub struct NoticeBoard {
    current: Option<Notice>,
    next_id: NoticeId,
    dismiss_after: Duration,
}

impl NoticeBoard {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            current: None,
            next_id: 1,
            dismiss_after,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Replace the current notice. Returns the new notice.
    pub fn post(&mut self, kind: NoticeKind, text: &str, auto_dismiss: bool) -> &Notice {
        let id = self.next_id;
        self.next_id += 1;
        let dismiss_after_ms = auto_dismiss.then(|| self.dismiss_after.as_millis() as u64);
        self.current.insert(Notice {
            id,
            kind,
            text: text.to_string(),
            dismiss_after_ms,
        })
    }

    /// Clear the notice if `id` is still showing
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        match &self.current {
            Some(notice) if notice.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_assigns_fresh_ids() {
        let mut board = NoticeBoard::new(Duration::from_millis(3000));
        let first = board.post(NoticeKind::Success, "Saved", true).id;
        let second = board.post(NoticeKind::Error, "Nope", false).clone();
        assert_ne!(first, second.id);
        assert_eq!(second.dismiss_after_ms, None);
        assert_eq!(board.current(), Some(&second));
    }

    #[test]
    fn test_stale_dismissal_is_ignored() {
        let mut board = NoticeBoard::new(Duration::from_millis(3000));
        let old = board.post(NoticeKind::Success, "Saved", true).id;
        let new = board.post(NoticeKind::Success, "Saved again", true).id;

        assert!(!board.dismiss(old));
        assert_eq!(board.current().map(|n| n.id), Some(new));
        assert!(board.dismiss(new));
        assert!(board.current().is_none());
    }

    #[test]
    fn test_auto_dismiss_uses_board_delay() {
        let mut board = NoticeBoard::new(Duration::from_millis(1500));
        let notice = board.post(NoticeKind::Success, "Saved", true);
        assert_eq!(notice.dismiss_after(), Some(Duration::from_millis(1500)));
    }
}
