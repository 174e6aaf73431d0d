// crates/wayfarer-core/src/notice.rs
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

/// A transient user-facing message with an auto-dismiss deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn is_visible(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Posted notices, newest last. Expired ones are pruned on read.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn post(&mut self, kind: NoticeKind, message: impl Into<String>, ttl: Duration, now: Instant) {
        self.notices.push(Notice {
            kind,
            message: message.into(),
            expires_at: now + ttl,
        });
    }

    pub fn visible(&mut self, now: Instant) -> &[Notice] {
        self.notices.retain(|n| n.is_visible(now));
        &self.notices
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_dismiss_after_their_ttl() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::default();
        board.post(NoticeKind::Error, "offline", Duration::from_secs(5), t0);
        board.post(NoticeKind::Info, "nothing found", Duration::from_secs(3), t0);

        assert_eq!(board.visible(t0).len(), 2);
        let later = board.visible(t0 + Duration::from_secs(4));
        assert_eq!(later.len(), 1);
        assert_eq!(later[0].kind, NoticeKind::Error);
        assert!(board.visible(t0 + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn latest_is_the_newest_post() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::default();
        assert!(board.latest().is_none());
        board.post(NoticeKind::Info, "a", Duration::from_secs(1), t0);
        board.post(NoticeKind::Info, "b", Duration::from_secs(1), t0);
        assert_eq!(board.latest().map(|n| n.message.as_str()), Some("b"));
        board.clear();
        assert!(board.latest().is_none());
    }
}
