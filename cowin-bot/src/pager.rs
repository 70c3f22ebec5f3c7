//! Pagination for `find_by_district_id`: page windows, inline controls and the per-message
//! session that remembers which query a pager belongs to.

use std::collections::HashMap;
use std::ops::Range;
use std::time::{Duration, Instant};

use telegram_bot::{PagerButton, PagerControls};
use tokio::sync::RwLock;
use tracing::debug;

use crate::command::{callback_data, SlotDate};

pub const PAGE_SIZE: usize = 5;

/// Default session lifetime (`PAGER_TTL_SECS`).
pub const DEFAULT_PAGER_TTL_SECS: u64 = 900;

/// Record indices shown on `page`: `[page*5, min(total, page*5+5))`, empty past the end.
pub fn page_window(total: usize, page: usize) -> Range<usize> {
    let start = page.saturating_mul(PAGE_SIZE).min(total);
    let end = start.saturating_add(PAGE_SIZE).min(total);
    start..end
}

/// Number of pages needed for `total` records (at least one).
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Inline buttons for `page`: Prev / Next on the first row, Go back on the second.
pub fn pager_controls(total: usize, page: usize) -> PagerControls {
    let last = page_count(total) - 1;
    let mut nav = Vec::new();
    if page > 0 {
        nav.push(PagerButton::new("« Prev", callback_data((page - 1).min(last))));
    }
    if page.saturating_add(1).saturating_mul(PAGE_SIZE) < total {
        nav.push(PagerButton::new("Next »", callback_data(page + 1)));
    }
    let mut rows = vec![nav];
    if page > 0 {
        rows.push(vec![PagerButton::new("Go back", callback_data(0))]);
    }
    PagerControls { rows }
}

/// Query parameters behind one paginated reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerSession {
    pub district_id: u32,
    pub date: SlotDate,
}

#[derive(Debug)]
struct Entry {
    session: PagerSession,
    created_at: Instant,
}

/// Sessions keyed by `(chat_id, message_id)` of the paginated reply.
#[derive(Debug)]
pub struct PagerSessions {
    ttl: Duration,
    sessions: RwLock<HashMap<(i64, String), Entry>>,
}

impl PagerSessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Stores the session; expired entries are swept first.
    pub async fn insert(&self, chat_id: i64, message_id: &str, session: PagerSession) {
        let mut sessions = self.sessions.write().await;
        let ttl = self.ttl;
        let before = sessions.len();
        sessions.retain(|_, e| e.created_at.elapsed() < ttl);
        debug!(
            swept = before - sessions.len(),
            chat_id,
            message_id,
            "pager session stored"
        );
        sessions.insert(
            (chat_id, message_id.to_string()),
            Entry {
                session,
                created_at: Instant::now(),
            },
        );
    }

    /// Live session for the message; an expired one is removed and `None` returned.
    pub async fn get(&self, chat_id: i64, message_id: &str) -> Option<PagerSession> {
        let key = (chat_id, message_id.to_string());
        {
            let sessions = self.sessions.read().await;
            match sessions.get(&key) {
                None => return None,
                Some(e) if e.created_at.elapsed() < self.ttl => return Some(e.session),
                Some(_) => {}
            }
        }
        self.sessions.write().await.remove(&key);
        None
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for PagerSessions {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_PAGER_TTL_SECS))
    }
}
