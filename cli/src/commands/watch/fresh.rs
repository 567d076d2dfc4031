use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a network keeps its NEW badge after first being reported.
pub const NEW_BADGE_TTL: Duration = Duration::from_secs(30);

/// Addresses recently reported as new by the session, with the moment they
/// were reported. The session itself never forgets an address; the badge
/// window is kept here.
#[derive(Debug, Default)]
pub struct FreshMarks {
    marked_at: HashMap<String, Instant>,
}

impl FreshMarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark<I>(&mut self, bssids: I, now: Instant)
    where
        I: IntoIterator<Item = String>,
    {
        for bssid in bssids {
            self.marked_at.insert(bssid, now);
        }
    }

    pub fn is_fresh(&self, bssid: &str, now: Instant) -> bool {
        self.marked_at
            .get(bssid)
            .is_some_and(|marked| now.saturating_duration_since(*marked) < NEW_BADGE_TTL)
    }

    pub fn expire(&mut self, now: Instant) {
        self.marked_at
            .retain(|_, marked| now.saturating_duration_since(*marked) < NEW_BADGE_TTL);
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
