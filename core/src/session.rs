//! # Session State Tracker
//!
//! Keeps per-device signal history across scan cycles.
//!
//! The dashboard refreshes on a timer and on demand while the render path
//! reads the same state, so every operation takes one lock for its whole
//! duration: an `update` is never observed half-applied. Readers only get
//! owned snapshots back.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use spectr_common::network::Network;

pub mod sparkline;

/// Number of recent samples retained per device.
pub const MAX_HISTORY: usize = 10;

/// Everything remembered about one BSSID since it was first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceHistory {
    bssid: String,
    first_seen: SystemTime,
    last_seen: SystemTime,
    samples: VecDeque<i32>,
    min_signal: i32,
    max_signal: i32,
}

impl DeviceHistory {
    fn new(bssid: &str, signal: i32, now: SystemTime) -> Self {
        Self {
            bssid: bssid.to_string(),
            first_seen: now,
            last_seen: now,
            samples: VecDeque::with_capacity(MAX_HISTORY + 1),
            min_signal: signal,
            max_signal: signal,
        }
    }

    fn record(&mut self, signal: i32, now: SystemTime) {
        // wall clock can step backwards
        self.last_seen = now.max(self.first_seen);

        self.min_signal = self.min_signal.min(signal);
        self.max_signal = self.max_signal.max(signal);

        self.samples.push_back(signal);
        while self.samples.len() > MAX_HISTORY {
            self.samples.pop_front();
        }
    }

    pub fn bssid(&self) -> &str {
        &self.bssid
    }

    pub fn first_seen(&self) -> SystemTime {
        self.first_seen
    }

    pub fn last_seen(&self) -> SystemTime {
        self.last_seen
    }

    /// Recent samples, oldest first.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = i32> + '_ {
        self.samples.iter().copied()
    }

    /// Weakest signal ever recorded, including evicted samples.
    pub fn min_signal(&self) -> i32 {
        self.min_signal
    }

    /// Strongest signal ever recorded, including evicted samples.
    pub fn max_signal(&self) -> i32 {
        self.max_signal
    }

    pub fn sparkline(&self) -> String {
        sparkline::render(self.samples())
    }
}

/// Process-wide map from BSSID to [`DeviceHistory`].
#[derive(Debug, Default)]
pub struct Session {
    states: Mutex<HashMap<String, DeviceHistory>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a freshly parsed batch and returns the BSSIDs that were not
    /// tracked before this call, in batch order.
    pub fn update(&self, networks: &[Network]) -> Vec<String> {
        self.update_at(networks, SystemTime::now())
    }

    /// [`Session::update`] against a caller-supplied clock, so histories can
    /// be replayed deterministically.
    pub fn update_at(&self, networks: &[Network], now: SystemTime) -> Vec<String> {
        let mut states = self.states();
        let mut discovered: Vec<String> = Vec::new();

        for network in networks {
            let state = states.entry(network.bssid.clone()).or_insert_with(|| {
                discovered.push(network.bssid.clone());
                DeviceHistory::new(&network.bssid, network.signal, now)
            });
            state.record(network.signal, now);
        }

        discovered
    }

    /// Snapshot of one device, `None` if it has never been seen.
    pub fn get(&self, bssid: &str) -> Option<DeviceHistory> {
        self.states().get(bssid).cloned()
    }

    /// Number of distinct BSSIDs seen so far.
    pub fn count(&self) -> usize {
        self.states().len()
    }

    fn states(&self) -> MutexGuard<'_, HashMap<String, DeviceHistory>> {
        // every mutation leaves the map consistent, so a poisoned lock is still usable
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
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

#[cfg(test)]
mod tests {
    use super::*;
    use spectr_common::network::Security;
    use std::time::Duration;

    fn network(bssid: &str, signal: i32) -> Network {
        Network {
            bssid: bssid.to_string(),
            ssid: "test".to_string(),
            signal,
            frequency: 2437,
            channel: 6,
            security: Security::Wpa2,
            observed_at: SystemTime::now(),
        }
    }

    #[test]
    fn first_sighting_is_reported_once() {
        let session = Session::new();
        let batch = vec![network("AA:BB:CC:DD:EE:01", -50)];

        assert_eq!(session.update(&batch), ["AA:BB:CC:DD:EE:01"]);
        assert!(session.update(&batch).is_empty());
        assert_eq!(session.count(), 1);
    }

    #[test]
    fn discovered_follow_batch_order() {
        let session = Session::new();
        session.update(&[network("AA:00:00:00:00:02", -60)]);

        let batch = vec![
            network("AA:00:00:00:00:03", -40),
            network("AA:00:00:00:00:02", -45),
            network("AA:00:00:00:00:01", -70),
        ];
        assert_eq!(session.update(&batch), ["AA:00:00:00:00:03", "AA:00:00:00:00:01"]);
        assert_eq!(session.count(), 3);
    }

    #[test]
    fn history_keeps_most_recent_window() {
        let session = Session::new();
        for signal in -65..-50 {
            session.update(&[network("AA:BB:CC:DD:EE:01", signal)]);
        }

        let history = session.get("AA:BB:CC:DD:EE:01").unwrap();
        assert_eq!(history.samples().len(), MAX_HISTORY);
        assert_eq!(history.samples().collect::<Vec<_>>(), (-60..-50).collect::<Vec<_>>());
    }

    #[test]
    fn extrema_cover_evicted_samples() {
        let session = Session::new();
        for signal in [-40, -70, -55] {
            session.update(&[network("AA:BB:CC:DD:EE:01", signal)]);
        }
        let history = session.get("AA:BB:CC:DD:EE:01").unwrap();
        assert_eq!(history.min_signal(), -70);
        assert_eq!(history.max_signal(), -40);

        for _ in 0..MAX_HISTORY {
            session.update(&[network("AA:BB:CC:DD:EE:01", -60)]);
        }
        let history = session.get("AA:BB:CC:DD:EE:01").unwrap();
        assert!(history.samples().all(|s| s == -60));
        assert_eq!(history.min_signal(), -70);
        assert_eq!(history.max_signal(), -40);
    }

    #[test]
    fn extrema_do_not_depend_on_arrival_order() {
        for order in [[-40, -70, -55], [-55, -40, -70], [-70, -55, -40]] {
            let session = Session::new();
            for signal in order {
                session.update(&[network("AA:BB:CC:DD:EE:01", signal)]);
            }
            let history = session.get("AA:BB:CC:DD:EE:01").unwrap();
            assert_eq!((history.min_signal(), history.max_signal()), (-70, -40));
        }
    }

    #[test]
    fn timestamps_move_forward() {
        let session = Session::new();
        let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let t1 = t0 + Duration::from_secs(10);

        session.update_at(&[network("AA:BB:CC:DD:EE:01", -50)], t0);
        session.update_at(&[network("AA:BB:CC:DD:EE:01", -51)], t1);

        let history = session.get("AA:BB:CC:DD:EE:01").unwrap();
        assert_eq!(history.first_seen(), t0);
        assert_eq!(history.last_seen(), t1);

        session.update_at(&[network("AA:BB:CC:DD:EE:01", -52)], t0 - Duration::from_secs(5));
        let history = session.get("AA:BB:CC:DD:EE:01").unwrap();
        assert!(history.first_seen() <= history.last_seen());
    }

    #[test]
    fn unknown_address_is_not_found() {
        let session = Session::new();
        session.update(&[network("AA:BB:CC:DD:EE:01", 0)]);
        assert!(session.get("AA:BB:CC:DD:EE:02").is_none());
        assert_eq!(session.get("AA:BB:CC:DD:EE:01").unwrap().max_signal(), 0);
    }

    #[test]
    fn duplicate_in_one_batch_counts_as_two_updates() {
        let session = Session::new();
        let batch = vec![network("AA:BB:CC:DD:EE:01", -50), network("AA:BB:CC:DD:EE:01", -60)];
        assert_eq!(session.update(&batch), ["AA:BB:CC:DD:EE:01"]);
        let history = session.get("AA:BB:CC:DD:EE:01").unwrap();
        assert_eq!(history.samples().collect::<Vec<_>>(), [-50, -60]);
    }

    #[test]
    fn snapshot_is_detached() {
        let session = Session::new();
        session.update(&[network("AA:BB:CC:DD:EE:01", -50)]);
        let before = session.get("AA:BB:CC:DD:EE:01").unwrap();
        session.update(&[network("AA:BB:CC:DD:EE:01", -30)]);
        assert_eq!(before.samples().collect::<Vec<_>>(), [-50]);
        assert_eq!(before.max_signal(), -50);
    }
}
