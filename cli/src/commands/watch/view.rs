use std::time::{Duration, Instant};

use spectr_common::network::Network;

use crate::terminal::input::Key;

/// How long the "new networks" alert stays in the footer.
pub const ALERT_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Signal,
    Ssid,
    Channel,
    Security,
}

impl SortKey {
    pub fn next(self) -> Self {
        match self {
            SortKey::Signal => SortKey::Ssid,
            SortKey::Ssid => SortKey::Channel,
            SortKey::Channel => SortKey::Security,
            SortKey::Security => SortKey::Signal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Signal => "SIGNAL",
            SortKey::Ssid => "SSID",
            SortKey::Channel => "CHANNEL",
            SortKey::Security => "SECURITY",
        }
    }

    /// Stable sort, so ties keep the order the scan produced.
    pub fn apply(self, networks: &mut [Network]) {
        match self {
            SortKey::Signal => networks.sort_by(|a, b| b.signal.cmp(&a.signal)),
            SortKey::Ssid => networks.sort_by_cached_key(|n| n.ssid.to_lowercase()),
            SortKey::Channel => networks.sort_by_key(|n| n.channel),
            SortKey::Security => networks.sort_by_key(|n| n.security),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer {
    Help,
    Alert { count: usize, until: Instant },
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Redraw,
    Refresh,
    Quit,
}

/// Everything the dashboard draws that is not owned by the session.
#[derive(Debug)]
pub struct View {
    pub interface: String,
    pub demo: bool,
    pub refresh: Duration,
    pub networks: Vec<Network>,
    pub sort: SortKey,
    pub selected: usize,
    pub detail: bool,
    pub scanning: bool,
    pub last_scan: Option<Instant>,
    pub footer: Footer,
}

impl View {
    pub fn new(interface: &str, demo: bool, refresh: Duration) -> Self {
        Self {
            interface: interface.to_string(),
            demo,
            refresh,
            networks: Vec::new(),
            sort: SortKey::default(),
            selected: 0,
            detail: false,
            scanning: false,
            last_scan: None,
            footer: Footer::Help,
        }
    }

    pub fn selected_network(&self) -> Option<&Network> {
        self.networks.get(self.selected)
    }

    pub fn handle_key(&mut self, key: Key) -> Action {
        if self.detail {
            return match key {
                Key::Back | Key::Select => {
                    self.detail = false;
                    Action::Redraw
                }
                Key::Quit => Action::Quit,
                _ => Action::None,
            };
        }

        match key {
            Key::Quit | Key::Back => Action::Quit,
            Key::Refresh => Action::Refresh,
            Key::CycleSort => {
                self.sort = self.sort.next();
                self.resort();
                Action::Redraw
            }
            Key::Up => {
                self.selected = self.selected.saturating_sub(1);
                Action::Redraw
            }
            Key::Down => {
                if self.selected + 1 < self.networks.len() {
                    self.selected += 1;
                }
                Action::Redraw
            }
            Key::Select => {
                if self.selected_network().is_some() {
                    self.detail = true;
                }
                Action::Redraw
            }
        }
    }

    /// Replaces the table with a fresh batch. `new_count` is how many
    /// addresses the session had never seen; `tracked` is the session size
    /// after the update. The very first batch never raises an alert.
    pub fn apply_scan(&mut self, networks: Vec<Network>, new_count: usize, tracked: usize, now: Instant) {
        let selected_bssid = self.selected_network().map(|n| n.bssid.clone());

        self.networks = networks;
        self.scanning = false;
        self.last_scan = Some(now);
        self.resort();
        self.reselect(selected_bssid.as_deref());

        if new_count > 0 && tracked > new_count {
            self.footer = Footer::Alert { count: new_count, until: now + ALERT_TTL };
        } else if matches!(self.footer, Footer::Error(_)) {
            self.footer = Footer::Help;
        }
    }

    pub fn apply_error(&mut self, message: String) {
        self.scanning = false;
        self.footer = Footer::Error(message);
    }

    /// Falls back to the help footer once an alert runs out.
    pub fn tick(&mut self, now: Instant) {
        if let Footer::Alert { until, .. } = self.footer
            && now >= until
        {
            self.footer = Footer::Help;
        }
    }

    fn resort(&mut self) {
        let selected_bssid = self.selected_network().map(|n| n.bssid.clone());
        self.sort.apply(&mut self.networks);
        self.reselect(selected_bssid.as_deref());
    }

    fn reselect(&mut self, bssid: Option<&str>) {
        let found = bssid.and_then(|bssid| self.networks.iter().position(|n| n.bssid == bssid));
        self.selected = match found {
            Some(idx) => idx,
            None => self.selected.min(self.networks.len().saturating_sub(1)),
        };
        if self.networks.is_empty() {
            self.detail = false;
        }
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
