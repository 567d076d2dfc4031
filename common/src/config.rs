use std::time::Duration;

pub const DEFAULT_REFRESH: Duration = Duration::from_secs(10);

pub struct Config {
    /// Wireless interface to scan, detected through `iw dev` when absent.
    pub interface: Option<String>,
    /// Replaces the scan tool with simulated output.
    pub demo: bool,
    /// Seed for the demo generator. Ignored outside demo mode.
    pub seed: Option<u64>,
    /// Time between automatic rescans in the dashboard.
    pub refresh: Duration,
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interface: None,
            demo: false,
            seed: None,
            refresh: DEFAULT_REFRESH,
            quiet: 0,
            no_banner: false,
        }
    }
}
