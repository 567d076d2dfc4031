use colored::*;

use crate::terminal::{colors, print};
use spectr_common::{config::Config, success};
use spectr_core::interface;

/// Interface name reported in demo mode, where nothing is detected.
const DEMO_INTERFACE: &str = "wlan0";

pub async fn interfaces(cfg: &Config) -> anyhow::Result<()> {
    print::header("wireless interfaces", cfg.quiet);

    let (name, origin) = match (&cfg.interface, cfg.demo) {
        (Some(name), _) => (name.clone(), "user supplied"),
        (None, true) => (DEMO_INTERFACE.to_string(), "simulated"),
        (None, false) => (interface::detect_interface().await?, "detected via iw"),
    };

    print::aligned_line("Interface", name.color(colors::CYAN).bold());
    print::aligned_line("Source", origin);
    if cfg.quiet > 0 {
        success!("Using {}", name);
    }
    Ok(())
}
