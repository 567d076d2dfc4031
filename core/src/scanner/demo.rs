//! Simulated scan output for running without a wireless card or root.
//!
//! The generator writes the same text `iw` would, so demo runs go through the
//! real parser. It owns its RNG and can be seeded for reproducible sessions.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use spectr_common::{error::ScanError, network::Security};

use super::ScanSource;

const DEMO_INTERFACE: &str = "wlan0";
const JITTER_DBM: i32 = 3;
const ROAMER_CHANCE: f64 = 0.3;

struct MockAp {
    ssid: &'static str,
    bssid: &'static str,
    security: Security,
    base_signal: i32,
    freq: u32,
}

const fn ap(
    ssid: &'static str,
    bssid: &'static str,
    security: Security,
    base_signal: i32,
    freq: u32,
) -> MockAp {
    MockAp {
        ssid,
        bssid,
        security,
        base_signal,
        freq,
    }
}

const ROSTER: [MockAp; 16] = [
    ap("NETGEAR-5G-Home", "A4:2B:8C:D1:E5:F0", Security::Wpa2, -35, 5180),
    ap("xfinitywifi", "B0:C7:45:3A:91:DE", Security::Open, -42, 2437),
    ap("FBI_Surveillance_Van_7", "C8:3A:35:FF:02:11", Security::Wpa3, -48, 5240),
    ap("Pretty Fly for a WiFi", "D4:01:C3:7E:A8:55", Security::Wpa2, -55, 2412),
    ap("The LAN Before Time", "10:68:3F:6B:33:C7", Security::Wpa2, -58, 2462),
    ap("Bill Wi the Science Fi", "28:C6:8E:CE:47:9B", Security::Wpa2Wpa, -63, 2427),
    ap("DROP TABLE *;--", "00:0E:8E:BE:EF:00", Security::Wpa2, -65, 5300),
    ap("Skynet Global Defense", "00:09:0F:44:55:66", Security::Wpa3, -68, 5500),
    ap("404 Network Unavail", "AC:67:06:DD:EE:01", Security::Wpa2, -72, 2452),
    ap("wu-tang LAN", "34:A1:F7:8C:22:D0", Security::Wpa2, -74, 2417),
    ap("", "B4:FB:E4:BC:DE:F0", Security::Wpa2, -76, 5220),
    ap("linksys", "78:A0:51:3E:C9:44", Security::Wep, -78, 2422),
    ap("DIRECT-roku-123", "9C:B2:E4:16:F8:73", Security::Wpa2, -82, 2447),
    ap("HP-Print-A1-Officejet", "B0:5A:DA:01:23:45", Security::Open, -85, 2432),
    ap("oldrouter", "D0:E1:F2:03:14:25", Security::Open, -88, 2442),
    ap("TP-Link_Guest_5G", "50:C7:BF:15:26:37", Security::Wpa2, -91, 5745),
];

/// Shows up in roughly a third of scans to exercise new-network alerts.
const ROAMER: MockAp = ap("GoogleGuest-5G", "A4:77:33:AB:CD:EF", Security::Wpa2, -60, 5500);

pub struct DemoSource {
    rng: Mutex<StdRng>,
}

impl DemoSource {
    /// A fixed `seed` replays the same sequence of scans.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Renders one scan worth of `iw` output.
    pub fn render(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let mut out = String::new();

        for ap in &ROSTER {
            let signal = ap.base_signal + rng.random_range(-JITTER_DBM..=JITTER_DBM);
            write_block(&mut out, ap, signal);
        }

        if rng.random_bool(ROAMER_CHANCE) {
            let signal = ROAMER.base_signal + rng.random_range(-JITTER_DBM..=JITTER_DBM);
            write_block(&mut out, &ROAMER, signal);
        }

        out
    }
}

#[async_trait]
impl ScanSource for DemoSource {
    fn interface(&self) -> &str {
        DEMO_INTERFACE
    }

    fn is_demo(&self) -> bool {
        true
    }

    async fn capture(&self) -> Result<String, ScanError> {
        Ok(self.render())
    }
}

fn write_block(out: &mut String, ap: &MockAp, signal: i32) {
    let privacy = if ap.security == Security::Open { "" } else { " Privacy" };

    out.push_str(&format!(
        "BSS {}(on {DEMO_INTERFACE})\n",
        ap.bssid.to_ascii_lowercase()
    ));
    out.push_str("\tlast seen: 0 ms ago\n");
    out.push_str(&format!("\tfreq: {}\n", ap.freq));
    out.push_str("\tbeacon interval: 100 TUs\n");
    out.push_str(&format!("\tcapability: ESS{privacy} ShortSlotTime (0x0411)\n"));
    out.push_str(&format!("\tsignal: {signal}.00 dBm\n"));
    out.push_str(&format!("\tSSID: {}\n", ap.ssid));

    if ap.freq < 5000 {
        let channel = (ap.freq - 2407) / 5;
        out.push_str(&format!("\tDS Parameter set: channel {channel}\n"));
    }

    match ap.security {
        Security::Open | Security::Wep => {}
        Security::Wpa => out.push_str(WPA_ELEMENT),
        Security::Wpa2 => out.push_str(&rsn_element("PSK")),
        Security::Wpa2Wpa => {
            out.push_str(&rsn_element("PSK"));
            out.push_str(WPA_ELEMENT);
        }
        Security::Wpa3 => out.push_str(&rsn_element("PSK SAE")),
    }
}

const WPA_ELEMENT: &str = "\tWPA:\t * Version: 1\n\
                           \t\t * Group cipher: TKIP\n\
                           \t\t * Pairwise ciphers: TKIP\n\
                           \t\t * Authentication suites: PSK\n";

fn rsn_element(auth: &str) -> String {
    format!(
        "\tRSN:\t * Version: 1\n\
         \t\t * Group cipher: CCMP\n\
         \t\t * Pairwise ciphers: CCMP\n\
         \t\t * Authentication suites: {auth}\n\
         \t\t * Capabilities: 16-PTKSA-RC 1-GTKSA-RC (0x000c)\n"
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
