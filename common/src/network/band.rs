use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    TwoGhz,
    FiveGhz,
    SixGhz,
}

impl Band {
    pub fn from_frequency(freq: u32) -> Self {
        match freq {
            5955.. => Band::SixGhz,
            5000.. => Band::FiveGhz,
            _ => Band::TwoGhz,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::TwoGhz => "2.4G",
            Band::FiveGhz => "5G",
            Band::SixGhz => "6G",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a carrier frequency to its IEEE 802.11 channel number.
///
/// Off-grid frequencies inside a band truncate toward the lower channel.
/// Frequencies outside every band map to `0`.
pub fn channel_from_frequency(freq: u32) -> u32 {
    match freq {
        2412..=2472 => (freq - 2407) / 5,
        2484 => 14,
        5180..=5825 => (freq - 5000) / 5,
        5955..=7115 => (freq - 5950) / 5,
        _ => 0,
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
