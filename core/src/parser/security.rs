//! Classification of broadcast security capabilities.

use spectr_common::network::Security;

/// Capability markers found in one block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub sae: bool,
    pub rsn: bool,
    pub wpa: bool,
    pub privacy: bool,
}

impl Markers {
    pub fn scan(block: &str) -> Self {
        Self {
            sae: block.contains("SAE"),
            rsn: block.contains("RSN:"),
            wpa: block.contains("WPA:"),
            privacy: block.contains("Privacy"),
        }
    }

    /// First match wins: SAE, then RSN with WPA, RSN, WPA, privacy bit.
    pub fn security(&self) -> Security {
        match *self {
            Markers { sae: true, .. } => Security::Wpa3,
            Markers { rsn: true, wpa: true, .. } => Security::Wpa2Wpa,
            Markers { rsn: true, .. } => Security::Wpa2,
            Markers { wpa: true, .. } => Security::Wpa,
            Markers { privacy: true, .. } => Security::Wep,
            _ => Security::Open,
        }
    }
}

pub fn classify(block: &str) -> Security {
    Markers::scan(block).security()
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

    #[test]
    fn sae_wins_over_everything() {
        let block = "\tcapability: ESS Privacy\n\tRSN:\t * Authentication suites: SAE\n\tWPA:\t * Version: 1\n";
        assert_eq!(classify(block), Security::Wpa3);
    }

    #[test]
    fn rsn_and_wpa_is_mixed_mode() {
        let block = "\tcapability: ESS Privacy\n\tRSN:\t * Version: 1\n\tWPA:\t * Version: 1\n";
        assert_eq!(classify(block), Security::Wpa2Wpa);
    }

    #[test]
    fn single_generation_markers() {
        assert_eq!(classify("\tRSN:\t * Version: 1\n"), Security::Wpa2);
        assert_eq!(classify("\tWPA:\t * Version: 1\n"), Security::Wpa);
    }

    #[test]
    fn privacy_without_wpa_is_wep() {
        assert_eq!(classify("\tcapability: ESS Privacy ShortSlotTime (0x0411)\n"), Security::Wep);
    }

    #[test]
    fn nothing_is_open() {
        assert_eq!(classify("\tcapability: ESS ShortSlotTime (0x0401)\n"), Security::Open);
        assert_eq!(classify(""), Security::Open);
    }

    #[test]
    fn markers_are_case_sensitive() {
        let markers = Markers::scan("\trsn: lower\n\twpa: lower\n\tprivacy\n");
        assert_eq!(markers, Markers::default());
    }
}
