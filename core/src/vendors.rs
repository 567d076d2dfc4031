use std::fmt;
use std::sync::OnceLock;

use mac_oui::Oui;
use pnet::datalink::MacAddr;
use spectr_common::network::mac;
use spectr_common::vendors::VendorRepository;

static OUI_DB: OnceLock<Option<Oui>> = OnceLock::new();

/// Retrieves or initializes the **Organizationally unique identifier** database.
fn get_oui_db() -> Option<&'static Oui> {
    OUI_DB.get_or_init(|| Oui::default().ok()).as_ref()
}

pub struct MacOuiRepo;

impl VendorRepository for MacOuiRepo {
    fn get_vendor(&self, mac_addr: MacAddr) -> Option<String> {
        let oui_db: &Oui = get_oui_db()?;
        match oui_db.lookup_by_mac(&mac_addr.to_string()) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            Ok(None) => None,
            Err(_) => None,
        }
    }
}

/// Manufacturer label shown next to a BSSID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vendor {
    Known(String),
    /// Randomised or otherwise locally administered address.
    Local,
    Unknown,
}

impl Vendor {
    pub fn is_known(&self) -> bool {
        matches!(self, Vendor::Known(_))
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vendor::Known(name) => f.write_str(name),
            Vendor::Local => f.write_str("Local"),
            Vendor::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Resolves a BSSID string to a [`Vendor`]. Lookup happens at display time;
/// nothing is stored on the network record.
pub fn lookup_vendor(repo: &dyn VendorRepository, bssid: &str) -> Vendor {
    let Ok(mac_addr) = mac::parse(bssid) else {
        return Vendor::Unknown;
    };
    if mac::is_locally_administered(mac_addr) {
        return Vendor::Local;
    }
    repo.get_vendor(mac_addr).map_or(Vendor::Unknown, Vendor::Known)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
