//! # Network Discovery Service
//!
//! Implements the "scan once" use case shared by the one-shot report and the
//! live dashboard.

use spectr_common::{debug, error::ScanError, network::Network, vendors::VendorRepository};

use crate::parser;
use crate::scanner::ScanSource;
use crate::vendors::{self, Vendor};

/// Application Service for Network Discovery.
///
/// Orchestrates one scan by:
/// 1. delegating raw text capture to the [`ScanSource`] trait.
/// 2. parsing it into an ordered batch.
///
/// Vendor names are resolved on request rather than stored on each record.
pub struct ScanService {
    source: Box<dyn ScanSource>,
    vendor_repo: Box<dyn VendorRepository>,
}

impl ScanService {
    pub fn new(source: Box<dyn ScanSource>, vendor_repo: Box<dyn VendorRepository>) -> Self {
        Self {
            source,
            vendor_repo,
        }
    }

    pub fn source(&self) -> &dyn ScanSource {
        self.source.as_ref()
    }

    /// Captures and parses one scan, strongest signal first.
    pub async fn scan(&self) -> Result<Vec<Network>, ScanError> {
        let raw: String = self.source.capture().await?;
        let networks: Vec<Network> = parser::parse_scan_output(&raw);
        debug!(
            "parsed {} networks from {} bytes of scan output",
            networks.len(),
            raw.len()
        );
        Ok(networks)
    }

    pub fn vendor(&self, bssid: &str) -> Vendor {
        vendors::lookup_vendor(self.vendor_repo.as_ref(), bssid)
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
    use async_trait::async_trait;
    use pnet::datalink::MacAddr;

    struct CannedSource(&'static str);

    #[async_trait]
    impl ScanSource for CannedSource {
        fn interface(&self) -> &str {
            "test0"
        }

        async fn capture(&self) -> Result<String, ScanError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ScanSource for FailingSource {
        fn interface(&self) -> &str {
            "test0"
        }

        async fn capture(&self) -> Result<String, ScanError> {
            Err(ScanError::NoInterface)
        }
    }

    struct NoVendors;

    impl VendorRepository for NoVendors {
        fn get_vendor(&self, _mac_addr: MacAddr) -> Option<String> {
            None
        }
    }

    #[tokio::test]
    async fn scan_parses_captured_text() {
        let service = ScanService::new(
            Box::new(CannedSource(
                "BSS 00:09:0f:44:55:66(on test0)\n\tsignal: -68.00 dBm\n\tfreq: 5500\n",
            )),
            Box::new(NoVendors),
        );
        let networks = service.scan().await.unwrap();
        assert_eq!(networks.len(), 1);
        assert_eq!(networks[0].channel, 100);
        assert_eq!(service.source().interface(), "test0");
        assert_eq!(service.vendor(&networks[0].bssid), Vendor::Unknown);
    }

    #[tokio::test]
    async fn capture_errors_propagate() {
        let service = ScanService::new(Box::new(FailingSource), Box::new(NoVendors));
        assert!(matches!(service.scan().await, Err(ScanError::NoInterface)));
    }
}
