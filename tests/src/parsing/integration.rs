use std::time::SystemTime;

use spectr_common::network::{Band, HIDDEN_SSID, Network, Security, mac};
use spectr_common::vendors::VendorRepository;
use spectr_core::parser;
use spectr_core::scanner::{DemoSource, ScanSource};
use spectr_core::vendors::{Vendor, lookup_vendor};

const IW_SCAN: &str = include_str!("../../fixtures/iw_scan.txt");

fn parse_fixture() -> Vec<Network> {
    parser::parse_scan_output(IW_SCAN)
}

fn by_bssid<'a>(networks: &'a [Network], bssid: &str) -> &'a Network {
    networks
        .iter()
        .find(|n| n.bssid == bssid)
        .unwrap_or_else(|| panic!("{bssid} missing from parsed output"))
}

#[test]
fn recorded_scan_yields_every_access_point() {
    let networks = parse_fixture();
    assert_eq!(networks.len(), 7);
}

#[test]
fn recorded_scan_is_ordered_strongest_first() {
    let networks = parse_fixture();
    let order: Vec<&str> = networks.iter().map(|n| n.bssid.as_str()).collect();

    // the two -58 dBm networks keep their order of appearance
    assert_eq!(
        order,
        [
            "A4:2B:8C:D1:E5:F0",
            "00:1E:58:AA:10:42",
            "00:0F:66:2A:31:BB",
            "7A:45:58:C0:1D:93",
            "90:9A:4A:55:61:E2",
            "3C:84:6A:12:9B:07",
            "E8:48:B8:7C:00:31",
        ]
    );
    assert!(networks.windows(2).all(|w| w[0].signal >= w[1].signal));
}

#[test]
fn recorded_scan_fields() {
    let networks = parse_fixture();

    let home = by_bssid(&networks, "A4:2B:8C:D1:E5:F0");
    assert_eq!(home.ssid, "NETGEAR-5G-Home");
    assert_eq!(home.signal, -42);
    assert_eq!(home.frequency, 5180);
    assert_eq!(home.channel, 36);
    assert_eq!(home.band(), Band::FiveGhz);

    let hidden = by_bssid(&networks, "3C:84:6A:12:9B:07");
    assert_eq!(hidden.ssid, HIDDEN_SSID);
    assert!(hidden.is_hidden());
    assert_eq!(hidden.channel, 6);

    let six_ghz = by_bssid(&networks, "90:9A:4A:55:61:E2");
    assert_eq!(six_ghz.channel, 5);
    assert_eq!(six_ghz.band(), Band::SixGhz);

    let unii3 = by_bssid(&networks, "7A:45:58:C0:1D:93");
    assert_eq!(unii3.channel, 149);
}

#[test]
fn recorded_scan_security() {
    let networks = parse_fixture();
    let security = |bssid: &str| by_bssid(&networks, bssid).security;

    assert_eq!(security("A4:2B:8C:D1:E5:F0"), Security::Wpa2);
    assert_eq!(security("00:1E:58:AA:10:42"), Security::Wpa2Wpa);
    assert_eq!(security("90:9A:4A:55:61:E2"), Security::Wpa3);
    assert_eq!(security("00:0F:66:2A:31:BB"), Security::Wep);
    assert_eq!(security("E8:48:B8:7C:00:31"), Security::Open);
}

#[test]
fn parsing_is_deterministic_apart_from_timestamps() {
    let at = SystemTime::now();
    let first = parser::parse_scan_output_at(IW_SCAN, at);
    let second = parser::parse_scan_output(IW_SCAN);

    assert_eq!(first.len(), second.len());
    assert!(first.iter().zip(&second).all(|(a, b)| a.same_reading(b)));
}

#[test]
fn malformed_blocks_are_skipped_not_fatal() {
    let mangled = format!(
        "BSS zz:zz:zz:zz:zz:zz(on wlan0)\n\tsignal: -30.00 dBm\n\
         BSS 11:22:33:44:55:667(on wlan0)\n\tsignal: -31.00 dBm\n{IW_SCAN}"
    );
    let networks = parser::parse_scan_output(&mangled);
    assert_eq!(networks.len(), 7);
    assert_eq!(networks[0].signal, -42);
}

#[test]
fn empty_and_garbage_input() {
    assert!(parser::parse_scan_output("").is_empty());
    assert!(parser::parse_scan_output("command failed: Device or resource busy (-16)").is_empty());
}

struct NoVendors;

impl VendorRepository for NoVendors {
    fn get_vendor(&self, _mac_addr: spectr_common::network::mac::MacAddr) -> Option<String> {
        None
    }
}

#[test]
fn randomised_bssid_reports_local_vendor() -> anyhow::Result<()> {
    let networks = parse_fixture();
    let hotspot = by_bssid(&networks, "7A:45:58:C0:1D:93");

    assert!(mac::is_locally_administered(mac::parse(&hotspot.bssid)?));
    assert_eq!(lookup_vendor(&NoVendors, &hotspot.bssid), Vendor::Local);
    assert_eq!(lookup_vendor(&NoVendors, "A4:2B:8C:D1:E5:F0"), Vendor::Unknown);
    Ok(())
}

#[tokio::test]
async fn demo_output_goes_through_the_same_parser() -> anyhow::Result<()> {
    let source = DemoSource::new(Some(42));
    let raw = source.capture().await?;
    let networks = parser::parse_scan_output(&raw);

    assert!(networks.len() >= 16);
    assert!(networks.windows(2).all(|w| w[0].signal >= w[1].signal));
    assert!(networks.iter().all(|n| n.frequency > 0 && n.channel > 0));
    Ok(())
}
