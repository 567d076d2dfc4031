use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime};

use anyhow::Context;
use spectr_common::network::{Network, Security};
use spectr_core::parser;
use spectr_core::session::{MAX_HISTORY, Session};

const IW_SCAN: &str = include_str!("../../fixtures/iw_scan.txt");

fn network(bssid: &str, signal: i32) -> Network {
    Network {
        bssid: bssid.to_string(),
        ssid: "lab".to_string(),
        signal,
        frequency: 2437,
        channel: 6,
        security: Security::Wpa2,
        observed_at: SystemTime::now(),
    }
}

fn bssid(thread: usize, idx: usize) -> String {
    format!("02:00:00:00:{:02X}:{:02X}", thread, idx)
}

#[test]
fn concurrent_updates_on_disjoint_sets_are_all_counted() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    let session = Arc::new(Session::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                let mut discovered = 0;
                for round in 0..5 {
                    let batch: Vec<Network> = (0..PER_THREAD)
                        .map(|i| network(&bssid(t, i), -40 - round))
                        .collect();
                    discovered += session.update(&batch).len();
                }
                discovered
            })
        })
        .collect();

    let discovered: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(session.count(), THREADS * PER_THREAD);
    assert_eq!(discovered, THREADS * PER_THREAD);
}

#[test]
fn concurrent_updates_on_shared_address_report_it_once() {
    let session = Arc::new(Session::new());
    let handles: Vec<_> = (0..16)
        .map(|_| {
            let session = Arc::clone(&session);
            thread::spawn(move || session.update(&[network("A4:2B:8C:D1:E5:F0", -50)]).len())
        })
        .collect();

    let reported: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(reported, 1);
    assert_eq!(session.count(), 1);

    let history = session.get("A4:2B:8C:D1:E5:F0").unwrap();
    assert_eq!(history.samples().len(), MAX_HISTORY);
}

#[test]
fn readers_see_consistent_snapshots_while_writers_run() {
    let session = Arc::new(Session::new());
    session.update(&[network("A4:2B:8C:D1:E5:F0", -50)]);

    let writer = {
        let session = Arc::clone(&session);
        thread::spawn(move || {
            for i in 0..500 {
                session.update(&[network("A4:2B:8C:D1:E5:F0", -30 - (i % 60))]);
            }
        })
    };

    for _ in 0..500 {
        let history = session.get("A4:2B:8C:D1:E5:F0").unwrap();
        let samples: Vec<i32> = history.samples().collect();
        assert!(!samples.is_empty() && samples.len() <= MAX_HISTORY);
        assert!(history.min_signal() <= *samples.iter().min().unwrap());
        assert!(history.max_signal() >= *samples.iter().max().unwrap());
    }

    writer.join().unwrap();
}

#[test]
fn fifteen_updates_keep_ten_most_recent() -> anyhow::Result<()> {
    let session = Session::new();
    let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);

    for i in 0..15 {
        session.update_at(&[network("A4:2B:8C:D1:E5:F0", -30 - i)], start + Duration::from_secs(i as u64));
    }

    let history = session
        .get("A4:2B:8C:D1:E5:F0")
        .context("device was never tracked")?;
    let samples: Vec<i32> = history.samples().collect();
    assert_eq!(samples, (5..15).map(|i| -30 - i).collect::<Vec<i32>>());
    assert_eq!(history.first_seen(), start);
    assert_eq!(history.last_seen(), start + Duration::from_secs(14));
    Ok(())
}

#[test]
fn replaying_a_recorded_scan_builds_history() -> anyhow::Result<()> {
    let session = Session::new();

    let first = session.update(&parser::parse_scan_output(IW_SCAN));
    assert_eq!(first.len(), 7);
    assert_eq!(first[0], "A4:2B:8C:D1:E5:F0");

    let second = session.update(&parser::parse_scan_output(IW_SCAN));
    assert!(second.is_empty());
    assert_eq!(session.count(), 7);

    let home = session
        .get("A4:2B:8C:D1:E5:F0")
        .context("associated access point was never tracked")?;
    assert_eq!(home.samples().collect::<Vec<i32>>(), [-42, -42]);
    assert_eq!(home.sparkline(), "▆▆");
    Ok(())
}

#[test]
fn unknown_address_is_not_found() {
    let session = Session::new();
    session.update(&parser::parse_scan_output(IW_SCAN));
    assert!(session.get("DE:AD:BE:EF:00:01").is_none());
}
