use std::time::{Duration, Instant, SystemTime};

use colored::*;
use tracing::Instrument;

use crate::{mprint, terminal::{colors, format, print, spinner}};
use spectr_common::{config::Config, network::Network, success};
use spectr_core::discovery::ScanService;
use spectr_core::session::Session;

/// Scans `rounds` times, `cfg.refresh` apart, and prints the last batch with
/// the signal history gathered across rounds.
pub async fn scan(service: &ScanService, rounds: u32, cfg: &Config) -> anyhow::Result<()> {
    let rounds = rounds.max(1);
    let session = Session::new();
    let span = spinner::scan_span(service.source().interface());

    let start_time: Instant = Instant::now();
    let networks: Vec<Network> = async {
        let mut latest: Vec<Network> = Vec::new();
        for round in 1..=rounds {
            if round > 1 {
                tokio::time::sleep(cfg.refresh).await;
            }
            latest = service.scan().await?;
            session.update(&latest);
            spinner::report_round(&tracing::Span::current(), round, rounds, latest.len());
        }
        anyhow::Ok(latest)
    }
    .instrument(span)
    .await?;

    scan_ends(service, &networks, &session, start_time.elapsed(), cfg);
    Ok(())
}

fn scan_ends(
    service: &ScanService,
    networks: &[Network],
    session: &Session,
    total_time: Duration,
    cfg: &Config,
) {
    if networks.is_empty() {
        no_networks_found(cfg);
        return;
    }

    if cfg.quiet > 0 {
        mprint!();
    }

    print::header("Wireless Networks", cfg.quiet);
    print_networks(service, networks, session, cfg);
    print_summary(networks, session.count(), total_time, cfg);
}

fn no_networks_found(cfg: &Config) {
    print::header("ZERO NETWORKS DETECTED", cfg.quiet);
    print::no_results();
}

fn print_networks(service: &ScanService, networks: &[Network], session: &Session, cfg: &Config) {
    let now = SystemTime::now();
    for (idx, network) in networks.iter().enumerate() {
        match cfg.quiet {
            2 => {}
            _ => {
                let tag = format!("{} {} dBm", format::bar_string(network.signal), network.signal);
                print::tree_head(idx, &network.ssid, tag);
                let history = session.get(&network.bssid);
                let vendor = service.vendor(&network.bssid);
                print::as_tree_one_level(&format::network_details(network, history.as_ref(), &vendor, now));
            }
        }
        if idx + 1 != networks.len() && cfg.quiet < 2 {
            mprint!();
        }
    }
}

fn print_summary(networks: &[Network], tracked: usize, total_time: Duration, cfg: &Config) {
    let open = networks
        .iter()
        .filter(|n| n.security == spectr_common::network::Security::Open)
        .count();

    let found: ColoredString = format!("{} networks", networks.len()).bold().green();
    let open: ColoredString = format!("{open} open").bold().color(colors::RED);
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let mut output: String = format!("Scan Complete: {found} ({open}) in {total_time}");
    if tracked > networks.len() {
        output.push_str(&format!(", {tracked} seen overall"));
    }
    let output: ColoredString = output.color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}
