mod commands;
mod terminal;

use colored::*;
use commands::{CommandLine, Commands, interfaces, scan, watch};
use spectr_common::{config::Config, error};
use spectr_core::{discovery::ScanService, scanner, vendors::MacOuiRepo};
use terminal::{colors, logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let command = commands.command();
    let cfg = commands.config();

    logging::init_logging(cfg.quiet);

    match command {
        Commands::Interfaces => {
            print::banner(cfg.no_banner, cfg.quiet);
            interfaces::interfaces(&cfg).await
        }
        Commands::Scan { rounds } => {
            print::banner(cfg.no_banner, cfg.quiet);
            ensure_privileges(&cfg)?;
            print::header("starting scanner", cfg.quiet);
            let service = build_service(&cfg).await?;
            scan::scan(&service, rounds, &cfg).await
        }
        Commands::Watch => {
            ensure_privileges(&cfg)?;
            let service = build_service(&cfg).await?;
            watch::watch(service, &cfg).await
        }
    }
}

async fn build_service(cfg: &Config) -> anyhow::Result<ScanService> {
    let source = scanner::from_config(cfg).await?;
    Ok(ScanService::new(source, Box::new(MacOuiRepo)))
}

/// Live scans need root; demo mode never touches the interface.
fn ensure_privileges(cfg: &Config) -> anyhow::Result<()> {
    if cfg.demo || is_root::is_root() {
        return Ok(());
    }

    error!("Live scanning requires root privileges.");
    print::print_status(format!("Run with {}", "sudo spectr".color(colors::CYAN).bold()));
    print::print_status(format!("Or try {}", "spectr --demo".color(colors::CYAN).bold()));
    anyhow::bail!("insufficient privileges for a live scan");
}
