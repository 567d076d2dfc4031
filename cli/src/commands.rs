pub mod interfaces;
pub mod scan;
pub mod watch;

use std::time::Duration;

use clap::{Parser, Subcommand};
use spectr_common::config::{Config, DEFAULT_REFRESH};

#[derive(Parser, Debug)]
#[command(name = "spectr")]
#[command(version, about = "A live WiFi spectrum analyzer.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use simulated scan data instead of the wireless interface
    #[arg(long, global = true)]
    pub demo: bool,

    /// Wireless interface to scan (detected when omitted)
    #[arg(short, long, global = true, value_name = "IFACE")]
    pub interface: Option<String>,

    /// Seed for the simulated data, for reproducible demo runs
    #[arg(long, global = true, value_name = "N")]
    pub seed: Option<u64>,

    /// Seconds between automatic rescans
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        default_value_t = DEFAULT_REFRESH.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub refresh: u64,

    /// Less output; repeat for even less
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Live full-screen dashboard (default)
    #[command(alias = "w")]
    Watch,
    /// Scan once and print every network found
    #[command(alias = "s")]
    Scan {
        /// Number of scans to run before reporting
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: u32,
    },
    /// Show the wireless interface that would be scanned
    #[command(alias = "i")]
    Interfaces,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Watch)
    }

    pub fn config(&self) -> Config {
        Config {
            interface: self.interface.clone(),
            demo: self.demo,
            seed: self.seed,
            refresh: Duration::from_secs(self.refresh),
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
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

    fn parse(args: &[&str]) -> CommandLine {
        CommandLine::try_parse_from(std::iter::once("spectr").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_watch() {
        let cli = parse(&[]);
        assert_eq!(cli.command(), Commands::Watch);

        let cfg = cli.config();
        assert!(!cfg.demo);
        assert_eq!(cfg.refresh, DEFAULT_REFRESH);
        assert_eq!(cfg.interface, None);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn aliases() {
        assert_eq!(parse(&["w"]).command(), Commands::Watch);
        assert_eq!(parse(&["s"]).command(), Commands::Scan { rounds: 1 });
        assert_eq!(parse(&["i"]).command(), Commands::Interfaces);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["scan", "-n", "3", "--demo", "--seed", "7", "-qq", "-i", "wlp2s0"]);
        assert_eq!(cli.command(), Commands::Scan { rounds: 3 });

        let cfg = cli.config();
        assert!(cfg.demo);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.quiet, 2);
        assert_eq!(cfg.interface.as_deref(), Some("wlp2s0"));
    }

    #[test]
    fn refresh_must_be_positive() {
        assert!(CommandLine::try_parse_from(["spectr", "--refresh", "0"]).is_err());
        assert_eq!(parse(&["--refresh", "3"]).config().refresh, Duration::from_secs(3));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(CommandLine::try_parse_from(["spectr", "listen"]).is_err());
    }
}
