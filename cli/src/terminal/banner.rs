use colored::*;

use crate::terminal::{colors, print};

const BANNER_0: &str = r#"
      ███████╗██████╗ ███████╗ ██████╗████████╗██████╗
      ██╔════╝██╔══██╗██╔════╝██╔════╝╚══██╔══╝██╔══██╗
      ███████╗██████╔╝█████╗  ██║        ██║   ██████╔╝
      ╚════██║██╔═══╝ ██╔══╝  ██║        ██║   ██╔══██╗
      ███████║██║     ███████╗╚██████╗   ██║   ██║  ██║
      ╚══════╝╚═╝     ╚══════╝ ╚═════╝   ╚═╝   ╚═╝  ╚═╝
"#;

const BANNER_1: &str = r#"
         ___  ___  ___  ___  _____  ___   __  __  ___  ___   _   _  _
        / __|| _ \| __|/ __||_   _|| _ \ / / / / / __|/ __| /_\ | \| |
        \__ \|  _/| _|| (__   | |  |   // / / /  \__ \ (__ / _ \| .` |
        |___/|_|  |___|\___|  |_|  |_|_\_/ /_/   |___/\___/_/ \_\_|\_|
"#;

const BANNERS: [&str; 2] = [BANNER_0, BANNER_1];

pub fn print() {
    let idx: usize = rand::random_range(0..BANNERS.len());
    let color = if idx == 0 { colors::MAGENTA } else { colors::CYAN };
    print::print(&format!("{}", BANNERS[idx].color(color)));
}
