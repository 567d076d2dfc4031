use std::io::{self, Write};

use colored::*;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::terminal::logging;

/// Owns the terminal while the dashboard runs. Raw mode, the alternate
/// screen and the cursor are restored on drop, including on early returns.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        logging::set_muted(true);
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        logging::set_muted(false);
    }
}

/// Columns and rows, with a sane fallback when the size cannot be read.
pub fn size() -> (u16, u16) {
    terminal::size().unwrap_or((100, 30))
}

/// Paints a whole frame. Raw mode needs explicit carriage returns.
pub fn draw<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    queue!(out, MoveTo(0, 0))?;
    for (i, line) in lines.iter().enumerate() {
        write!(out, "{}", line)?;
        queue!(out, Clear(ClearType::UntilNewLine))?;
        if i + 1 < lines.len() {
            write!(out, "\r\n")?;
        }
    }
    queue!(out, Clear(ClearType::FromCursorDown))?;
    out.flush()
}

/// Truncates `text` to `width` display columns, then pads it on the right.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Like [`fit`] but pads on the left.
pub fn fit_right(text: &str, width: usize) -> String {
    let fitted = fit(text, width);
    let trimmed = fitted.trim_end();
    format!("{}{}", " ".repeat(width - trimmed.width()), trimmed)
}

pub fn rule(width: usize) -> String {
    "─".repeat(width).color(Color::BrightBlack).to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
