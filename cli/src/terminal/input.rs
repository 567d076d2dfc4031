use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use spectr_common::debug;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Dashboard actions bound to the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Quit,
    Back,
    Refresh,
    CycleSort,
    Up,
    Down,
    Select,
}

pub fn map_key(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Quit),
        KeyCode::Esc => Some(Key::Back),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Key::Refresh),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::CycleSort),
        KeyCode::Up | KeyCode::Char('k') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Key::Down),
        KeyCode::Enter => Some(Key::Select),
        _ => None,
    }
}

/// Reads terminal events on a dedicated thread, since crossterm's reader
/// blocks. The thread exits once the receiving side is dropped.
pub fn spawn_key_reader() -> UnboundedReceiver<Key> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(e) => {
                    debug!("Terminal event reader stopped: {}", e);
                    return;
                }
            };

            let Event::Key(key_event) = event else {
                continue;
            };

            if let Some(key) = map_key(key_event)
                && tx.send(key).is_err()
            {
                return;
            }
        }
    });

    rx
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
