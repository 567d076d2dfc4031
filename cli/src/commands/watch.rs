pub mod fresh;
pub mod screen;
pub mod view;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

use spectr_common::{config::Config, error::ScanError, network::Network};
use spectr_core::discovery::ScanService;
use spectr_core::session::Session;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::terminal::dashboard::{self, TerminalGuard};
use crate::terminal::input;
use fresh::FreshMarks;
use screen::Frame;
use view::{Action, View};

const REDRAW_EVERY: Duration = Duration::from_secs(1);

/// Result of one background refresh, already folded into the session.
struct Refresh {
    networks: Vec<Network>,
    discovered: Vec<String>,
    tracked: usize,
}

pub async fn watch(service: ScanService, cfg: &Config) -> anyhow::Result<()> {
    let service = Arc::new(service);
    let session = Arc::new(Session::new());
    let source = service.source();
    let mut view = View::new(source.interface(), source.is_demo(), cfg.refresh);
    let mut fresh = FreshMarks::new();

    let _guard = TerminalGuard::enter()?;
    let mut keys = input::spawn_key_reader();
    let (tx, mut outcomes) = mpsc::channel::<Result<Refresh, ScanError>>(1);

    let mut refresh_timer = time::interval(cfg.refresh);
    refresh_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut redraw_timer = time::interval(REDRAW_EVERY);
    let mut stdout = io::stdout();

    loop {
        tokio::select! {
            _ = refresh_timer.tick() => {
                start_refresh(&mut view, &service, &session, &tx);
            }
            Some(outcome) = outcomes.recv() => {
                let now = Instant::now();
                match outcome {
                    Ok(refresh) => {
                        let new_count = refresh.discovered.len();
                        fresh.mark(refresh.discovered, now);
                        view.apply_scan(refresh.networks, new_count, refresh.tracked, now);
                    }
                    Err(e) => view.apply_error(e.to_string()),
                }
            }
            key = keys.recv() => {
                let Some(key) = key else { break };
                match view.handle_key(key) {
                    Action::Quit => break,
                    Action::Refresh => {
                        start_refresh(&mut view, &service, &session, &tx);
                        refresh_timer.reset();
                    }
                    Action::Redraw | Action::None => {}
                }
            }
            _ = redraw_timer.tick() => {}
        }

        let now = Instant::now();
        view.tick(now);
        fresh.expire(now);

        let vendor = |bssid: &str| service.vendor(bssid);
        let frame = Frame {
            session: &session,
            fresh: &fresh,
            vendor: &vendor,
            now,
            wall_clock: SystemTime::now(),
            size: dashboard::size(),
        };
        dashboard::draw(&mut stdout, &screen::render(&view, &frame))?;
    }

    Ok(())
}

/// Spawns a refresh unless one is already running.
fn start_refresh(
    view: &mut View,
    service: &Arc<ScanService>,
    session: &Arc<Session>,
    tx: &mpsc::Sender<Result<Refresh, ScanError>>,
) {
    if view.scanning {
        return;
    }
    view.scanning = true;

    let service = Arc::clone(service);
    let session = Arc::clone(session);
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = service.scan().await.map(|networks| {
            let discovered = session.update(&networks);
            Refresh {
                tracked: session.count(),
                networks,
                discovered,
            }
        });
        let _ = tx.send(outcome).await;
    });
}
