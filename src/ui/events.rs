use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::api::{Character, FetchError};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A fetch finished. Tagged with the activation it was started for.
    Load {
        generation: u64,
        result: Result<Vec<Character>, FetchError>,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        let spawned = thread::Builder::new()
            .name("input".to_string())
            .spawn(move || input_loop(event_tx, tick_rate));
        if let Err(err) = spawned {
            tracing::error!(error = %err, "Failed to spawn input thread");
        }

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

fn input_loop(tx: Sender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        let forwarded = match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx.send(AppEvent::Key(key)).is_ok()
                }
                Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)).is_ok(),
                Ok(_) => true,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal read failed");
                    false
                }
            },
            Ok(false) => true,
            Err(err) => {
                tracing::error!(error = %err, "Terminal poll failed");
                false
            }
        };

        // Receiver gone: the view has shut down.
        if !forwarded {
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
