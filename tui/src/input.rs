//! Input handling for the Campus TUI.
//!
//! Terminal events are read on a blocking thread and fed through a bounded
//! channel so the render loop never blocks on input.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::debug;

use campus_engine::{App, Focus, Route};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Background reader feeding terminal events into the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    /// Stop the reader thread and wait for it to exit.
    pub async fn shutdown(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(join) = self.join.take() {
            let _ = join.await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Relaxed) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    return;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                return;
            }
        }
    }
}

/// Drain pending input, bounded per frame.
pub fn handle_events(app: &mut App, pump: &mut InputPump) -> Result<()> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        match pump.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => handle_event(app, &ev),
            Ok(InputMsg::Error(e)) => return Err(anyhow!("input error: {e}")),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                return Err(anyhow!("input channel disconnected"));
            }
        }
    }
    Ok(())
}

fn handle_event(app: &mut App, ev: &Event) {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, *key),
        Event::Resize(cols, _) => {
            debug!(cols, "terminal resized");
            app.set_viewport_cols(*cols);
        }
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global bindings.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('m') => {
            app.toggle_menu();
            return;
        }
        _ => {}
    }

    if app.focus() == Focus::NavMenu {
        handle_menu_key(app, key);
        return;
    }

    match app.route() {
        Route::Courses => handle_courses_key(app, key),
        Route::Dashboard => handle_dashboard_key(app, key),
        Route::Certificate => handle_certificate_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.menu_next(),
        KeyCode::Up | KeyCode::Char('k') => app.menu_prev(),
        KeyCode::Enter => app.menu_activate(),
        KeyCode::Esc => app.close_menu(),
        _ => {}
    }
}

fn handle_courses_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        app.back_to_dashboard();
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.select_prev_lesson(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next_lesson(),
        KeyCode::Up | KeyCode::Char('k') => app.select_lesson_above(),
        KeyCode::Down | KeyCode::Char('j') => app.select_lesson_below(),
        KeyCode::Char('g') | KeyCode::Enter if app.all_lessons_completed() => {
            app.open_certificate();
        }
        KeyCode::Esc => app.back_to_courses(),
        _ => {}
    }
}

fn handle_certificate_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
        app.back_to_dashboard();
    }
}
