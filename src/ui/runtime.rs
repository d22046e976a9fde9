use crate::api::CharacterClient;
use crate::config::Config;
use crate::filter::FilterSelection;
use crate::ui::app::App;
use crate::ui::cards::{columns_for, rows_for};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::footer::Footer;
use crate::ui::input::handle_key;
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive browser until the user quits.
pub fn run(
    config: &Config,
    client: CharacterClient,
    runtime: Handle,
    selection: &FilterSelection,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let footer = Footer::new(client.host());
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(client, runtime, events.sender());

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        let (columns, page_rows) = grid_size(cols, rows);
        app.on_resize(columns, page_rows);
    }
    app.activate_with(selection);
    tracing::info!("Browser started");

    loop {
        terminal.draw(|frame| draw(frame, app.state(), app.spinner_frame(), &footer))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                let (columns, page_rows) = grid_size(cols, rows);
                app.on_resize(columns, page_rows);
            }
            Ok(AppEvent::Load { generation, result }) => app.on_load(generation, result),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Browser closed");
    Ok(())
}

/// Card columns and rows that fit in the body of a `cols` x `rows` terminal.
fn grid_size(cols: u16, rows: u16) -> (usize, usize) {
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    (columns_for(body.width), rows_for(body.height))
}
