//! `Lyricline` - terminal viewer for timed lyrics documents.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::{io, panic, time::Duration};

use lyricline::app::App;
use lyricline::config::Config;
use lyricline::constants::ui::POLL_INTERVAL_MS;
use lyricline::error::{Error, Result};
use lyricline::{input, ui};

// Helper function to ensure the terminal is cleaned up on exit
fn cleanup_terminal<B: Backend + std::io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let arg = std::env::args().nth(1);
    let config = Config::load()?.with_lyrics_path(arg.as_deref());

    if arg.as_deref() == Some("--version") {
        println!("{} {}", config.app_name(), config.app_version());
        return Ok(());
    }
    if config.lyrics_path.is_none() {
        return Err(Error::config(
            "No lyrics file given",
            "Pass a path or set LYRICS_PATH",
        ));
    }

    // Setup better panic handling that cleans up terminal first
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    if let Err(e) = cleanup_terminal(&mut terminal) {
        eprintln!("Error cleaning up terminal: {e:?}");
    }

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            // Drain whatever queued up while drawing
            let mut pending = vec![event::read()?];
            while event::poll(Duration::ZERO)? {
                pending.push(event::read()?);
            }
            for event in input::coalesce_drags(pending) {
                app.handle_event(&event);
                if app.should_quit() {
                    break;
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }
    Ok(())
}
