//! TUI application state and main loop

use super::input::map_key;
use crate::game::{Clock, GameEvent, GameSession};
use crate::wordlists::WordProvider;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::info;

/// Upper bound on how long one loop cycle waits for input
pub const TICK_RATE_MS: u64 = 50;

/// Application state
pub struct App<P, C> {
    pub session: GameSession<P, C>,
}

impl<P: WordProvider, C: Clock> App<P, C> {
    #[must_use]
    pub const fn new(session: GameSession<P, C>) -> Self {
        Self { session }
    }

    /// Apply one cycle worth of input, then advance the clock
    ///
    /// # Errors
    ///
    /// Returns an error if a restart cannot pick a new word.
    pub fn step(&mut self, events: Vec<GameEvent>) -> Result<()> {
        self.session.run_cycle(events)?;
        Ok(())
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.session.should_quit()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if a new round cannot be started.
pub fn run_tui<P: WordProvider, C: Clock>(mut app: App<P, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(
        games = app.session.statistics().total_games,
        won = app.session.statistics().games_won,
        "session ended"
    );
    res
}

fn run_app<B, P, C>(terminal: &mut Terminal<B>, app: &mut App<P, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    P: WordProvider,
    C: Clock,
{
    let tick = Duration::from_millis(TICK_RATE_MS);

    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        let events = drain_events(tick)?;
        app.step(events)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Wait up to `wait` for input, then take everything already queued
fn drain_events(wait: Duration) -> Result<Vec<GameEvent>> {
    let mut events = Vec::new();
    if !event::poll(wait)? {
        return Ok(events);
    }

    loop {
        if let Event::Key(key) = event::read()?
            && let Some(game_event) = map_key(key)
        {
            events.push(game_event);
        }
        if !event::poll(Duration::ZERO)? {
            break;
        }
    }

    Ok(events)
}
