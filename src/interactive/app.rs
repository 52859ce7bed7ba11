//! TUI application state and logic

use super::focus::Focus;
use super::session::QuerySession;
use crate::config::ClientConfig;
use crate::core::Letter;
use crate::form::{FormController, FormEvent, QueryTicket, Reaction};
use crate::query::FilterClient;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait for input before checking for finished queries
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub controller: FormController,
    pub focus: Focus,
    pub alert: Option<String>,
    pub server: String,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            controller: FormController::new(config.initial_length, config.quiet_period),
            focus: Focus::Positioned(0),
            alert: None,
            server: config.server.to_string(),
            should_quit: false,
        }
    }

    /// Apply one key press; returns a query to send, if any
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<QueryTicket> {
        // A pending alert swallows the next key
        if self.alert.take().is_some() {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Char('n') if ctrl => {
                let reaction = self.controller.handle(FormEvent::AddFoundRow, now);
                return self.react(reaction);
            }
            KeyCode::Tab => {
                self.focus = self.focus.next_section(self.controller.state());
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev_section(self.controller.state());
                return None;
            }
            _ => {}
        }

        let reaction = match self.focus {
            Focus::Length => self.length_key(key, now),
            Focus::Positioned(index) => self.row_key(
                key,
                now,
                |ch| FormEvent::TypePositioned { index, ch },
                FormEvent::ErasePositioned { index },
            ),
            Focus::Misplaced(index) => self.row_key(
                key,
                now,
                |ch| FormEvent::TypeMisplaced { index, ch },
                FormEvent::EraseMisplaced { index },
            ),
            Focus::Found { row, col } => self.row_key(
                key,
                now,
                |ch| FormEvent::TypeFound { row, col, ch },
                FormEvent::EraseFound { row, col },
            ),
            Focus::Required(cursor) => self.keyboard_key(key, now, cursor, FormEvent::ToggleRequired),
            Focus::Excluded(cursor) => self.keyboard_key(key, now, cursor, FormEvent::ToggleExcluded),
        };
        self.react(reaction)
    }

    fn react(&mut self, reaction: Reaction) -> Option<QueryTicket> {
        if let Some(next) = reaction.advance_to {
            self.focus = match self.focus {
                Focus::Positioned(_) => Focus::Positioned(next),
                Focus::Found { row, .. } => Focus::Found { row, col: next },
                other => other,
            };
        }
        if let Some(alert) = reaction.alert {
            self.alert = Some(alert);
        }
        self.focus = self.focus.clamp(self.controller.state());
        reaction.query
    }

    fn length_key(&mut self, key: KeyEvent, now: Instant) -> Reaction {
        let edit = |controller: &mut FormController, text: String| {
            controller.handle(FormEvent::EditLength(text), now)
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('+') => {
                self.controller.handle(FormEvent::IncrementLength, now)
            }
            KeyCode::Down | KeyCode::Char('-') => {
                self.controller.handle(FormEvent::DecrementLength, now)
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let mut text = self.controller.state().length_input().to_string();
                text.push(c);
                edit(&mut self.controller, text)
            }
            KeyCode::Backspace | KeyCode::Delete => {
                let mut text = self.controller.state().length_input().to_string();
                if text.pop().is_none() {
                    return Reaction::default();
                }
                edit(&mut self.controller, text)
            }
            _ => Reaction::default(),
        }
    }

    fn row_key(
        &mut self,
        key: KeyEvent,
        now: Instant,
        type_event: impl FnOnce(char) -> FormEvent,
        erase_event: FormEvent,
    ) -> Reaction {
        let state = self.controller.state();
        match key.code {
            KeyCode::Char(c) => self.controller.handle(type_event(c), now),
            KeyCode::Backspace | KeyCode::Delete => self.controller.handle(erase_event, now),
            KeyCode::Left => {
                self.focus = self.focus.left();
                Reaction::default()
            }
            KeyCode::Right => {
                self.focus = self.focus.right(state);
                Reaction::default()
            }
            KeyCode::Up => {
                self.focus = self.focus.up(state);
                Reaction::default()
            }
            KeyCode::Down => {
                self.focus = self.focus.down(state);
                Reaction::default()
            }
            _ => Reaction::default(),
        }
    }

    fn keyboard_key(
        &mut self,
        key: KeyEvent,
        now: Instant,
        cursor: usize,
        toggle: fn(Letter) -> FormEvent,
    ) -> Reaction {
        let state = self.controller.state();
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let Ok(letter) = Letter::from_char(c) else {
                    return Reaction::default();
                };
                self.focus = match self.focus {
                    Focus::Excluded(_) => Focus::Excluded(letter.index()),
                    _ => Focus::Required(letter.index()),
                };
                self.controller.handle(toggle(letter), now)
            }
            KeyCode::Enter | KeyCode::Char(' ') => match Letter::from_index(cursor) {
                Some(letter) => self.controller.handle(toggle(letter), now),
                None => Reaction::default(),
            },
            KeyCode::Left => {
                self.focus = self.focus.left();
                Reaction::default()
            }
            KeyCode::Right => {
                self.focus = self.focus.right(state);
                Reaction::default()
            }
            KeyCode::Up => {
                self.focus = self.focus.up(state);
                Reaction::default()
            }
            KeyCode::Down => {
                self.focus = self.focus.down(state);
                Reaction::default()
            }
            _ => Reaction::default(),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<C: FilterClient + 'static>(app: App, session: QuerySession<C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, session);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, C: FilterClient + 'static>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut session: QuerySession<C>,
) -> Result<()> {
    if let Some(ticket) = app.controller.start() {
        session.spawn(ticket);
    }

    loop {
        while let Some((seq, view)) = session.try_next() {
            app.controller.apply(seq, view);
        }

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = app
            .controller
            .next_deadline(Instant::now())
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
            && let Some(ticket) = app.handle_key(key, Instant::now())
        {
            session.spawn(ticket);
        }

        if let Some(ticket) = app.controller.tick(Instant::now()) {
            session.spawn(ticket);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
