//! Full-screen search UI.
//!
//! One thread owns [`AppState`] and runs the loop: draw, drain finished
//! network calls, fire due timers, then poll the terminal for 50 ms. Network
//! calls run on a tokio runtime owned by the session and report back through
//! an mpsc channel as [`Message`]s.

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind, poll,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::SearchOptions;
use crate::api::{ApiClient, CatalogBackend};

mod application;
pub mod constants;
pub mod debounce;
mod domain;
pub mod ui;

#[cfg(test)]
mod test_support;

use self::application::{search_service::SearchService, suggestion_service::SuggestionService};
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, EXIT_PROMPT};
use self::debounce::Debouncer;
use self::domain::models::{Focus, Mode, SearchRequest, SuggestionRequest};
use self::ui::{
    app_state::AppState,
    commands::Command,
    components::Component,
    events::Message,
    renderer::{HitTarget, Renderer},
};

pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    search_service: Arc<SearchService>,
    suggestion_service: Arc<SuggestionService>,
    runtime: tokio::runtime::Runtime,
    response_tx: Sender<Message>,
    response_rx: Receiver<Message>,
    suggestion_timer: Debouncer,
    message_timer: Debouncer,
    last_ctrl_c_press: Option<Instant>,
}

impl InteractiveSearch {
    pub fn new(options: &SearchOptions) -> Result<Self> {
        let client = ApiClient::new(options.api_url.as_str())
            .context("failed to build HTTP client")?;
        Self::with_backend(Arc::new(client), options)
    }

    pub fn with_backend(backend: Arc<dyn CatalogBackend>, options: &SearchOptions) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .context("failed to start async runtime")?;
        let (response_tx, response_rx) = mpsc::channel();

        Ok(Self {
            state: AppState::new(options.catalog)
                .with_suggestions(options.suggestions_enabled, options.debounce_ms),
            renderer: Renderer::new(),
            search_service: Arc::new(SearchService::new(backend.clone(), options.catalog)),
            suggestion_service: Arc::new(SuggestionService::new(backend)),
            runtime,
            response_tx,
            response_rx,
            suggestion_timer: Debouncer::new(),
            message_timer: Debouncer::new(),
            last_ctrl_c_press: None,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        tracing::info!(catalog = ?self.search_service.catalog(), "interactive session started");

        self.handle_message(Message::Mounted);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.drain_responses();
            self.pump_timers(Instant::now());

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_input(key) {
                            break;
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn drain_responses(&mut self) {
        while let Ok(msg) = self.response_rx.try_recv() {
            self.handle_message(msg);
        }
    }

    fn pump_timers(&mut self, now: Instant) {
        if self.suggestion_timer.fire_if_due(now) {
            self.handle_message_at(Message::SuggestionTimerFired, now);
        }
        if self.message_timer.fire_if_due(now) {
            self.handle_message_at(Message::ClearStatus, now);
        }
    }

    /// Returns `true` when the session should end.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        self.handle_input_at(key, Instant::now())
    }

    fn handle_input_at(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if now.duration_since(last_press) < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(now);
            self.handle_message_at(Message::SetStatus(EXIT_PROMPT.to_string()), now);
            return false;
        }

        // Components act on what is on screen; keep them current even if no
        // draw happened since the last state change.
        self.renderer.sync(&self.state);

        let message = match self.state.mode {
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
            Mode::Search => {
                if key.code == KeyCode::Esc {
                    if !self.state.suggest.is_visible() {
                        return true;
                    }
                    Some(Message::DismissSuggestions)
                } else if key.code == KeyCode::Tab {
                    Some(match self.state.focus {
                        Focus::Input => Message::FocusResults,
                        Focus::Results => Message::InputFocused,
                    })
                } else {
                    match self.state.focus {
                        Focus::Input => self.handle_input_focus(key),
                        Focus::Results => self.handle_results_focus(key),
                    }
                }
            }
        };

        if let Some(msg) = message {
            self.handle_message_at(msg, now);
        }
        false
    }

    fn handle_input_focus(&mut self, key: KeyEvent) -> Option<Message> {
        let popup_open = self.state.suggest.is_visible();
        match key.code {
            KeyCode::Up | KeyCode::Down if popup_open => {
                self.renderer.get_suggestion_list_mut().handle_key(key)
            }
            KeyCode::Enter => {
                let picked = if popup_open {
                    self.renderer.get_suggestion_list_mut().handle_key(key)
                } else {
                    None
                };
                picked.or(Some(Message::SubmitSearch))
            }
            KeyCode::Down => Some(Message::FocusResults),
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    fn handle_results_focus(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('?') => Some(Message::ShowHelp),
            KeyCode::Char('/') => Some(Message::InputFocused),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::ToggleCompact)
            }
            _ => self.renderer.get_result_list_mut().handle_key(key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let message = if self.state.mode == Mode::Help {
            Some(Message::CloseHelp)
        } else {
            match self.renderer.hit_test(mouse.column, mouse.row) {
                HitTarget::SearchInput => Some(Message::InputFocused),
                HitTarget::Suggestion(Some(index)) => Some(Message::SelectSuggestion(index)),
                HitTarget::Suggestion(None) => None,
                HitTarget::Results => Some(Message::FocusResults),
                HitTarget::Outside => Some(Message::ClickedOutside),
            }
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_message(&mut self, message: Message) {
        self.handle_message_at(message, Instant::now());
    }

    fn handle_message_at(&mut self, message: Message, now: Instant) {
        let command = self.state.update(message);
        self.execute_command_at(command, now);
    }

    fn execute_command_at(&mut self, command: Command, now: Instant) {
        match command {
            Command::None => {}
            Command::ExecuteSearch { id, query } => {
                self.spawn_search(SearchRequest { id, query });
            }
            Command::ScheduleSuggestions(delay) => {
                self.suggestion_timer
                    .schedule(now, Duration::from_millis(delay));
            }
            Command::CancelSuggestions => {
                self.suggestion_timer.cancel();
            }
            Command::FetchSuggestions { id, query } => {
                self.spawn_suggestions(SuggestionRequest { id, query });
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer.schedule(now, Duration::from_millis(delay));
            }
        }
    }

    fn spawn_search(&self, request: SearchRequest) {
        let service = self.search_service.clone();
        let tx = self.response_tx.clone();

        self.runtime.spawn(async move {
            let response = service.search(request).await;
            let msg = match response.outcome {
                Ok(results) => Message::SearchCompleted {
                    id: response.id,
                    results,
                },
                Err(e) => Message::SearchFailed {
                    id: response.id,
                    message: e.to_string(),
                },
            };
            // The receiver is gone only when the session has ended.
            let _ = tx.send(msg);
        });
    }

    fn spawn_suggestions(&self, request: SuggestionRequest) {
        let service = self.suggestion_service.clone();
        let tx = self.response_tx.clone();

        self.runtime.spawn(async move {
            let response = service.suggest(request).await;
            let msg = match response.outcome {
                Ok(suggestions) => Message::SuggestionsLoaded {
                    id: response.id,
                    suggestions,
                },
                Err(_) => Message::SuggestionsFailed { id: response.id },
            };
            let _ = tx.send(msg);
        });
    }
}
