use crate::interactive::constants::*;
use crate::interactive::domain::models::{Focus, SuggestionPhase};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::schemas::{Catalog, HsnRecord, Record};

// Re-export Mode
pub use crate::interactive::domain::models::Mode;

/// Everything the terminal shows, owned by the UI thread.
///
/// `update` is the only mutator. It is a pure transition: it never performs
/// I/O, it only returns a [`Command`] describing the side effect the event
/// loop should run.
pub struct AppState {
    pub mode: Mode,
    pub focus: Focus,
    pub catalog: Catalog,
    pub search: SearchState,
    pub suggest: SuggestionState,
    pub ui: UiState,
    mounted: bool,
}

pub struct SearchState {
    pub query: String,
    pub results: Vec<Record>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Set by the first submission and never cleared.
    pub has_searched: bool,
    pub selected_index: usize,
    pub current_search_id: u64,
    /// Bumped whenever `results` is replaced or cleared.
    pub results_version: u64,
}

pub struct SuggestionState {
    pub enabled: bool,
    pub debounce_ms: u64,
    pub phase: SuggestionPhase,
    pub suggestions: Vec<HsnRecord>,
    pub show_suggestions: bool,
    pub highlighted: Option<usize>,
    pub current_request_id: u64,
}

pub struct UiState {
    pub message: Option<String>,
    pub compact: bool,
}

impl SearchState {
    /// A search has settled successfully with nothing to show.
    pub fn is_empty_result(&self) -> bool {
        self.has_searched && !self.is_loading && self.error.is_none() && self.results.is_empty()
    }
}

impl SuggestionState {
    /// The suggestions currently drawn under the search bar.
    pub fn visible(&self) -> &[HsnRecord] {
        if self.show_suggestions {
            &self.suggestions
        } else {
            &[]
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.visible().is_empty()
    }

    fn dismiss(&mut self) {
        self.show_suggestions = false;
        self.highlighted = None;
        if self.phase != SuggestionPhase::Idle || !self.suggestions.is_empty() {
            self.phase = SuggestionPhase::Dismissed;
        }
    }

    fn reveal(&mut self) {
        self.show_suggestions = true;
        if self.phase == SuggestionPhase::Dismissed {
            self.phase = if self.suggestions.is_empty() {
                SuggestionPhase::Idle
            } else {
                SuggestionPhase::Suggesting
            };
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::Products)
    }
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            mode: Mode::Search,
            focus: Focus::Input,
            catalog,
            search: SearchState {
                query: String::new(),
                results: Vec::new(),
                is_loading: false,
                error: None,
                has_searched: false,
                selected_index: 0,
                current_search_id: 0,
                results_version: 0,
            },
            suggest: SuggestionState {
                enabled: true,
                debounce_ms: DEFAULT_DEBOUNCE_MS,
                phase: SuggestionPhase::Idle,
                suggestions: Vec::new(),
                show_suggestions: false,
                highlighted: None,
                current_request_id: 0,
            },
            ui: UiState {
                message: None,
                compact: true,
            },
            mounted: false,
        }
    }

    pub fn with_suggestions(mut self, enabled: bool, debounce_ms: u64) -> Self {
        self.suggest.enabled = enabled;
        self.suggest.debounce_ms = debounce_ms;
        self
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::Mounted => {
                if self.mounted {
                    return Command::None;
                }
                self.mounted = true;
                self.submit(String::new())
            }
            Message::QueryChanged(q) => {
                self.search.query = q;
                self.focus = Focus::Input;
                self.schedule_suggestions()
            }
            Message::SubmitSearch => self.submit(self.search.query.clone()),
            Message::SearchCompleted { id, results } => {
                if id != self.search.current_search_id {
                    tracing::debug!(id, current = self.search.current_search_id, "dropping stale search response");
                    return Command::None;
                }
                self.search.results = results;
                self.search.results_version += 1;
                self.search.is_loading = false;
                self.search.selected_index = 0;
                Command::None
            }
            Message::SearchFailed { id, message } => {
                if id != self.search.current_search_id {
                    tracing::debug!(id, current = self.search.current_search_id, "dropping stale search failure");
                    return Command::None;
                }
                self.search.error = Some(if message.trim().is_empty() {
                    GENERIC_ERROR_MESSAGE.to_string()
                } else {
                    message
                });
                self.search.results.clear();
                self.search.results_version += 1;
                self.search.is_loading = false;
                self.search.selected_index = 0;
                Command::None
            }
            Message::SelectResult(index) => {
                if index < self.search.results.len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::SuggestionTimerFired => {
                if !self.suggest.enabled || self.suggest.phase != SuggestionPhase::Debouncing {
                    return Command::None;
                }
                self.suggest.current_request_id += 1;
                self.suggest.phase = SuggestionPhase::Suggesting;
                Command::FetchSuggestions {
                    id: self.suggest.current_request_id,
                    query: self.search.query.clone(),
                }
            }
            Message::SuggestionsLoaded { id, suggestions } => {
                if id != self.suggest.current_request_id {
                    tracing::debug!(id, current = self.suggest.current_request_id, "dropping stale suggestions");
                    return Command::None;
                }
                self.suggest.suggestions = suggestions.into_iter().take(MAX_SUGGESTIONS).collect();
                self.suggest.highlighted = None;
                Command::None
            }
            Message::SuggestionsFailed { id } => {
                if id == self.suggest.current_request_id {
                    self.suggest.suggestions.clear();
                    self.suggest.highlighted = None;
                    self.suggest.phase = SuggestionPhase::Idle;
                }
                Command::None
            }
            Message::HighlightNextSuggestion => {
                let count = self.suggest.visible().len();
                if count > 0 {
                    self.suggest.highlighted = Some(match self.suggest.highlighted {
                        Some(i) => (i + 1) % count,
                        None => 0,
                    });
                }
                Command::None
            }
            Message::HighlightPreviousSuggestion => {
                let count = self.suggest.visible().len();
                if count > 0 {
                    self.suggest.highlighted = Some(match self.suggest.highlighted {
                        Some(0) | None => count - 1,
                        Some(i) => i - 1,
                    });
                }
                Command::None
            }
            Message::SelectSuggestion(index) => {
                match self.suggest.visible().get(index).map(|r| r.hsn_code.clone()) {
                    Some(code) => self.submit(code),
                    None => Command::None,
                }
            }
            Message::DismissSuggestions | Message::ClickedOutside => {
                self.suggest.dismiss();
                Command::None
            }
            Message::InputFocused => {
                self.focus = Focus::Input;
                self.suggest.reveal();
                Command::None
            }
            Message::FocusResults => {
                self.focus = Focus::Results;
                self.suggest.dismiss();
                Command::None
            }
            Message::ToggleCompact => {
                self.ui.compact = !self.ui.compact;
                let label = if self.ui.compact { "on" } else { "off" };
                self.ui.message = Some(format!("Compact cards {label}"));
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Search;
                Command::None
            }
            Message::SetStatus(msg) => {
                self.ui.message = Some(msg);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
        }
    }

    /// Starts an authoritative search for `query`, replacing whatever the
    /// previous search left behind.
    fn submit(&mut self, query: String) -> Command {
        self.search.query = query.clone();
        self.search.is_loading = true;
        self.search.error = None;
        self.search.has_searched = true;
        self.search.selected_index = 0;
        self.search.current_search_id += 1;
        self.suggest.dismiss();
        Command::ExecuteSearch {
            id: self.search.current_search_id,
            query,
        }
    }

    fn schedule_suggestions(&mut self) -> Command {
        if !self.suggest.enabled {
            return Command::None;
        }
        if self.search.query.trim().chars().count() > MIN_SUGGEST_QUERY_CHARS {
            self.suggest.phase = SuggestionPhase::Debouncing;
            self.suggest.show_suggestions = true;
            Command::ScheduleSuggestions(self.suggest.debounce_ms)
        } else {
            // Bumping the id also orphans any lookahead still in flight.
            self.suggest.current_request_id += 1;
            self.suggest.suggestions.clear();
            self.suggest.highlighted = None;
            self.suggest.show_suggestions = false;
            self.suggest.phase = SuggestionPhase::Idle;
            Command::CancelSuggestions
        }
    }
}
