use crate::schemas::{HsnRecord, Record};

#[derive(Clone, Debug)]
pub enum Message {
    // Lifecycle
    Mounted,

    // Authoritative search
    QueryChanged(String),
    SubmitSearch,
    SearchCompleted { id: u64, results: Vec<Record> },
    SearchFailed { id: u64, message: String },
    SelectResult(usize),

    // Suggestions
    SuggestionTimerFired,
    SuggestionsLoaded { id: u64, suggestions: Vec<HsnRecord> },
    SuggestionsFailed { id: u64 },
    HighlightNextSuggestion,
    HighlightPreviousSuggestion,
    SelectSuggestion(usize),
    DismissSuggestions,

    // Focus and pointer
    InputFocused,
    FocusResults,
    ClickedOutside,

    // Display options
    ToggleCompact,

    // Mode changes
    ShowHelp,
    CloseHelp,

    // UI events
    SetStatus(String),
    ClearStatus,
}
