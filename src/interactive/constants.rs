//! Timing and layout values for the interactive terminal UI.

// Timing
/// Quiet interval before a suggestion lookahead is sent
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

// Suggestions
/// Upper bound on the live suggestion list
pub const MAX_SUGGESTIONS: usize = 8;

/// Shortest trimmed query (in characters) that triggers a lookahead, exclusive
pub const MIN_SUGGEST_QUERY_CHARS: usize = 1;

// Layout
/// Height of the header line
pub const HEADER_HEIGHT: u16 = 2;

/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the key hint line at the bottom
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 72;

// Messages
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";
