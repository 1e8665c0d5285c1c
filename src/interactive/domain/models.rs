use crate::api::RequestError;
use crate::schemas::{HsnRecord, Record};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Search,
    Help,
}

/// Which part of the screen receives keystrokes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Focus {
    Input,
    Results,
}

/// Lifecycle of the autocomplete list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SuggestionPhase {
    /// Nothing pending and nothing to show.
    Idle,
    /// A lookahead is scheduled but the debounce window has not elapsed.
    Debouncing,
    /// A lookahead was sent; its results are (or will be) shown.
    Suggesting,
    /// The user closed the list; it reopens on focus or input.
    Dismissed,
}

// Requests and responses exchanged with the network tasks. Every request
// carries the sequence id it was issued under so late answers can be told
// apart from current ones.

#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
}

pub struct SearchResponse {
    pub id: u64,
    pub outcome: Result<Vec<Record>, RequestError>,
}

#[derive(Clone, Debug)]
pub struct SuggestionRequest {
    pub id: u64,
    pub query: String,
}

pub struct SuggestionResponse {
    pub id: u64,
    pub outcome: Result<Vec<HsnRecord>, RequestError>,
}
