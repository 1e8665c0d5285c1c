#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ExecuteSearch { id: u64, query: String },
    ScheduleSuggestions(u64), // delay in milliseconds
    CancelSuggestions,
    FetchSuggestions { id: u64, query: String },
    ScheduleClearMessage(u64), // delay in milliseconds
}
