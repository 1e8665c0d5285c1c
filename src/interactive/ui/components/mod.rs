pub mod help_dialog;
pub mod hsn_table;
pub mod product_cards;
pub mod result_list;
pub mod search_bar;
pub mod suggestion_list;

#[cfg(test)]
mod search_bar_test;

use crate::interactive::constants::EXIT_PROMPT;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: &Option<String>) -> bool {
    message
        .as_ref()
        .map(|msg| msg == EXIT_PROMPT)
        .unwrap_or(false)
}
