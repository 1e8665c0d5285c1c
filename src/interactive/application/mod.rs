pub mod search_service;
pub mod suggestion_service;
