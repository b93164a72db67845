//! 服务层模块

mod prompt_service;
mod response_parser;
mod suggestion_service;

pub use suggestion_service::{SuggestionError, SuggestionService};
