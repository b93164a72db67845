//! 数据模型

mod api;
mod suggestion;

pub use api::*;
pub use suggestion::JobSuggestion;
