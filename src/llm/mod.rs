//! LLM 模块
//!
//! 提供 Gemini generateContent 客户端。

mod client;
mod format;
mod gemini;
mod types;

pub use client::LlmClient;
pub use types::*;
