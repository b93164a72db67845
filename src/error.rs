//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait 以便自动转换为 HTTP 响应。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::SuggestionError;

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(String),

    /// LLM 调用错误
    #[error("LLM 错误: {0}")]
    Llm(String),

    /// 请求参数错误
    #[error("请求错误: {0}")]
    BadRequest(String),
}

impl From<SuggestionError> for AppError {
    fn from(err: SuggestionError) -> Self {
        AppError::Llm(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Llm(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "success": false,
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;
