//! LLM 类型定义

use serde::{Deserialize, Serialize};

/// 生成选项
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// 温度参数
    pub temperature: Option<f64>,
    /// 响应 MIME 类型（如 "application/json"）
    pub response_mime_type: Option<String>,
}

impl GenerateOptions {
    /// 要求模型返回 JSON 的选项
    pub fn json(temperature: f64) -> Self {
        Self {
            temperature: Some(temperature),
            response_mime_type: Some("application/json".to_string()),
        }
    }
}

/// 内容片段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

/// 对话内容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

/// LLM 错误类型
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP 请求错误
    #[error("HTTP 请求失败: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API 返回错误
    #[error("API 错误 ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// 配置错误
    #[error("配置错误: {0}")]
    ConfigError(String),

    /// 响应中没有任何文本片段
    #[error("模型未返回任何文本")]
    EmptyResponse,

    /// 模型不支持 generateContent
    #[error("模型 {0} 不支持 generateContent")]
    UnsupportedModel(String),
}
