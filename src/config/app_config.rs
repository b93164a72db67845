//! 应用配置
//!
//! 启动时从环境变量读取一次，之后不可变，由 main 显式传递给各组件。

use std::net::SocketAddr;

use crate::error::AppError;

/// API 密钥环境变量
pub const API_KEY_VAR: &str = "API_KEY";
/// Gemini 基础 URL 环境变量
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
/// 模型名称环境变量
pub const MODEL_VAR: &str = "GEMINI_MODEL";
/// 监听地址环境变量
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

/// 请求采样温度，偏向确定性输出
pub const SUGGESTION_TEMPERATURE: f64 = 0.3;

/// 应用配置结构体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API 密钥
    pub api_key: String,

    /// Gemini API 基础 URL
    pub base_url: String,

    /// 模型名称
    pub model: String,

    /// 温度参数
    pub temperature: f64,

    /// HTTP 服务监听地址
    pub bind_addr: SocketAddr,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8765))
}

impl AppConfig {
    /// 从进程环境变量构建配置
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过查询函数构建配置
    ///
    /// 缺少 API 密钥时直接失败，不会延迟到第一次请求
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = non_empty(API_KEY_VAR)
            .ok_or_else(|| AppError::Config(format!("{} environment variable not set", API_KEY_VAR)))?;

        let bind_addr = match non_empty(BIND_ADDR_VAR) {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|e| AppError::Config(format!("invalid {} '{}': {}", BIND_ADDR_VAR, raw, e)))?,
            None => default_bind_addr(),
        };

        Ok(Self {
            api_key,
            base_url: non_empty(BASE_URL_VAR).unwrap_or_else(default_base_url),
            model: non_empty(MODEL_VAR).unwrap_or_else(default_model),
            temperature: SUGGESTION_TEMPERATURE,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!((config.temperature - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.bind_addr, "127.0.0.1:8765".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let result = AppConfig::from_lookup(lookup_from(&[(MODEL_VAR, "gemini-2.5-pro")]));
        assert!(matches!(result, Err(AppError::Config(_))));

        let result = AppConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            (BASE_URL_VAR, "http://localhost:9000"),
            (MODEL_VAR, "gemini-2.5-pro"),
            (BIND_ADDR_VAR, "0.0.0.0:3000"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_invalid_bind_addr() {
        let result = AppConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            (BIND_ADDR_VAR, "not-an-address"),
        ]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
