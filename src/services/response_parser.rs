//! 模型响应解析
//!
//! 去除 markdown 代码块包裹，解析 JSON 并校验职位建议的结构。

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::JobSuggestion;

/// 整段被 ``` 包裹的响应，可带语言标识
static FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^```(\w*)\s*\n?(.*?)\n?\s*```$").expect("fence regex is valid")
});

/// 响应格式错误
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// 不是合法 JSON
    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    /// 顶层不是数组
    #[error("响应不是 JSON 数组")]
    NotAnArray,

    /// 数组元素不是对象
    #[error("第 {index} 个元素不是对象")]
    NotAnObject { index: usize },

    /// 缺少必需字段
    #[error("第 {index} 个元素缺少字段 '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// 字段不是字符串
    #[error("第 {index} 个元素的字段 '{field}' 不是字符串")]
    InvalidField { index: usize, field: &'static str },
}

/// 提取候选 JSON 字符串
///
/// 先去除首尾空白；若整段被代码块包裹且内部非空，返回去除空白后的内部内容，
/// 否则原样返回去除空白后的文本
pub fn extract_json_payload(raw: &str) -> &str {
    let trimmed = raw.trim();

    match FENCE_RE.captures(trimmed).and_then(|caps| caps.get(2)) {
        Some(inner) if !inner.as_str().is_empty() => inner.as_str().trim(),
        _ => trimmed,
    }
}

/// 解析职位建议列表
pub fn parse_suggestions(raw: &str) -> Result<Vec<JobSuggestion>, FormatError> {
    let payload = extract_json_payload(raw);
    let value: Value = serde_json::from_str(payload)?;

    let items = match value {
        Value::Array(items) => items,
        _ => return Err(FormatError::NotAnArray),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<JobSuggestion, FormatError> {
            let object = item.as_object().ok_or(FormatError::NotAnObject { index })?;
            // 先确认两个字段都存在，再检查类型
            for name in ["title", "reason"] {
                if !object.contains_key(name) {
                    return Err(FormatError::MissingField { index, field: name });
                }
            }

            let field = |name: &'static str| {
                object
                    .get(name)
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or(FormatError::InvalidField { index, field: name })
            };

            Ok(JobSuggestion {
                title: field("title")?,
                reason: field("reason")?,
            })
        })
        .collect()
}
