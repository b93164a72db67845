//! Gemini generateContent API 实现

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::format::{build_gemini_endpoint, build_gemini_model_endpoint, mask_api_key};
use super::types::{Content, GenerateOptions, LlmError};

/// Gemini 请求载荷
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

/// Gemini 响应
#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize, Debug)]
struct GeminiCandidate {
    content: Option<Content>,
}

/// Gemini 错误响应
#[derive(Deserialize, Debug)]
struct GeminiErrorBody {
    error: GeminiErrorDetail,
}

#[derive(Deserialize, Debug)]
struct GeminiErrorDetail {
    message: String,
}

/// Gemini 模型信息
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// 模型资源名，如 `models/gemini-2.5-flash`
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    /// 是否支持 generateContent
    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|method| method == "generateContent")
    }
}

/// 非 2xx 响应转换为 ApiError
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let status_code = status.as_u16();
    let error_text = response.text().await.unwrap_or_default();
    let preview: String = error_text.chars().take(500).collect();
    debug!("Gemini API error: status={}, body={}", status_code, preview);

    let message = serde_json::from_str::<GeminiErrorBody>(&error_text)
        .map(|body| body.error.message)
        .unwrap_or(error_text);
    Err(LlmError::ApiError {
        status: status_code,
        message,
    })
}

/// 查询模型信息
pub async fn fetch_gemini_model(
    client: &Client,
    api_key: &str,
    base_url: &str,
    model: &str,
) -> Result<ModelInfo, LlmError> {
    let endpoint = build_gemini_model_endpoint(base_url, model);
    debug!("Gemini model lookup: endpoint={}", endpoint);

    let response = client
        .get(&endpoint)
        .header("x-goog-api-key", api_key)
        .send()
        .await?;

    let response = check_status(response).await?;
    Ok(response.json().await?)
}

/// 调用 Gemini generateContent，返回第一个候选的文本
pub async fn generate_gemini(
    client: &Client,
    api_key: &str,
    base_url: &str,
    prompt: &str,
    model: &str,
    options: &GenerateOptions,
) -> Result<String, LlmError> {
    let endpoint = build_gemini_endpoint(base_url, model);

    let generation_config = if options.temperature.is_some() || options.response_mime_type.is_some() {
        Some(GenerationConfig {
            temperature: options.temperature,
            response_mime_type: options.response_mime_type.clone(),
        })
    } else {
        None
    };

    let payload = GeminiRequest {
        contents: vec![Content::user(prompt)],
        generation_config,
    };

    debug!(
        "Gemini API request: endpoint={}, model={}, api_key={}",
        endpoint,
        model,
        mask_api_key(api_key)
    );

    let response = client
        .post(&endpoint)
        .header("x-goog-api-key", api_key)
        .header("Content-Type", "application/json")
        .json(&payload)
        .send()
        .await?;

    let response = check_status(response).await?;
    let body: GeminiResponse = response.json().await?;

    // 只有完全没有文本片段时才算空响应，空字符串交给解析阶段处理
    let text = body
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| {
            let texts: Vec<String> = content.parts.into_iter().filter_map(|part| part.text).collect();
            (!texts.is_empty()).then(|| texts.concat())
        })
        .ok_or(LlmError::EmptyResponse)?;

    debug!("Gemini API response: {} chars", text.len());
    Ok(text)
}
