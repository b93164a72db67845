//! Gemini LLM 客户端

use reqwest::Client;
use std::time::Duration;
use tracing::info;

use super::gemini::{fetch_gemini_model, generate_gemini, ModelInfo};
use super::types::{GenerateOptions, LlmError};

/// Gemini LLM 客户端
///
/// 只设置连接超时，不限制整体请求时长
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::ConfigError("API Key is required".to_string()));
        }

        // 构建 HTTP 客户端
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// 单次生成请求，返回模型输出的原始文本
    pub async fn generate(
        &self,
        prompt: &str,
        model: &str,
        options: &GenerateOptions,
    ) -> Result<String, LlmError> {
        info!("LLM request: model={}, prompt_len={}", model, prompt.len());
        generate_gemini(
            &self.client,
            &self.api_key,
            &self.base_url,
            prompt,
            model,
            options,
        )
        .await
    }

    /// 查询模型信息，并确认模型支持 generateContent
    pub async fn get_model(&self, model: &str) -> Result<ModelInfo, LlmError> {
        let info = fetch_gemini_model(&self.client, &self.api_key, &self.base_url, model).await?;

        if !info.supports_generate_content() {
            return Err(LlmError::UnsupportedModel(model.to_string()));
        }

        info!("Model available: {}", info.name);
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const MODEL: &str = "gemini-2.5-flash";
    const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    #[test]
    fn test_new_requires_api_key() {
        let result = LlmClient::new("", "https://generativelanguage.googleapis.com");
        assert!(matches!(result, Err(LlmError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_generate_sends_json_config_and_joins_parts() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(PATH)
                    .header("x-goog-api-key", "test-key")
                    .json_body_partial(
                        r#"{"generationConfig":{"temperature":0.3,"responseMimeType":"application/json"}}"#,
                    );
                then.status(200).json_body(json!({
                    "candidates": [{
                        "content": {
                            "role": "model",
                            "parts": [{"text": "[{\"title\":"}, {"text": "\"A\",\"reason\":\"B\"}]"}]
                        }
                    }]
                }));
            })
            .await;

        let client = LlmClient::new("test-key", server.base_url()).unwrap();
        let text = client
            .generate("hello", MODEL, &GenerateOptions::json(0.3))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(text, r#"[{"title":"A","reason":"B"}]"#);
    }

    #[tokio::test]
    async fn test_generate_maps_api_error_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(400).json_body(json!({
                    "error": {
                        "code": 400,
                        "message": "API key not valid. Please pass a valid API key.",
                        "status": "INVALID_ARGUMENT"
                    }
                }));
            })
            .await;

        let client = LlmClient::new("bad-key", server.base_url()).unwrap();
        let err = client
            .generate("hello", MODEL, &GenerateOptions::default())
            .await
            .unwrap_err();

        match err {
            LlmError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert!(message.starts_with("API key not valid"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_passes_empty_text_through() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).json_body(json!({
                    "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
                }));
            })
            .await;

        let client = LlmClient::new("test-key", server.base_url()).unwrap();
        let text = client
            .generate("hello", MODEL, &GenerateOptions::default())
            .await
            .unwrap();

        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_generate_without_text_parts_is_empty_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).json_body(json!({
                    "candidates": [{ "content": { "role": "model", "parts": [{}] } }]
                }));
            })
            .await;

        let client = LlmClient::new("test-key", server.base_url()).unwrap();
        let err = client
            .generate("hello", MODEL, &GenerateOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_get_model_accepts_generate_content() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1beta/models/gemini-2.5-flash")
                    .header("x-goog-api-key", "test-key");
                then.status(200).json_body(json!({
                    "name": "models/gemini-2.5-flash",
                    "displayName": "Gemini 2.5 Flash",
                    "supportedGenerationMethods": ["generateContent", "countTokens"]
                }));
            })
            .await;

        let client = LlmClient::new("test-key", server.base_url()).unwrap();
        let info = client.get_model(MODEL).await.unwrap();

        mock.assert_async().await;
        assert_eq!(info.name, "models/gemini-2.5-flash");
    }

    #[tokio::test]
    async fn test_get_model_rejects_embedding_only_model() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1beta/models/text-embedding-004");
                then.status(200).json_body(json!({
                    "name": "models/text-embedding-004",
                    "supportedGenerationMethods": ["embedContent"]
                }));
            })
            .await;

        let client = LlmClient::new("test-key", server.base_url()).unwrap();
        let err = client.get_model("text-embedding-004").await.unwrap_err();

        assert!(matches!(err, LlmError::UnsupportedModel(ref m) if m == "text-embedding-004"));
    }

    #[tokio::test]
    async fn test_get_model_unknown_model_is_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1beta/models/gemini-0.1");
                then.status(404).json_body(json!({
                    "error": {
                        "code": 404,
                        "message": "models/gemini-0.1 is not found for API version v1beta",
                        "status": "NOT_FOUND"
                    }
                }));
            })
            .await;

        let client = LlmClient::new("test-key", server.base_url()).unwrap();
        let err = client.get_model("gemini-0.1").await.unwrap_err();

        assert!(matches!(err, LlmError::ApiError { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_generate_without_candidates_is_empty_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).json_body(json!({ "candidates": [] }));
            })
            .await;

        let client = LlmClient::new("test-key", server.base_url()).unwrap();
        let err = client
            .generate("hello", MODEL, &GenerateOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::EmptyResponse));
    }
}
