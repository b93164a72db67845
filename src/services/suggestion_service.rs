//! 职位建议服务
//!
//! 把简历文本填入提示词，调用一次 Gemini，并解析返回的职位建议列表。
//! 不做重试，结果要么完整返回，要么返回错误。

use tracing::{error, info};

use super::prompt_service::PromptService;
use super::response_parser::{parse_suggestions, FormatError};
use crate::config::AppConfig;
use crate::llm::{GenerateOptions, LlmClient, LlmError};
use crate::models::JobSuggestion;

/// 职位建议错误
///
/// 按出错阶段分类：解析/校验阶段为 InvalidResponse，请求阶段为 RequestFailed
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    /// 模型返回的内容无法解析或结构不符
    #[error("The AI returned an invalid response. Please try again.")]
    InvalidResponse(#[source] FormatError),

    /// 网络或远端服务失败
    #[error("Failed to get suggestions from the AI. Please check your connection or API key and try again.")]
    RequestFailed(#[source] LlmError),
}

/// 职位建议服务
pub struct SuggestionService {
    client: LlmClient,
    prompt_service: PromptService,
    model: String,
    options: GenerateOptions,
}

impl SuggestionService {
    /// 根据配置创建服务
    pub fn new(config: &AppConfig) -> Result<Self, LlmError> {
        let client = LlmClient::new(&config.api_key, &config.base_url)?;

        Ok(Self {
            client,
            prompt_service: PromptService::new(),
            model: config.model.clone(),
            options: GenerateOptions::json(config.temperature),
        })
    }

    /// 当前使用的模型
    pub fn model(&self) -> &str {
        &self.model
    }

    /// 确认配置的模型存在且支持 generateContent
    ///
    /// 仅在启动时调用一次
    pub async fn verify_model(&self) -> Result<(), LlmError> {
        self.client.get_model(&self.model).await.map(|_| ())
    }

    /// 分析简历并返回职位建议
    pub async fn analyze_resume(&self, resume_text: &str) -> Result<Vec<JobSuggestion>, SuggestionError> {
        let prompt = self.prompt_service.build_suggestion_prompt(resume_text);

        let raw = self
            .client
            .generate(&prompt, &self.model, &self.options)
            .await
            .map_err(|e| {
                error!("Error calling Gemini API: {}", e);
                SuggestionError::RequestFailed(e)
            })?;

        let suggestions = parse_suggestions(&raw).map_err(|e| {
            let preview: String = raw.chars().take(200).collect();
            error!("Gemini response was not in the expected format: {}, response={}", e, preview);
            SuggestionError::InvalidResponse(e)
        })?;

        info!("Resume analyzed: {} suggestions", suggestions.len());
        Ok(suggestions)
    }
}
