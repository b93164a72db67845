//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};

use super::JobSuggestion;

/// 简历分析请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeRequest {
    pub resume_text: String,
}

/// 简历分析响应
#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub suggestions: Vec<JobSuggestion>,
}
