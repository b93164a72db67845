//! Prompt 构建服务
//!
//! 负责把简历文本填入固定的职位建议提示词

/// 简历文本占位符
pub const RESUME_PLACEHOLDER: &str = "{RESUME_TEXT}";

/// 职位建议提示词
pub const PROMPT_TEMPLATE: &str = r#"
You are an expert career advisor and resume analyst.
Analyze the following resume text and suggest 5 suitable job titles or specific industries.
For each suggestion, provide a brief (1-2 sentences) explanation of why it's a good fit based on the extracted skills and experiences.
The resume text is as follows:
---
{RESUME_TEXT}
---
Return your response as a valid JSON array of objects. Each object in the array should have exactly two keys: "title" (a string for the job title/industry) and "reason" (a string for the explanation).
Do not include any other text, introductory phrases, or explanations outside of the JSON array itself.
Example format:
[
  {
    "title": "Software Engineer",
    "reason": "The candidate has strong experience in Python, JavaScript, and building web applications, which are core skills for this role."
  },
  {
    "title": "Data Analyst",
    "reason": "Experience with SQL and data visualization tools makes the candidate a good fit for analyzing and interpreting data."
  }
]
"#;

/// Prompt 服务
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 构建职位建议提示词
    ///
    /// 只替换第一个占位符，简历文本原样插入
    pub fn build_suggestion_prompt(&self, resume_text: &str) -> String {
        PROMPT_TEMPLATE.replacen(RESUME_PLACEHOLDER, resume_text, 1)
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
