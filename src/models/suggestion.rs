//! 职位建议

use serde::{Deserialize, Serialize};

/// 单条职位建议
///
/// 顺序与模型输出一致，不做去重
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSuggestion {
    /// 职位或行业名称
    pub title: String,
    /// 推荐理由（1-2 句）
    pub reason: String,
}
