//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::SuggestionService;

/// 应用共享状态
///
/// 只包含不可变数据，使用 Arc 包裹以便在多个处理器之间安全共享
pub struct AppState {
    /// 启动时加载的配置
    pub config: AppConfig,
    /// 职位建议服务
    pub suggestions: SuggestionService,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(config: AppConfig, suggestions: SuggestionService) -> Self {
        Self {
            config,
            suggestions,
        }
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(config: AppConfig, suggestions: SuggestionService) -> Arc<AppState> {
    Arc::new(AppState::new(config, suggestions))
}
