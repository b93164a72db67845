//! 健康检查端点

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;
use std::sync::Arc;

/// 健康检查处理器，附带当前模型便于排查
async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.suggestions.model()
    }))
}

/// 创建健康检查路由
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/health", get(health_check))
}
