//! 简历分析端点

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{AnalyzeResumeRequest, AnalyzeResumeResponse};
use crate::state::AppState;

/// 分析简历并返回职位建议
async fn analyze_resume_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeResumeRequest>, JsonRejection>,
) -> AppResult<Json<AnalyzeResumeResponse>> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let request_id = Uuid::new_v4();
    let span = info_span!("analyze_resume", %request_id);

    async move {
        info!("Received resume: {} chars", req.resume_text.chars().count());
        let suggestions = state.suggestions.analyze_resume(&req.resume_text).await?;
        Ok::<_, AppError>(Json(AnalyzeResumeResponse { suggestions }))
    }
    .instrument(span)
    .await
}

/// 创建简历分析路由
pub fn resume_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/resume/analyze", post(analyze_resume_handler))
}
