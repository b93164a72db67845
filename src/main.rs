//! Resume Advisor - Rust Backend
//!
//! 使用 axum 框架构建的后端服务，调用 Gemini 根据简历文本给出职位建议。

use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod services;
mod state;

use api::create_api_routes;
use config::AppConfig;
use error::AppError;
use services::SuggestionService;
use state::create_shared_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 文件可选
    dotenvy::dotenv().ok();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_advisor=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Advisor backend...");

    // 缺少 API 密钥时在此直接退出，不会发出任何请求
    let config = AppConfig::from_env().map_err(|e| {
        error!("{}", e);
        e
    })?;

    let suggestions = SuggestionService::new(&config).context("failed to build Gemini client")?;

    // 启动时确认模型可用，不可用则直接退出
    suggestions.verify_model().await.map_err(|e| {
        let err = AppError::Config(format!(
            "model '{}' is not available for this API key: {}",
            suggestions.model(),
            e
        ));
        error!("{}", err);
        err
    })?;
    info!("Using model: {}", suggestions.model());

    let addr = config.bind_addr;
    let state = create_shared_state(config, suggestions);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 构建路由
    let app = Router::new()
        .merge(create_api_routes(Arc::clone(&state)))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("Server listening on: {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
