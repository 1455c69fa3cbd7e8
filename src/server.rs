//! 路由组装和服务启动

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::{
    app::{
        health::health_check,
        users::{
            self,
            handler::AppState,
            service::UserService,
            store::{InMemoryUserStore, StoreDumpObserver},
        },
    },
    core::middleware::request_logging_middleware,
    infrastructure::config::{Config, HttpConfig},
};

/// 根据配置创建一个全新的空存储
pub fn build_state(config: &Config) -> AppState {
    let mut store = InMemoryUserStore::new();
    if config.logging.dump_store {
        store = store.with_observer(Arc::new(StoreDumpObserver));
    }
    AppState {
        user_service: UserService::new(Arc::new(store)),
    }
}

pub fn router(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .merge(users::routes())
        .route("/health", get(health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(http.timeout()))
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let addr = config.http.socket_addr()?;
    let app = router(build_state(&config), &config.http);

    let listener = TcpListener::bind(addr).await?;
    info!("🚀 用户服务运行在 http://{}", listener.local_addr()?);
    info!("📖 API 端点:");
    info!("   GET    /users         - 获取所有用户");
    info!("   POST   /users         - 创建新用户");
    info!("   GET    /users/:id     - 获取特定用户");
    info!("   PATCH  /users/:id     - 部分更新用户");
    info!("   DELETE /users/:id     - 删除用户");
    info!("   GET    /health        - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听 Ctrl-C 信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭...");
}
