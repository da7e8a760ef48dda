use std::sync::Arc;

use anyhow::Context;
use axum::{extract::Request, ServiceExt};
use tokio::net::TcpListener;
use tracing::info;

use users_api::{infrastructure::Logger, Config, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Logger::init();

    let config = Config::from_env().context("加载配置失败")?;
    let addr = config.http.socket_addr();

    let store = Arc::new(UserStore::new());
    let app = users_api::router(store);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到端口 {}", config.http.port))?;

    info!("Server is running on port {}", config.http.port);
    info!("📖 API 端点:");
    info!("   GET    /api/users          - 获取所有用户");
    info!("   POST   /api/users          - 创建新用户");
    info!("   GET    /api/users/:userId  - 获取特定用户");
    info!("   PUT    /api/users/:userId  - 更新用户");
    info!("   DELETE /api/users/:userId  - 删除用户");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

/// 等待 Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("监听 Ctrl-C 失败: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("监听 SIGTERM 失败: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到停止信号，等待进行中的请求完成...");
}
