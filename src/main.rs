//! 用户管理 API 服务入口

use anyhow::Context;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

use user_management_api::{
    app::{self, users::UserService, AppState},
    infrastructure::{config, logger::Logger},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("加载配置失败")?;
    Logger::init(&config.logging);

    let addr = config.socket_addr()?;
    let state = AppState::new(UserService::new());
    let app = app::router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 用户管理 API 运行在 http://{}", addr);
    info!("   GET    /                          - 欢迎信息");
    info!("   GET    /usermanagement/users      - 获取所有用户");
    info!("   POST   /usermanagement/users      - 创建新用户");
    info!("   GET    /usermanagement/users/:id  - 获取特定用户");
    info!("   PUT    /usermanagement/users/:id  - 更新用户");
    info!("   DELETE /usermanagement/users/:id  - 删除用户");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已关闭");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("无法监听 Ctrl+C 信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到关闭信号，正在停止服务器...");
}
