use staff_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv)
    staff_server::setup_environment();

    // 2. 加载配置并初始化日志
    let config = Config::from_env();
    staff_server::init_logger_with_file(Some(config.log_level()), config.log_dir.as_deref());

    tracing::info!("Staff server starting...");

    // 3. 初始化服务器状态 (数据库 + 迁移)
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
