use tracing::info;
use usersvc::infrastructure::{config::load_config, logger::Logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, path) = load_config()?;

    Logger::init(&config.logging);
    match path {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    usersvc::server::run(config).await
}
