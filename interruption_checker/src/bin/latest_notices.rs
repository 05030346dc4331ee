use interruption_checker::render;
use interruption_notices::contracts::NoticeContracts;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared_kernel::tracing::config_telemetry();
    start().await
}

async fn start() -> anyhow::Result<()> {
    let notices = NoticeContracts::latest_notices().await?;
    println!("{}", render::full_listing(&notices));
    Ok(())
}
