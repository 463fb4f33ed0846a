use clap::Parser;
use mantelzorg_dashboard::utils::{logger, validation::Validate};
use mantelzorg_dashboard::{web, CbsPipeline, CliConfig, DashboardEngine};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mantelzorg-dashboard");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let bind_addr = config.bind_addr.clone();
    let pipeline = CbsPipeline::new(config);
    let engine = Arc::new(DashboardEngine::new(pipeline));
    let router = web::create_router(engine);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("✅ Dashboard listening on http://{}", bind_addr);
    axum::serve(listener, router).await?;

    Ok(())
}
