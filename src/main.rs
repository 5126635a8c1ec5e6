use std::sync::Arc;

mod config;
mod errors;
mod extract;
mod http;
mod logging;
mod summarize;

use crate::config::AppConfig;
use crate::http::HttpServer;
use crate::summarize::SummarizationEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cfg = AppConfig::from_env_and_args();
    if let Err(e) = cfg.validate() {
        tracing::error!(config_error=%e, "invalid config");
        anyhow::bail!(e);
    }
    std::fs::create_dir_all(&cfg.upload_dir)?;

    // Built once; read-only for the lifetime of the process.
    let engine = Arc::new(SummarizationEngine::default());

    let listener = tokio::net::TcpListener::bind(&cfg.bind).await?;
    tracing::info!(
        bind=%listener.local_addr()?,
        upload_dir=%cfg.upload_dir.display(),
        max_upload_bytes=cfg.max_upload_bytes,
        "summarizer startup complete"
    );

    let server = HttpServer::new(engine, cfg.upload_dir.clone(), cfg.max_upload_bytes);
    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received shutdown signal, draining in-flight requests...");
        }
    };
    if let Err(e) = server.run(listener, shutdown).await {
        tracing::error!(error=?e, "server terminated with error");
        return Err(e);
    }
    Ok(())
}
