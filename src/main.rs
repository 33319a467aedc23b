use anyhow::Result;
use gssboard::{config::Config, page, serve, Report};
use reqwest::Client;
use std::env;
use tracing::info;
use tracing_subscriber::fmt;

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) config + logging ─────────────────────────────────────────
    let config = Config::from_env();
    let rust_log = env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    fmt()
        .with_env_filter(config.env_filter(rust_log.as_deref()))
        .init();
    config.log_notes();
    info!(source = %config.source, "startup");

    // ─── 2) fetch, clean, aggregate ──────────────────────────────────
    let client = Client::new();
    let report = Report::load(&client, &config.source).await?;
    info!(rows = report.survey.len(), "report ready");

    // ─── 3) lay out + render once ────────────────────────────────────
    let page = page::assemble(&report);
    let dashboard = serve::Dashboard::new(&page)?;

    // ─── 4) serve ────────────────────────────────────────────────────
    let addr = config.listen_addr()?;
    serve::serve(addr, dashboard).await;
    Ok(())
}
