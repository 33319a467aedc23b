// src/serve/mod.rs

use anyhow::{Context, Result};
use serde_json::Value;
use std::{net::SocketAddr, sync::Arc};
use tracing::info;
use warp::{reject::Rejection, reply::Reply, Filter};

use crate::page::{render_html, Page};

/// Everything the handlers hand out, rendered once before the server starts.
#[derive(Debug, Clone)]
pub struct Dashboard {
    html: Arc<String>,
    layout: Arc<Value>,
}

impl Dashboard {
    pub fn new(page: &Page) -> Result<Self> {
        let html = render_html(page).context("rendering dashboard HTML")?;
        let layout = serde_json::to_value(page).context("serializing dashboard layout")?;
        Ok(Self {
            html: Arc::new(html),
            layout: Arc::new(layout),
        })
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

async fn health_check() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&serde_json::json!({
        "status": "healthy",
        "service": "gssboard"
    })))
}

/// `GET /` page, `GET /layout` page tree as JSON, `GET /health`.
pub fn routes(
    dashboard: Dashboard,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let html = dashboard.html.clone();
    let index = warp::path::end()
        .and(warp::get())
        .map(move || warp::reply::html(html.as_str().to_owned()));

    let layout = dashboard.layout.clone();
    let layout = warp::path("layout")
        .and(warp::path::end())
        .and(warp::get())
        .map(move || warp::reply::json(layout.as_ref()));

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(health_check);

    index.or(layout).or(health)
}

/// Serve until the process is stopped.
pub async fn serve(addr: SocketAddr, dashboard: Dashboard) {
    info!("dashboard listening on http://{}", addr);
    info!("health check: http://{}/health", addr);
    warp::serve(routes(dashboard)).run(addr).await;
}
