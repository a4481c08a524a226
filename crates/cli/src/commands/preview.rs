use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use locale_pages_core::load_config;
use locale_pages_generator::{GeneratedSite, generate_site};
use std::{path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
struct AppState {
    site: Arc<GeneratedSite>,
}

/// Serve the generated pages for local development.
///
/// Pages are generated once at startup and served from memory. Only the
/// enumerated routes exist; any other locale is a 404.
pub async fn run(port: Option<u16>, config: Option<PathBuf>) -> Result<()> {
    let site_config = load_config(config.as_deref()).context("Failed to load configuration")?;
    let port = port.unwrap_or(site_config.port);

    println!("🌐 Starting preview server...");

    let site = generate_site();
    println!("   ✓ Generated {} pages", site.pages.len());

    let app = router(site);

    let listener = bind(&site_config.host, port).await?;
    let addr = listener.local_addr().context("Failed to read bound address")?;

    println!("\n🚀 Preview ready at: http://{}", addr);
    println!("   Press Ctrl+C to stop\n");
    info!(%addr, "preview server listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Bind the preview listener.
///
/// `host` may be a hostname such as `localhost` or a bare IPv4/IPv6 literal.
async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {} port {}", host, port))
}

fn router(site: GeneratedSite) -> Router {
    let state = AppState {
        site: Arc::new(site),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/{lang}/test", get(page_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Link list of every generated route
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let links: String = state
        .site
        .pages
        .iter()
        .map(|page| {
            let path = page.params.path();
            format!(r#"<li><a href="{}">{}</a></li>"#, path, path)
        })
        .collect();

    Html(format!(
        "<!DOCTYPE html>\n<html><head><title>Routes</title></head><body><ul>{}</ul></body></html>",
        links
    ))
}

async fn page_handler(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
    match state.site.page(&lang) {
        Some(page) => Html(page.html.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "404: page not found").into_response(),
    }
}
