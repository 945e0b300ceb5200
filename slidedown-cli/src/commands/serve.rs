//! HTTP server for markdown decks, wiki pages and static files.

use anyhow::{Context, Result};
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use slidedown_core::{classify_request, Config, Route};
use slidedown_render::Publisher;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
struct AppState {
    publisher: Arc<Publisher>,
    web_root: PathBuf,
}

/// Start the HTTP server and run until Ctrl+C
pub async fn serve(config: Config) -> Result<()> {
    let address = config.server.address.clone();
    let read_timeout = Duration::from_secs(config.server.read_timeout);
    let write_timeout = Duration::from_secs(config.server.write_timeout);

    let app = with_timeouts(router(config), read_timeout, write_timeout)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;

    tracing::info!("Serving on http://{}", address);
    println!("\nServing at http://{}", address);
    println!("   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

fn router(config: Config) -> Router {
    let state = AppState {
        web_root: config.web_root_path(),
        publisher: Arc::new(Publisher::new(config)),
    };

    Router::new()
        .route("/", get(serve_listing))
        .fallback(dispatch)
        .with_state(state)
}

/// Bound request body reads and whole-request handling
fn with_timeouts(router: Router, read_timeout: Duration, write_timeout: Duration) -> Router {
    router
        .layer(RequestBodyTimeoutLayer::new(read_timeout))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            write_timeout,
        ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

/// Access log line: method, URI, protocol, referer, user agent
fn log_request(req: &Request) {
    let header_value = |name: header::HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string()
    };
    tracing::info!(
        "\"{} {} {:?}\" \"{}\" \"{}\"",
        req.method(),
        req.uri(),
        req.version(),
        header_value(header::REFERER),
        header_value(header::USER_AGENT),
    );
}

async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    log_request(&req);
    let path = req.uri().path().to_string();

    match classify_request(&path) {
        Route::Markdown { section, filename } => {
            tracing::debug!("Markdown request in {}: {}", section, filename);
            serve_markdown(state, filename.to_string()).await
        }
        Route::Wiki { filename } => serve_wiki(state, filename.to_string()).await,
        Route::Static => serve_static(state, req).await,
    }
}

async fn serve_markdown(state: AppState, filename: String) -> Response {
    let publisher = state.publisher.clone();
    let result = tokio::task::spawn_blocking(move || publisher.markup_markdown(&filename)).await;

    match result {
        Ok(page) if page.is_empty() => not_found(),
        Ok(page) => Html(page).into_response(),
        Err(err) => internal_error(err),
    }
}

async fn serve_wiki(state: AppState, filename: String) -> Response {
    let publisher = state.publisher.clone();
    let result = tokio::task::spawn_blocking(move || publisher.markup_wiki(&filename)).await;

    match result {
        Ok(Some(page)) => Html(page).into_response(),
        Ok(None) => not_found(),
        Err(err) => internal_error(err),
    }
}

async fn serve_static(state: AppState, req: Request) -> Response {
    match ServeDir::new(&state.web_root).oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

async fn serve_listing(State(state): State<AppState>, req: Request) -> Response {
    log_request(&req);
    let publisher = state.publisher.clone();
    let result = tokio::task::spawn_blocking(move || publisher.listing()).await;

    match result {
        Ok(Ok(page)) => Html(page).into_response(),
        Ok(Err(err)) => {
            tracing::error!("Listing failed: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Listing failed").into_response()
        }
        Err(err) => internal_error(err),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}

fn internal_error(err: tokio::task::JoinError) -> Response {
    tracing::error!("Render task failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Task join error: {}", err),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn site(template: &str) -> (TempDir, Router) {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("talk.md"), "# Hello\nclass: segue\n\n- a\n").unwrap();
        fs::write(root.join("home.wiki"), "= Wiki =").unwrap();
        fs::write(root.join("broken.wiki"), "{{{\nnever closed").unwrap();
        fs::write(root.join("style.css"), "body {}").unwrap();
        for part in ["head", "foot"] {
            fs::write(root.join(format!("slides-{part}.thtml")), format!("<!-- {part} -->")).unwrap();
        }

        let mut config = Config::default();
        config.template = template.to_string();
        config.templates_dir = root.to_path_buf();
        config.content_dir = root.to_path_buf();
        config.web_root = root.to_path_buf();
        (dir, router(config))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    #[tokio::test]
    async fn test_markdown_route() {
        let (_dir, app) = site("slides");
        let (status, body) = get(app, "/slides/talk.md").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!-- head -->\n"));
        assert!(body.contains("<h1>Hello</h1>"));
        assert!(body.contains("data-segue=\"true\""));
    }

    #[tokio::test]
    async fn test_plain_route_is_raw() {
        let (_dir, app) = site("plain");
        let (status, body) = get(app, "/plain/talk.md").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn test_missing_markdown_is_404() {
        let (_dir, app) = site("slides");
        let (status, _) = get(app, "/slides/absent.md").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wiki_routes() {
        let (_dir, app) = site("slides");
        let (status, body) = get(app.clone(), "/wiki/home.wiki").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Wiki</h1>"));

        let (status, body) = get(app.clone(), "/wiki/broken.wiki").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, _) = get(app, "/wiki/absent.wiki").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_files() {
        let (_dir, app) = site("slides");
        let (status, body) = get(app.clone(), "/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");

        let (status, _) = get(app, "/images/none.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_slow_handler_times_out() {
        let slow = Router::new().route(
            "/slow",
            axum::routing::get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );
        let app = with_timeouts(slow, Duration::from_secs(1), Duration::from_millis(50));

        let (status, _) = get(app, "/slow").await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_listing() {
        let (_dir, app) = site("slides");
        let (status, body) = get(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<a href=\"/slides/talk.md\">talk.md</a>"));
        assert!(body.contains("<a href=\"/wiki/home.wiki\">home.wiki</a>"));
    }
}
