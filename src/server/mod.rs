//! HTTP server rendering pages on request

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::ContentCollection;
use crate::page::{is_not_found, render_home, render_not_found, PostPage};
use crate::templates::TemplateRenderer;
use crate::theme::{CookieThemeStore, ThemeStore, ThemeSwitch};
use crate::Blog;

/// Shared, read-only server state
pub struct AppState {
    blog: Blog,
    collection: ContentCollection,
    renderer: TemplateRenderer,
}

impl AppState {
    pub fn new(blog: Blog, collection: ContentCollection) -> Result<Self> {
        Ok(Self {
            blog,
            collection,
            renderer: TemplateRenderer::new()?,
        })
    }

    fn post_page(&self) -> PostPage<'_> {
        PostPage::new(&self.collection, &self.blog.config.site, self.blog.tz)
    }

    fn not_found(&self, missing_id: Option<&str>) -> Response {
        match render_not_found(&self.renderer, &self.blog.config.site, missing_id) {
            Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
            Err(e) => internal_error(e),
        }
    }
}

/// Build the application router
pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = state.blog.static_dir.clone();

    Router::new()
        .route("/", get(home_handler))
        .route("/posts/*id", get(post_handler))
        .route("/theme/:name", get(theme_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16, open: bool) -> Result<()> {
    let collection = blog.load_content()?;
    tracing::info!("Loaded {} posts", collection.len());

    let state = Arc::new(AppState::new(blog.clone(), collection)?);
    let app = app(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Home page with the theme switch mounted from the request cookie
async fn home_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let store = CookieThemeStore::from_headers(&headers, &state.blog.config.default_theme);
    let mut switch = ThemeSwitch::new(&store);
    switch.mount();

    match render_home(
        &state.renderer,
        &state.blog.config.site,
        &state.collection,
        state.blog.tz,
        &switch,
        &state.blog.config.default_theme,
    ) {
        Ok(html) => Html(html).into_response(),
        Err(e) => internal_error(e),
    }
}

/// A single post page
async fn post_handler(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let id = id.trim_matches('/');

    match state.post_page().render_html(id, &state.renderer) {
        Ok(html) => Html(html).into_response(),
        Err(e) if is_not_found(&e) => {
            tracing::debug!("{}", e);
            state.not_found(Some(id))
        }
        Err(e) => internal_error(e),
    }
}

/// Persist a theme choice in a cookie and go back home
async fn theme_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !state.blog.config.is_known_theme(&name) {
        return (StatusCode::BAD_REQUEST, format!("Unknown theme: {}", name)).into_response();
    }

    let mut store = CookieThemeStore::from_headers(&headers, &state.blog.config.default_theme);
    store.set_theme(&name);

    match store.set_cookie() {
        Some(cookie) => ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

async fn fallback_handler(State(state): State<Arc<AppState>>) -> Response {
    state.not_found(None)
}

fn internal_error(err: anyhow::Error) -> Response {
    tracing::error!("Render failed: {:#}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
