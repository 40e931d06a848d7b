use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::SelectionError;
use crate::page::{INDEX_HTML, LOGIN_HTML, THREE_URL_SLOT};
use crate::session::{SessionId, SessionStore};
use crate::workspace::WorkspaceView;

/// Everything a request handler needs: the catalog and the per-browser selections.
pub struct AppState {
    pub catalog: Catalog,
    pub sessions: SessionStore,
    index_html: String,
}

impl AppState {
    pub fn new(catalog: Catalog, three_url: &str) -> Arc<Self> {
        Arc::new(AppState {
            catalog,
            sessions: SessionStore::new(),
            index_html: render_index(three_url),
        })
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/login", get(login))
        .route("/api/catalog", get(catalog))
        .route("/api/workspace", get(workspace))
        .route("/api/select", post(select))
        .route("/api/clear", post(clear))
        .with_state(state)
}

async fn index(State(app): State<Arc<AppState>>) -> impl IntoResponse {
    Html(app.index_html.clone())
}

async fn login() -> impl IntoResponse {
    Html(LOGIN_HTML)
}

async fn catalog(State(app): State<Arc<AppState>>) -> impl IntoResponse {
    Json(app.catalog.elements().to_vec())
}

async fn workspace(State(app): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let (id, created) = resolve_session(&app, &headers);
    let view = app
        .sessions
        .with_selection(&id, |s| WorkspaceView::from_selection(s));
    respond(&id, created, StatusCode::OK, Json(view))
}

async fn select(State(app): State<Arc<AppState>>, headers: HeaderMap, body: Bytes) -> Response {
    let (id, created) = resolve_session(&app, &headers);
    let result = app
        .sessions
        .with_selection(&id, |s| -> Result<_, SelectionError> {
            let symbol = s.select_payload(&app.catalog, &body)?.symbol.clone();
            Ok((symbol, WorkspaceView::from_selection(s)))
        });

    match result {
        Ok((symbol, view)) => {
            log::info!("Session {id} selected `{symbol}` ({} in workspace).", view.items.len());
            respond(&id, created, StatusCode::OK, Json(view))
        }
        Err(e) => {
            log::warn!("Session {id}: {e}");
            respond(
                &id,
                created,
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        }
    }
}

async fn clear(State(app): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let (id, created) = resolve_session(&app, &headers);
    let view = app.sessions.with_selection(&id, |s| {
        s.clear();
        WorkspaceView::from_selection(s)
    });
    log::info!("Session {id} cleared the workspace.");
    respond(&id, created, StatusCode::OK, Json(view))
}

fn render_index(three_url: &str) -> String {
    INDEX_HTML.replace(THREE_URL_SLOT, three_url)
}

fn resolve_session(app: &AppState, headers: &HeaderMap) -> (SessionId, bool) {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok());
    app.sessions.resolve(cookie)
}

fn respond(id: &SessionId, created: bool, status: StatusCode, body: impl IntoResponse) -> Response {
    if created {
        (status, [(header::SET_COOKIE, id.cookie())], body).into_response()
    } else {
        (status, body).into_response()
    }
}
