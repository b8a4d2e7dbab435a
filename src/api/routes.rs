use axum::{
    Router,
    extract::{Form, Json, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::api::models::{PageQuery, SummarizeForm, SummarizeRequest, SummarizeResponse};
use crate::api::page::{NavState, render_page};
use crate::api::response;
use crate::controller::ControllerSnapshot;
use crate::markdown::render_markdown;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(page_handler).post(submit_form_handler))
        .route("/api/summarize", post(summarize_handler))
        .route("/api/state", get(state_handler))
        .route("/healthz", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let nav = NavState::from_query(query.menu.as_deref());
    page_response(&state.controller.snapshot(), nav)
}

async fn submit_form_handler(
    State(state): State<AppState>,
    Form(form): Form<SummarizeForm>,
) -> Response {
    state.controller.submit(&form.input).await;
    page_response(&state.controller.snapshot(), NavState::default())
}

fn page_response(snapshot: &ControllerSnapshot, nav: NavState) -> Response {
    match render_page(snapshot, nav) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> impl IntoResponse {
    let result = state.controller.submit(&req.input).await;
    let summary = result.text().to_string();

    let data = SummarizeResponse {
        input: req.input,
        summary_html: render_markdown(&summary),
        summary,
        status: if result.is_success() { "success" } else { "error" }.to_string(),
        model: state.controller.model().to_string(),
        summarized_at: Utc::now(),
    };

    if result.is_success() {
        response::success(data)
    } else {
        let message = data.summary.clone();
        response::failed(data, &message)
    }
}

async fn state_handler(State(state): State<AppState>) -> impl IntoResponse {
    response::success(state.controller.snapshot())
}

async fn health() -> &'static str {
    "ok"
}
