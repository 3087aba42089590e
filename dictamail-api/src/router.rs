use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{
    app_state::AppState,
    routes::normalize,
};

pub fn create(app_state: AppState) -> Router<()> {
    Router::new()
        .route(
            "/",
            get(|| async { "dictamail is listening" }).fallback(normalize::method_not_allowed),
        )
        .nest("/normalize", normalize::router())
        .with_state(app_state)
        // Every response carries the same CORS headers, errors included.
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
