use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};

use super::endpoints;
use crate::scorer::Scorer;

pub fn router<S: Scorer>(state: super::State<S>) -> axum::Router {
    axum::Router::new()
        .route("/submit", post(endpoints::submit::<S>))
        // `get` answers HEAD as well unless HEAD has its own handler.
        .route(
            "/check",
            get(endpoints::check).head(endpoints::method_not_allowed),
        )
        .method_not_allowed_fallback(endpoints::method_not_allowed)
        // Photos travel base64 encoded inside the JSON body.
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    log::info!("{method} {path} -> {}", response.status());

    response
}
