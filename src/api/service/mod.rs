pub mod endpoints;
pub mod router;
pub mod types;

use axum::response::{IntoResponse, Response};
use reqwest::StatusCode;

use crate::api::{image_host, map_service};
use crate::scorer::Scorer;
use crate::store::LocationStore;

#[derive(Clone)]
pub struct State<S> {
    pub store: LocationStore,
    pub map_service: map_service::Client,
    pub images: image_host::Client,
    pub scorer: S,
}

impl<S: Scorer> State<S> {
    pub fn new(
        store: LocationStore,
        map_service: map_service::Client,
        images: image_host::Client,
        scorer: S,
    ) -> Self {
        Self {
            store,
            map_service,
            images,
            scorer,
        }
    }
}

impl<S: Scorer> axum::extract::FromRef<State<S>> for LocationStore {
    fn from_ref(input: &State<S>) -> Self {
        input.store.clone()
    }
}

impl IntoResponse for types::ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl types::ErrorResponse {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
