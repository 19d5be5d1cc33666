use axum::body::Bytes;
use axum::extract::{Json, Query, State};

use crate::api::{Building, UserLocation};
use crate::scorer::{self, Scorer};
use crate::store::LocationStore;

use super::types::*;

pub type Result<T> = std::result::Result<T, ErrorResponse>;

/// Stores the submitted location, then scores the first building found inside
/// its bbox against the submitted photo. Responds with every building found.
pub async fn submit<S: Scorer>(
    State(state): State<super::State<S>>,
    body: Bytes,
) -> Result<Json<Vec<Building>>> {
    let location: UserLocation = serde_json::from_slice(&body).map_err(|e| {
        log::debug!("rejected submit body: {e}");
        ErrorResponse::bad_request("Bad request")
    })?;

    state.store.put(location.clone());

    let buildings = state
        .map_service
        .buildings(location.bbox)
        .await
        .map_err(|e| {
            log::error!("map service: {e}");
            ErrorResponse::internal("Error fetching building data")
        })?;

    let Some(candidate) = buildings.first() else {
        log::info!("no buildings in {:?} for user {:?}", location.bbox, location.user);
        return Ok(Json(buildings));
    };

    let image = state.images.base64(&candidate.image).await.map_err(|e| {
        log::error!("image host ({}): {e}", candidate.image);
        ErrorResponse::internal(format!("Error getting building image: {e}"))
    })?;

    let score = state
        .scorer
        .score(&location.photo, &image)
        .await
        .map_err(|e| {
            log::error!("scorer: {e}");
            match e {
                scorer::Error::Parse(_) => ErrorResponse::internal("Error parsing scorer output"),
                e => ErrorResponse::internal(format!("Error executing scorer: {e}")),
            }
        })?;

    // The score does not rank or filter the response.
    log::info!(
        "similarity of {:?} to user {:?}: {score}",
        candidate.name,
        location.user
    );

    Ok(Json(buildings))
}

/// Looks up the first `user` query parameter. A missing parameter is the
/// empty user.
pub async fn check(
    State(store): State<LocationStore>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<UserLocation>> {
    let user = params
        .into_iter()
        .find(|(key, _)| key == "user")
        .map(|(_, value)| value)
        .unwrap_or_default();

    store
        .get(&user)
        .map(Json)
        .ok_or_else(|| ErrorResponse::not_found("No data found for user"))
}

pub async fn method_not_allowed() -> ErrorResponse {
    ErrorResponse::method_not_allowed("Invalid request method")
}
