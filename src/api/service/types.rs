use reqwest::StatusCode;

/// Plain-text error returned by every endpoint.
#[derive(Debug)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub message: String,
}
