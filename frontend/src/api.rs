//! Submission channel for finished configurations.
//!
//! Two POST operations, one per save endpoint. Neither is idempotent on the
//! service side, so the caller keeps at most one submission in flight.
//! Failures collapse into a small set of user-facing messages: the browser's
//! offline flag, a message carried in the error response body, a generic
//! status line, or a last-resort fallback.

use common::model::payload::ConfigurationPayload;
use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

const SAVE_TEXT_ENDPOINT: &str = "/api/configurations/text";
const SAVE_DB_ENDPOINT: &str = "/api/configurations/database";

/// Failures surfaced by the save endpoints. `Display` strings are shown
/// verbatim in the UI error banner.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("No internet connection. Please check your network.")]
    Offline,

    #[error("{0}")]
    Server(String),

    #[error("An unexpected error occurred. Please try again.")]
    Unexpected,
}

/// Error body shape the service returns on failed saves.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub async fn save_text_configuration(
    payload: &ConfigurationPayload,
) -> Result<(), SubmissionError> {
    post_configuration(SAVE_TEXT_ENDPOINT, payload).await
}

pub async fn save_db_configuration(payload: &ConfigurationPayload) -> Result<(), SubmissionError> {
    post_configuration(SAVE_DB_ENDPOINT, payload).await
}

async fn post_configuration(
    endpoint: &str,
    payload: &ConfigurationPayload,
) -> Result<(), SubmissionError> {
    let request = Request::post(endpoint)
        .json(payload)
        .map_err(|_| SubmissionError::Unexpected)?;

    match request.send().await {
        Ok(response) if response.ok() => Ok(()),
        Ok(response) => {
            let status = response.status();
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => None,
            };
            Err(SubmissionError::Server(
                message.unwrap_or_else(|| format!("Server error: {}", status)),
            ))
        }
        Err(err) => {
            gloo_console::error!(format!("configuration save failed: {}", err));
            if is_offline() {
                Err(SubmissionError::Offline)
            } else {
                Err(SubmissionError::Unexpected)
            }
        }
    }
}

fn is_offline() -> bool {
    web_sys::window().map_or(false, |window| !window.navigator().on_line())
}
