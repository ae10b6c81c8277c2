//! Error types for the keep-alive pinger

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

pub type Result<T> = std::result::Result<T, PingerError>;

#[derive(Debug)]
pub enum PingerError {
    /// IO operation failed
    Io(std::io::Error),

    /// HTTP client could not be constructed
    Http(reqwest::Error),

    /// Target configuration missing, empty or malformed
    Config(String),
}

impl fmt::Display for PingerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PingerError::Io(err) => write!(f, "IO error: {}", err),
            PingerError::Http(err) => write!(f, "HTTP error: {}", err),
            PingerError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PingerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PingerError::Io(err) => Some(err),
            PingerError::Http(err) => Some(err),
            PingerError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for PingerError {
    fn from(err: std::io::Error) -> Self {
        PingerError::Io(err)
    }
}

impl From<reqwest::Error> for PingerError {
    fn from(err: reqwest::Error) -> Self {
        PingerError::Http(err)
    }
}

impl ResponseError for PingerError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
