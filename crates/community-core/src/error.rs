//! Error types
//!
//! Request failures and view-model rejections. None of these are fatal; the
//! UI turns them into scoped messages.

use thiserror::Error;

/// A failed call to the remote API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message the server put in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message: Some(message), .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Human-readable text for the user: the server's message when it sent
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// View models are scoped to a signed-in identifier, which can't be blank.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("identifier must not be empty")]
pub struct EmptyIdentifier;

/// Why an apply action did not go through
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    #[error("no hours selected")]
    MissingHours,

    #[error("already applied to this project")]
    AlreadyApplied,

    #[error("an application for this project is already being submitted")]
    InFlight,

    #[error(transparent)]
    Submit(#[from] ApiError),
}
