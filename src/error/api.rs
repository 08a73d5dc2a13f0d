use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    Request(String),
    /// The server answered with a non-success status; the body is kept for
    /// diagnostics.
    Status(u16, String),
    /// The response body could not be decoded into the expected type.
    Decode(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Request(msg) => write!(f, "Request Error: {}", msg),
            ApiError::Status(code, body) => write!(f, "Status Error: HTTP {} ({})", code, body),
            ApiError::Decode(msg) => write!(f, "Decode Error: {}", msg),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Request(error.to_string())
        }
    }
}
