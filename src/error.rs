// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Specific error types for backend API failures.
/// Used to provide user-friendly messages in the notification panel.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, timeout).
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    Status(u16),

    /// The response body could not be decoded as the expected JSON shape.
    Decode(String),

    /// The backend answered `{"success": false}`.
    Rejected,
}

impl ApiError {
    /// Returns the message shown inline in the notification list area.
    ///
    /// Transport failures get the generic connectivity message; everything
    /// else reads as a load failure, matching how the backend distinguishes
    /// the two cases.
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "Erro de conexão",
            ApiError::Status(_) | ApiError::Decode(_) | ApiError::Rejected => {
                "Erro ao carregar notificações"
            }
        }
    }

    /// Whether the failure happened before a response arrived.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::Rejected => write!(f, "Request rejected by the backend"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for ApiError {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn transport_error_maps_to_connection_message() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.user_message(), "Erro de conexão");
        assert!(err.is_transport());
    }

    #[test]
    fn rejected_error_maps_to_load_message() {
        let err = ApiError::Rejected;
        assert_eq!(err.user_message(), "Erro ao carregar notificações");
        assert!(!err.is_transport());
    }

    #[test]
    fn status_error_carries_code() {
        let err = ApiError::Status(503);
        assert_eq!(format!("{}", err), "Unexpected HTTP status: 503");
    }
}
