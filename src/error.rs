use std::fmt;

/// Error type for Direct Link operations
#[derive(Debug)]
pub enum DirectLinkError {
    /// HTTP request failed (after any configured retries)
    Http(reqwest::Error),
    /// API returned a non-success response
    Api {
        status: u16,
        message: String,
        /// Server-side trace id, when the error body carried one
        trace: Option<String>,
    },
    /// A required option was missing or invalid; no request was sent
    Validation(String),
    /// Service configuration is incomplete or invalid
    Config(String),
    /// Failed to read or parse a credentials file
    Credentials(String),
    /// JSON (de)serialization error
    Json(String),
    /// Local file I/O error
    Io { message: String },
}

impl DirectLinkError {
    /// Build an `Api` error without a trace id
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        DirectLinkError::Api {
            status,
            message: message.into(),
            trace: None,
        }
    }

    /// HTTP status code for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            DirectLinkError::Api { status, .. } => Some(*status),
            DirectLinkError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for DirectLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectLinkError::Http(e) => write!(f, "HTTP request failed: {}", e),
            DirectLinkError::Api {
                status,
                message,
                trace,
            } => {
                write!(f, "API error (status {}): {}", status, message)?;
                if let Some(trace) = trace {
                    write!(f, " [trace: {}]", trace)?;
                }
                Ok(())
            }
            DirectLinkError::Validation(msg) => write!(f, "Invalid options: {}", msg),
            DirectLinkError::Config(msg) => write!(f, "Configuration error: {}", msg),
            DirectLinkError::Credentials(msg) => write!(f, "{}", msg),
            DirectLinkError::Json(msg) => write!(f, "JSON error: {}", msg),
            DirectLinkError::Io { message } => write!(f, "I/O error: {}", message),
        }
    }
}

impl std::error::Error for DirectLinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectLinkError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DirectLinkError {
    fn from(err: reqwest::Error) -> Self {
        DirectLinkError::Http(err)
    }
}

impl From<serde_json::Error> for DirectLinkError {
    fn from(err: serde_json::Error) -> Self {
        DirectLinkError::Json(err.to_string())
    }
}

impl From<std::io::Error> for DirectLinkError {
    fn from(err: std::io::Error) -> Self {
        DirectLinkError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type alias for Direct Link operations
pub type Result<T> = std::result::Result<T, DirectLinkError>;
