use std::fmt;
use std::path::PathBuf;

/// Category of a failed HTTP exchange, derived from the `reqwest` error flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Timeout,
    Connect,
    Redirect,
    Body,
    Decode,
    Request,
    /// The request could not be built (e.g. the URL does not parse).
    Builder,
    Other,
}

impl FaultKind {
    pub fn classify(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            FaultKind::Timeout
        } else if err.is_connect() {
            FaultKind::Connect
        } else if err.is_redirect() {
            FaultKind::Redirect
        } else if err.is_body() {
            FaultKind::Body
        } else if err.is_decode() {
            FaultKind::Decode
        } else if err.is_builder() {
            FaultKind::Builder
        } else if err.is_request() {
            FaultKind::Request
        } else {
            FaultKind::Other
        }
    }

    /// Whether the fault happened on the wire rather than inside the client.
    pub fn is_transport(self) -> bool {
        !matches!(self, FaultKind::Builder | FaultKind::Other)
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaultKind::Timeout => "Timeout",
            FaultKind::Connect => "ConnectionError",
            FaultKind::Redirect => "RedirectError",
            FaultKind::Body => "BodyError",
            FaultKind::Decode => "DecodeError",
            FaultKind::Request => "RequestError",
            FaultKind::Builder => "InvalidRequest",
            FaultKind::Other => "ClientError",
        };
        write!(f, "{}", name)
    }
}

/// Failure to fetch or parse a PokeAPI document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Pokemon not found: {path}")]
    NotFound { path: String },
    #[error("API request failed: {status} {reason}")]
    Upstream { status: u16, reason: String },
    #[error("Failed to parse API response: {0}")]
    Parse(String),
    #[error("Network error communicating with PokeAPI: {fault} - {detail}")]
    Transport { fault: FaultKind, detail: String },
    #[error("An unexpected error occurred: {fault} - {detail}")]
    Unexpected { fault: FaultKind, detail: String },
}

impl FetchError {
    /// HTTP status code as a string, for failures that carry one.
    pub fn status(&self) -> Option<String> {
        match self {
            FetchError::NotFound { .. } => Some("404".to_string()),
            FetchError::Upstream { status, .. } => Some(status.to_string()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        let fault = FaultKind::classify(&err);
        let detail = error_chain(&err);
        if fault.is_transport() {
            FetchError::Transport { fault, detail }
        } else {
            FetchError::Unexpected { fault, detail }
        }
    }
}

/// Failure to download a sprite image.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpriteError {
    #[error("{fault} - {detail}")]
    Transport { fault: FaultKind, detail: String },
    #[error("HTTP {status} {reason} for {url}")]
    Status {
        status: u16,
        reason: String,
        url: String,
    },
}

impl From<reqwest::Error> for SpriteError {
    fn from(err: reqwest::Error) -> Self {
        SpriteError::Transport {
            fault: FaultKind::classify(&err),
            detail: error_chain(&err),
        }
    }
}

/// Startup configuration problems. These are the only errors that stop the server.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Renders an error together with its `source()` chain, separated by `: `.
pub(crate) fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/// Type alias for Results using FetchError
pub type FetchResult<T> = Result<T, FetchError>;

/// Type alias for Results using SpriteError
pub type SpriteResult<T> = Result<T, SpriteError>;
