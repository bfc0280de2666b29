use std::fmt;

use crate::config::exit_codes;
use crate::hcp::ResourceKind;

/// Custom error type for TFE operations
#[derive(Debug)]
pub enum TfeError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Host not found in any source
    HostNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Caller supplied neither a name nor an id, or an empty required list
    InputContract(String),
    /// A name did not match any entry in the enumerated collection
    NotFound {
        kind: ResourceKind,
        input: String,
        scope: String,
    },
    /// More than one entry shares the requested name (strict resolution only)
    Ambiguous {
        kind: ResourceKind,
        name: String,
        scope: String,
        matches: usize,
    },
    /// A derived join produced no children for a relationship edit
    EmptySet {
        child_kind: ResourceKind,
        source: String,
    },
}

/// Closed set of failure kinds callers can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputContract,
    NotFound,
    Ambiguous,
    EmptySet,
    Transport,
    Config,
}

impl ErrorKind {
    /// Process exit code for this kind
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::InputContract => exit_codes::INPUT_CONTRACT,
            ErrorKind::NotFound => exit_codes::NOT_FOUND,
            ErrorKind::Ambiguous => exit_codes::AMBIGUOUS,
            ErrorKind::EmptySet => exit_codes::EMPTY_SET,
            ErrorKind::Transport => exit_codes::TRANSPORT,
            ErrorKind::Config => exit_codes::CONFIG,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InputContract => write!(f, "invalid input"),
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::Ambiguous => write!(f, "ambiguous name"),
            ErrorKind::EmptySet => write!(f, "empty set"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Config => write!(f, "configuration error"),
        }
    }
}

impl TfeError {
    /// Classify this error into one of the known failure kinds
    ///
    /// A 404 from the control plane means a directly supplied id did not
    /// exist at request time, so it is reported as `NotFound`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TfeError::InputContract(_) => ErrorKind::InputContract,
            TfeError::NotFound { .. } => ErrorKind::NotFound,
            TfeError::Api { status: 404, .. } => ErrorKind::NotFound,
            TfeError::Ambiguous { .. } => ErrorKind::Ambiguous,
            TfeError::EmptySet { .. } => ErrorKind::EmptySet,
            TfeError::Http(_) | TfeError::Api { .. } | TfeError::Json(_) => ErrorKind::Transport,
            TfeError::TokenNotFound(_)
            | TfeError::HostNotFound(_)
            | TfeError::Credentials(_)
            | TfeError::Config(_) => ErrorKind::Config,
        }
    }

    /// Shorthand for a name lookup that found nothing
    pub fn not_found(kind: ResourceKind, input: &str, scope: impl fmt::Display) -> Self {
        TfeError::NotFound {
            kind,
            input: input.to_string(),
            scope: scope.to_string(),
        }
    }
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfeError::TokenNotFound(msg) => write!(f, "{}", msg),
            TfeError::HostNotFound(msg) => write!(f, "{}", msg),
            TfeError::Credentials(msg) => write!(f, "{}", msg),
            TfeError::Json(msg) => write!(f, "JSON error: {}", msg),
            TfeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TfeError::InputContract(msg) => write!(f, "{}", msg),
            TfeError::NotFound { kind, input, scope } => {
                write!(f, "{} '{}' not found in {}", kind.title(), input, scope)
            }
            TfeError::Ambiguous {
                kind,
                name,
                scope,
                matches,
            } => write!(
                f,
                "{} name '{}' matches {} entries in {}; use the id instead",
                kind.title(),
                name,
                matches,
                scope
            ),
            TfeError::EmptySet { child_kind, source } => write!(
                f,
                "No {} found in {}; nothing to change",
                child_kind.plural(),
                source
            ),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<serde_json::Error> for TfeError {
    fn from(err: serde_json::Error) -> Self {
        TfeError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TfeError {
    fn from(err: std::io::Error) -> Self {
        TfeError::Credentials(err.to_string())
    }
}

impl From<std::env::VarError> for TfeError {
    fn from(err: std::env::VarError) -> Self {
        TfeError::Config(err.to_string())
    }
}

/// Result type alias for TFE operations
pub type Result<T> = std::result::Result<T, TfeError>;
