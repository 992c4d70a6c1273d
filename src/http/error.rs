//! Normalized error type for all API calls.

use serde_json::Value;

/// Status code used for failures that never reached the HTTP layer
/// (connection refused, DNS, serialization, malformed JSON on success).
pub const STATUS_TRANSPORT: u16 = 0;

/// Sentinel status for a client-side timeout. Distinguishable from a
/// server-sent 408 by the fixed message "Request Timeout".
pub const STATUS_TIMEOUT: u16 = 408;

/// Which failure path produced the error. Kept private so the constructors
/// are the only way to set it; a server-sent 408 stays `Protocol` while the
/// client's own timer yields `Timeout`, even though both carry status 408
/// and the same reason phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    Protocol,
    Timeout,
    Transport,
}

/// The single error shape every failed call resolves to.
///
/// Callers branch on `status` alone: a real HTTP status for protocol
/// failures, 408 for a client-side timeout, 0 for transport-level failures.
/// `detail` carries the JSON body the server sent with a failure response,
/// when there was one and it parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpError {
    pub status: u16,
    pub status_text: String,
    pub detail: Option<Value>,
    kind: ErrorKind,
}

impl HttpError {
    /// A protocol error: the server answered with a non-success status.
    pub fn protocol(status: u16, status_text: impl Into<String>, detail: Option<Value>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            detail,
            kind: ErrorKind::Protocol,
        }
    }

    /// The client-side timeout fired before any response arrived.
    pub fn timeout() -> Self {
        Self {
            status: STATUS_TIMEOUT,
            status_text: "Request Timeout".to_string(),
            detail: None,
            kind: ErrorKind::Timeout,
        }
    }

    /// A failure below the HTTP layer, or before the request was sent.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        let status_text = if message.is_empty() {
            "Unknown Error".to_string()
        } else {
            message
        };
        Self {
            status: STATUS_TRANSPORT,
            status_text,
            detail: None,
            kind: ErrorKind::Transport,
        }
    }

    /// True when this error was produced by the client's own timeout, never
    /// for a 408 the server actually sent.
    pub fn is_timeout(&self) -> bool {
        self.kind == ErrorKind::Timeout
    }

    /// True when the failure never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        self.kind == ErrorKind::Transport
    }
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.status == STATUS_TRANSPORT {
            write!(f, "request failed: {}", self.status_text)
        } else {
            write!(f, "HTTP {}: {}", self.status, self.status_text)?;
            if let Some(detail) = &self.detail {
                write!(f, " ({})", detail)?;
            }
            Ok(())
        }
    }
}

impl std::error::Error for HttpError {}
