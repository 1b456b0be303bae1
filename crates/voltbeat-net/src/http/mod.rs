pub mod client;
pub(crate) mod request;
pub mod response;

use core::fmt;

/// Error produced by a single HTTP request.
#[derive(Debug)]
pub enum HttpError<E> {
    /// Transport-level failure while sending or receiving
    Transport(E),
    /// Peer closed the stream before a complete response arrived
    Closed,
    /// Malformed status line or headers
    Parse,
    /// Request headers did not fit the header buffer
    FormatHeaders,
    /// Response body exceeded the body buffer
    BodyTooLarge,
}

impl<E> From<core::fmt::Error> for HttpError<E> {
    fn from(_error: core::fmt::Error) -> Self {
        HttpError::FormatHeaders
    }
}

impl<E: fmt::Debug> fmt::Display for HttpError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Transport(e) => write!(f, "transport error: {:?}", e),
            HttpError::Closed => write!(f, "connection closed before response completed"),
            HttpError::Parse => write!(f, "malformed response"),
            HttpError::FormatHeaders => write!(f, "request headers too large"),
            HttpError::BodyTooLarge => write!(f, "response body too large"),
        }
    }
}
