use std::fmt;

/// Crate-wide error type.
///
/// Parser and tokenizer failures are contract violations on the input and
/// always propagate. Fetch failures propagate by default; see
/// [`FetchPolicy`](crate::FetchPolicy) for the opt-in log-and-continue mode
/// on sibling navigation.
#[derive(Debug)]
pub enum Error {
    /// Input did not match the reference-identifier grammar.
    MalformedId { id: String, reason: &'static str },
    /// A chapter range ran backwards (last < first).
    InvalidChapterRange { first: u32, last: u32 },
    /// Tokenizer-derived count disagrees with the payload-declared count.
    CountMismatch {
        id: String,
        declared: u64,
        tokenized: u64,
    },
    /// A required identifier or parameter was absent.
    MissingParameter(&'static str),
    /// Client configuration was rejected (e.g. API key is not a valid header value).
    Config(String),
    /// The service answered with a non-success status.
    Status { status: u16, url: String },
    /// Transport-level failure from reqwest.
    Http(reqwest::Error),
    /// Response body failed to decode as the expected JSON envelope.
    Decode(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedId { id, reason } => {
                write!(f, "malformed reference identifier {:?}: {}", id, reason)
            }
            Error::InvalidChapterRange { first, last } => write!(
                f,
                "invalid chapter range: last chapter {} precedes first chapter {}",
                last, first
            ),
            Error::CountMismatch {
                id,
                declared,
                tokenized,
            } => write!(
                f,
                "verse count mismatch for {}: payload declares {}, content tokenizes to {}",
                id, declared, tokenized
            ),
            Error::MissingParameter(name) => write!(f, "{} must be provided", name),
            Error::Config(message) => write!(f, "client configuration error: {}", message),
            Error::Status { status, url } => {
                write!(f, "service returned status {} for {}", status, url)
            }
            Error::Http(err) => write!(f, "http request failed: {}", err),
            Error::Decode(err) => write!(f, "response decode failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}
