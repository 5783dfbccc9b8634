use thiserror::Error;

/// Failure to obtain the question document. Fatal for the app.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("question document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question document must be a JSON array of questions")]
    NotAnArray,
    #[error("loader stopped before delivering questions")]
    Disconnected,
}

/// Errors raised when starting a session.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions in the chosen scope")]
    EmptyWorkingList,
}
