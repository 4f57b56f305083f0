//! Error types for tw-api.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// The server's `detail` message, if this is an API error.
    pub fn detail(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Api { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Returns true if the server answered with an error envelope.
    pub fn is_api_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Api { .. })
    }

    /// The transport error underneath, if any.
    pub fn client_error(&self) -> Option<&birdwire_tw_client::Error> {
        self.source.as_deref()?.downcast_ref()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The server answered with a `detail` envelope.
    #[error("API error: {detail}")]
    Api {
        detail: String,
        title: Option<String>,
    },
    #[error("Client error: {0}")]
    Client(String),
    #[error("Decode error: {0}")]
    Decode(String),
    /// A single-entity call got neither data nor an error detail.
    #[error("Response carried no data")]
    MissingData,
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<birdwire_tw_client::Error> for Error {
    fn from(err: birdwire_tw_client::Error) -> Self {
        Error {
            kind: ErrorKind::Client(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Decode(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
