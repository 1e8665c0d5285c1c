use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {status}")]
    Status { status: u16 },

    #[error("Invalid response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl RequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
