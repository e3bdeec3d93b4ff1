#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Could not find a 32-character page id in {0:?}")]
    InvalidPageId(String),

    #[error("Notion API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unreadable response: {0}")]
    Response(#[from] std::io::Error),

    #[error("Batch {batch} failed after {applied} blocks were applied: {source}")]
    BatchFailed {
        batch: usize,
        applied: usize,
        source: Box<ClientError>,
    },
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => ClientError::Api {
                status,
                body: response.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(transport) => ClientError::Transport(transport.to_string()),
        }
    }
}
