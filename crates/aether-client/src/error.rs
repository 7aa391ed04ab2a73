use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// No record in the fetched batch carries this slug. Batches are
    /// regenerated per request, so a slug seen earlier may not reappear.
    #[error("no product with slug \"{slug}\"")]
    ProductNotFound { slug: String },
}
