use thiserror::Error;

/// Custom error types for metadata resolution.
///
/// Only lookup failures and configuration problems ever reach a caller of
/// `MetadataClient::resolve`. Probe failures are produced by `ImageProbe`
/// implementations and absorbed by the presenter.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Content item not found: {0}")]
    ItemNotFound(u64),
    #[error("Content type not found: {0}")]
    TypeNotFound(String),
    #[error("Content type '{0}' has no items to lead its collection")]
    NoLeadItem(String),
    #[error("Metadata client is missing a required provider: {0}")]
    MissingProvider(&'static str),
    #[error("Failed to read site document: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse site document: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid permalink: {0}")]
    InvalidPermalink(#[from] url::ParseError),
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Image request failed: {0}")]
    ProbeRequest(reqwest::Error),
    #[error("Image request to '{url}' returned status {status}")]
    ProbeStatus { url: String, status: u16 },
    #[error("Image at '{url}' exceeds the {limit} byte probe limit")]
    ProbeTooLarge { url: String, limit: usize },
    #[error("Failed to decode image dimensions: {0}")]
    ProbeDecode(String),
}

impl MetadataError {
    /// Whether the error is a failed lookup of collaborator data rather than
    /// a misconfiguration.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            MetadataError::ItemNotFound(_)
                | MetadataError::TypeNotFound(_)
                | MetadataError::NoLeadItem(_)
        )
    }
}
