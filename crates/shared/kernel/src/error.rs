use crate::document::DocumentError;
use oaspub_catalog::{CatalogError, StatusCode};

/// Every terminal failure of the publish pipeline.
///
/// `Display` renders the single diagnostic line printed to standard output.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// No catalog API key was supplied.
    #[error("SWAGGERHUB_API_KEY is not defined")]
    MissingCredential,

    /// The branch name sanitized to nothing.
    #[error("Empty version, skipping upload")]
    EmptyVersion { branch: String },

    #[error("Error reading swagger.json: {source}")]
    ReadError { source: DocumentError },

    #[error("Deserialization error for given swagger.json: {source}")]
    ParseError { source: DocumentError },

    #[error("Error: {source}")]
    SerializationError { source: CatalogError },

    #[error("Error: {source}")]
    RequestBuildError { source: CatalogError },

    #[error("Error: {source}")]
    TransportError { source: CatalogError },

    #[error("Error: {source}")]
    PublishRejected { source: CatalogError },
}

impl PipelineError {
    /// `true` for the two "nothing to publish" outcomes.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::EmptyVersion { .. })
    }

    /// Process exit code for this outcome. Skips exit cleanly.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingCredential | Self::EmptyVersion { .. } => 0,
            Self::ReadError { .. } => 3,
            Self::ParseError { .. } => 4,
            Self::SerializationError { .. } => 5,
            Self::RequestBuildError { .. } => 6,
            Self::TransportError { .. } => 7,
            Self::PublishRejected { .. } => 8,
        }
    }

    /// The catalog response body, for rejections.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::PublishRejected { source: CatalogError::Rejected { body, .. } } => Some(body),
            _ => None,
        }
    }

    /// The catalog response status, for rejections.
    #[must_use]
    pub fn response_status(&self) -> Option<StatusCode> {
        match self {
            Self::PublishRejected { source: CatalogError::Rejected { status, .. } } => {
                Some(*status)
            },
            _ => None,
        }
    }
}

impl From<DocumentError> for PipelineError {
    fn from(source: DocumentError) -> Self {
        match source {
            DocumentError::Parse { .. } => Self::ParseError { source },
            DocumentError::MissingPath { .. } | DocumentError::Read { .. } => {
                Self::ReadError { source }
            },
        }
    }
}

impl From<CatalogError> for PipelineError {
    fn from(source: CatalogError) -> Self {
        match source {
            CatalogError::Serialization { .. } => Self::SerializationError { source },
            CatalogError::RequestBuild { .. } => Self::RequestBuildError { source },
            CatalogError::Transport { .. } => Self::TransportError { source },
            CatalogError::Rejected { .. } => Self::PublishRejected { source },
        }
    }
}
