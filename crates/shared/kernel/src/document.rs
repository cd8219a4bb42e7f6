//! Loading of the description document from disk.

use oaspub_catalog::ApiDocument;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Errors raised while loading the description document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// No document path was configured (`SWAGGER_FILE` unset or empty).
    #[error("Document path missing{}: {message}", format_context(.context))]
    MissingPath { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("File read failure{}: {source}", format_context(.context))]
    Read { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("JSON parse failure{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Reads the raw document bytes.
///
/// # Errors
/// Returns [`DocumentError::MissingPath`] for a missing path and
/// [`DocumentError::Read`] if the file cannot be opened or read.
pub async fn read_document(path: Option<&Path>) -> Result<Vec<u8>, DocumentError> {
    let Some(path) = path else {
        return Err(DocumentError::MissingPath {
            message: "SWAGGER_FILE is not defined".into(),
            context: None,
        });
    };

    let bytes = tokio::fs::read(path).await.map_err(|source| DocumentError::Read {
        source,
        context: Some(path.display().to_string().into()),
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read API document");

    Ok(bytes)
}

/// Parses raw bytes into an [`ApiDocument`].
///
/// # Errors
/// Returns [`DocumentError::Parse`] if the bytes are not a JSON object.
pub fn parse_document(bytes: &[u8]) -> Result<ApiDocument, DocumentError> {
    let document = ApiDocument::from_slice(bytes)
        .map_err(|source| DocumentError::Parse { source, context: None })?;
    debug!(
        spec = document.spec_version().unwrap_or("unknown"),
        title = document.title().unwrap_or("untitled"),
        keys = document.len(),
        "Parsed API document"
    );

    Ok(document)
}

/// Reads and parses the document in one step.
///
/// # Errors
/// Any error from [`read_document`] or [`parse_document`].
pub async fn load_document(path: Option<&Path>) -> Result<ApiDocument, DocumentError> {
    let bytes = read_document(path).await?;
    parse_document(&bytes)
}
