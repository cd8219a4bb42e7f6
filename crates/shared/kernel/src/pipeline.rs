//! The publish pipeline: one linear pass from configuration to upload.

use crate::document::{parse_document, read_document};
use crate::error::PipelineError;
use oaspub_catalog::{CatalogClient, PublishReceipt, PublishRequest};
use oaspub_domain::config::PublishConfig;
use oaspub_domain::version::VersionLabel;
use tracing::{debug, info, warn};

/// Runs the pipeline against `config`.
///
/// Terminal states, in order of evaluation:
/// 1. no API key → [`PipelineError::MissingCredential`];
/// 2. branch sanitizes to nothing → [`PipelineError::EmptyVersion`];
/// 3. document unreadable → [`PipelineError::ReadError`];
/// 4. document not a JSON object → [`PipelineError::ParseError`];
/// 5. upload failed → one of the catalog variants;
/// 6. otherwise the upload receipt.
///
/// Nothing touches the network before step 5.
///
/// # Errors
/// Returns the [`PipelineError`] for whichever terminal state was reached.
pub async fn run(config: &PublishConfig) -> Result<PublishReceipt, PipelineError> {
    let metadata = &config.metadata;
    debug!(
        name = %metadata.name,
        path = %metadata.path.display(),
        image = %metadata.image,
        install = ?metadata.install_list(),
        icon = %metadata.icon,
        color = %metadata.color,
        "Action metadata"
    );

    let Some(api_key) = config.env.api_key() else {
        warn!("No catalog API key configured, skipping upload");
        return Err(PipelineError::MissingCredential);
    };

    let branch = config.env.branch();
    let version = VersionLabel::derive(branch);
    if version.is_empty() {
        warn!(branch, "Branch name yields an empty version, skipping upload");
        return Err(PipelineError::EmptyVersion { branch: branch.to_owned() });
    }
    debug!(branch, %version, "Derived version label");

    let bytes = read_document(config.env.document_path()).await?;
    let document = parse_document(&bytes)?;

    let client = CatalogClient::builder()
        .base_url(config.target.base_url.as_str())
        .api_key(api_key)
        .build()?;

    info!(domain = %config.target.domain, name = %metadata.name, %version, "Publishing API document");

    let receipt = client
        .publish(&PublishRequest {
            domain: &config.target.domain,
            name: &metadata.name,
            version: version.as_str(),
            document: &document,
        })
        .await?;

    Ok(receipt)
}
