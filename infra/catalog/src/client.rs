use crate::document::ApiDocument;
use crate::error::{CatalogError, CatalogErrorExt};
use oaspub_domain::config::DEFAULT_CATALOG_URL;
use private::Sealed;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{StatusCode, Url};
use std::fmt;
use tracing::{debug, info, warn};

/// OpenAPI specification version announced to the catalog.
pub const OAS_VERSION: &str = "3.0";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// One document upload.
#[derive(Debug, Clone, Copy)]
pub struct PublishRequest<'a> {
    pub domain: &'a str,
    pub name: &'a str,
    pub version: &'a str,
    pub document: &'a ApiDocument,
}

/// Acknowledgement of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub name: String,
    pub version: String,
}

impl fmt::Display for PublishReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Publish {} of {} is successful", self.name, self.version)
    }
}

#[derive(Debug, Default)]
pub struct NoKey;
pub struct WithKey(String);

impl fmt::Debug for WithKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WithKey(<redacted>)")
    }
}

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoKey {}
impl Sealed for WithKey {}

/// Builder for [`CatalogClient`]. An API key must be supplied before [`build`](CatalogClientBuilder::build).
#[allow(private_bounds)]
#[derive(Debug)]
pub struct CatalogClientBuilder<S: Sealed = NoKey> {
    state: S,
    base_url: String,
}

impl Default for CatalogClientBuilder<NoKey> {
    fn default() -> Self {
        Self { state: NoKey, base_url: DEFAULT_CATALOG_URL.to_owned() }
    }
}

#[allow(private_bounds)]
impl<S: Sealed> CatalogClientBuilder<S> {
    #[must_use = "Sets the catalog root URL"]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl CatalogClientBuilder<NoKey> {
    #[must_use = "Creates a new catalog client builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the API key sent as the raw Authorization header"]
    pub fn api_key(self, key: impl Into<String>) -> CatalogClientBuilder<WithKey> {
        CatalogClientBuilder { state: WithKey(key.into()), base_url: self.base_url }
    }
}

impl CatalogClientBuilder<WithKey> {
    /// Validates the settings and creates the client.
    ///
    /// No connection is opened here; the only network call happens in
    /// [`CatalogClient::publish`].
    ///
    /// # Errors
    /// Returns [`CatalogError::RequestBuild`] if:
    /// - the base URL does not parse or cannot carry path segments;
    /// - the API key is empty or not a valid header value;
    /// - the default HTTP client cannot be initialized.
    pub fn build(self) -> Result<CatalogClient, CatalogError> {
        let base_url = Url::parse(self.base_url.trim()).map_err(|e| CatalogError::RequestBuild {
            message: e.to_string().into(),
            context: Some(format!("Invalid catalog URL '{}'", self.base_url).into()),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::request_build(format!(
                "Catalog URL '{base_url}' cannot carry path segments"
            )));
        }

        if self.state.0.is_empty() {
            return Err(CatalogError::request_build("API key must not be empty"));
        }
        let mut auth = HeaderValue::from_str(&self.state.0).map_err(|e| {
            CatalogError::RequestBuild {
                message: e.to_string().into(),
                context: Some("API key is not a valid header value".into()),
            }
        })?;
        auth.set_sensitive(true);

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to initialize HTTP client")?;

        Ok(CatalogClient { http, base_url, auth })
    }
}

/// Client for the SwaggerHub registry API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
    auth: HeaderValue,
}

impl CatalogClient {
    #[must_use = "Creates a new catalog client builder"]
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::new()
    }

    /// Builds `{base}/apis/{domain}/{name}?version=..&oas=3.0&isPrivate=true&force=true`.
    ///
    /// # Errors
    /// Returns [`CatalogError::RequestBuild`] when the domain, name or version is empty.
    pub fn endpoint(&self, request: &PublishRequest<'_>) -> Result<Url, CatalogError> {
        for (field, value) in
            [("domain", request.domain), ("name", request.name), ("version", request.version)]
        {
            if value.trim().is_empty() {
                return Err(CatalogError::request_build(format!("API {field} must not be empty")));
            }
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::request_build("Catalog URL cannot carry path segments"))?
            .pop_if_empty()
            .extend(["apis", request.domain, request.name]);
        url.query_pairs_mut()
            .append_pair("version", request.version)
            .append_pair("oas", OAS_VERSION)
            .append_pair("isPrivate", "true")
            .append_pair("force", "true");

        Ok(url)
    }

    /// Uploads the document, overwriting any existing revision with the same version.
    ///
    /// Exactly one HTTP request is sent; there are no retries.
    ///
    /// # Errors
    /// - [`CatalogError::RequestBuild`] for malformed URL components.
    /// - [`CatalogError::Serialization`] if the document cannot be serialized.
    /// - [`CatalogError::Transport`] if the request does not complete.
    /// - [`CatalogError::Rejected`] for any status other than `200 OK`, carrying the body.
    pub async fn publish(
        &self,
        request: &PublishRequest<'_>,
    ) -> Result<PublishReceipt, CatalogError> {
        let url = self.endpoint(request)?;
        let payload = request.document.to_vec()?;

        debug!(%url, bytes = payload.len(), "Uploading API document");

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, self.auth.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(payload)
            .send()
            .await
            .context("Failed to submit request to SwaggerHub")?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, "Failed to read rejection body");
                    String::new()
                },
            };
            warn!(%status, name = request.name, version = request.version, "Catalog rejected the document");
            return Err(CatalogError::Rejected { status, body, context: None });
        }

        info!(name = request.name, version = request.version, "API document published");

        Ok(PublishReceipt { name: request.name.to_owned(), version: request.version.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CatalogClient {
        CatalogClient::builder().base_url(base).api_key("key").build().unwrap()
    }

    fn request<'a>(doc: &'a ApiDocument, domain: &'a str, name: &'a str) -> PublishRequest<'a> {
        PublishRequest { domain, name, version: "feature_x", document: doc }
    }

    #[test]
    fn test_builder_defaults_to_public_registry() {
        assert_eq!(CatalogClientBuilder::new().base_url, DEFAULT_CATALOG_URL);
    }

    #[test]
    fn test_endpoint_matches_catalog_layout() {
        let doc = ApiDocument::default();
        let url = client(DEFAULT_CATALOG_URL).endpoint(&request(&doc, "acme", "petstore")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.swaggerhub.com/apis/acme/petstore?version=feature_x&oas=3.0&isPrivate=true&force=true"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let doc = ApiDocument::default();
        let url = client("http://localhost:8080/registry/")
            .endpoint(&request(&doc, "acme", "petstore"))
            .unwrap();
        assert_eq!(url.path(), "/registry/apis/acme/petstore");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let doc = ApiDocument::default();
        let url = client(DEFAULT_CATALOG_URL).endpoint(&request(&doc, "acme", "pet store/v2")).unwrap();
        assert_eq!(url.path(), "/apis/acme/pet%20store%2Fv2");
    }

    #[test]
    fn test_empty_components_are_rejected() {
        let doc = ApiDocument::default();
        let c = client(DEFAULT_CATALOG_URL);
        for (domain, name) in [("", "petstore"), ("acme", ""), ("  ", "petstore")] {
            let err = c.endpoint(&request(&doc, domain, name)).unwrap_err();
            assert!(matches!(err, CatalogError::RequestBuild { .. }), "unexpected error: {err}");
        }
    }

    #[test]
    fn test_builder_rejects_bad_inputs() {
        let bad_url = CatalogClient::builder().base_url("not a url").api_key("key").build();
        assert!(matches!(bad_url, Err(CatalogError::RequestBuild { .. })));

        let opaque = CatalogClient::builder().base_url("mailto:ops@example.com").api_key("k").build();
        assert!(matches!(opaque, Err(CatalogError::RequestBuild { .. })));

        let empty_key = CatalogClient::builder().api_key("").build();
        assert!(matches!(empty_key, Err(CatalogError::RequestBuild { .. })));

        let bad_key = CatalogClient::builder().api_key("line\nbreak").build();
        assert!(matches!(bad_key, Err(CatalogError::RequestBuild { .. })));
    }

    #[test]
    fn test_receipt_message() {
        let receipt = PublishReceipt { name: "petstore".to_owned(), version: "main".to_owned() };
        assert_eq!(receipt.to_string(), "Publish petstore of main is successful");
    }
}
