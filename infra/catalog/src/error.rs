use std::borrow::Cow;

/// A specialized [`CatalogError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document could not be turned into JSON bytes.
    #[error("Serialization failure{}: {source}", format_context(.context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The request could not be assembled (malformed URL components, bad header values).
    #[error("Request build failure{}: {message}", format_context(.context))]
    RequestBuild { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The network call did not complete (DNS, TLS, connect, timeout).
    #[error("Transport failure{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The catalog answered with anything other than `200 OK`.
    #[error("Failed to publish document to SwaggerHub ({status}){}: {body}", format_context(.context))]
    Rejected { status: reqwest::StatusCode, body: String, context: Option<Cow<'static, str>> },
}

impl CatalogError {
    pub(crate) fn request_build(message: impl Into<Cow<'static, str>>) -> Self {
        Self::RequestBuild { message: message.into(), context: None }
    }
}

/// Adds `.context()` to results that convert into [`CatalogError`].
pub trait CatalogErrorExt<T> {
    /// Attaches a human-readable context to the error, if any.
    ///
    /// # Errors
    /// Returns the original error converted into [`CatalogError`] with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CatalogError>;
}

impl<T> CatalogErrorExt<T> for Result<T, CatalogError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                CatalogError::Serialization { context: c, .. }
                | CatalogError::RequestBuild { context: c, .. }
                | CatalogError::Transport { context: c, .. }
                | CatalogError::Rejected { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> CatalogErrorExt<T> for Result<T, serde_json::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CatalogError> {
        self.map_err(|source| CatalogError::Serialization {
            source,
            context: Some(context.into()),
        })
    }
}

impl<T> CatalogErrorExt<T> for Result<T, reqwest::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CatalogError> {
        self.map_err(|source| {
            if source.is_builder() {
                CatalogError::RequestBuild {
                    message: source.to_string().into(),
                    context: Some(context.into()),
                }
            } else {
                CatalogError::Transport { source, context: Some(context.into()) }
            }
        })
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization { source, context: None }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_rendered_in_message() {
        let err: Result<(), CatalogError> = Err(CatalogError::request_build("empty domain"));
        let err = err.context("Building SwaggerHub URL").unwrap_err();
        assert_eq!(err.to_string(), "Request build failure (Building SwaggerHub URL): empty domain");
    }

    #[test]
    fn test_rejection_surfaces_body() {
        let err = CatalogError::Rejected {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "{\"code\":401}".to_owned(),
            context: None,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("401 Unauthorized"));
        assert!(rendered.ends_with("{\"code\":401}"));
    }
}
