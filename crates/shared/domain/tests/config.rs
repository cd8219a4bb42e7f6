use oaspub_domain::config::{
    ActionMetadata, CatalogTarget, CiEnvironment, DEFAULT_CATALOG_URL, PublishConfig,
};
use serde_json::json;
use std::path::{Path, PathBuf};

#[test]
fn config_defaults_are_sane() {
    let metadata = ActionMetadata::default();
    assert_eq!(metadata.path, PathBuf::from("."));
    assert_eq!(metadata.image, "golang:1.14.2-alpine3.11");
    assert!(metadata.name.is_empty());
    assert!(metadata.install_list().is_empty());

    let target = CatalogTarget::default();
    assert_eq!(target.base_url, DEFAULT_CATALOG_URL);
    assert!(target.domain.is_empty());

    let env = CiEnvironment::default();
    assert!(env.api_key().is_none());
    assert_eq!(env.branch(), "");
    assert!(env.document_path().is_none());
}

#[test]
fn ci_environment_deserializes_lowercase_keys() {
    let raw = json!({
        "email": "dev@example.com",
        "git_branch": "feature/x",
        "swaggerhub_api_key": "secret",
        "swagger_file": "/tmp/swagger.json"
    });

    let env: CiEnvironment = serde_json::from_value(raw).expect("env deserialize");
    assert_eq!(env.branch(), "feature/x");
    assert_eq!(env.api_key(), Some("secret"));
    assert_eq!(env.document_path(), Some(Path::new("/tmp/swagger.json")));
    assert!(env.github_token.is_none());
}

#[test]
fn empty_api_key_counts_as_absent() {
    let env = CiEnvironment { swaggerhub_api_key: Some(String::new()), ..Default::default() };
    assert!(env.api_key().is_none());
}

#[test]
fn debug_output_redacts_secrets() {
    let env = CiEnvironment {
        github_token: Some("ghp_token".to_owned()),
        swaggerhub_api_key: Some("hub-key".to_owned()),
        ..Default::default()
    };

    let rendered = format!("{env:?}");
    assert!(!rendered.contains("ghp_token"));
    assert!(!rendered.contains("hub-key"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn install_list_trims_and_skips_blanks() {
    let metadata =
        ActionMetadata { install: " git, curl,,openssh ".to_owned(), ..Default::default() };
    assert_eq!(metadata.install_list(), vec!["git", "curl", "openssh"]);
}

#[test]
fn publish_config_clones_share_state() {
    let metadata = ActionMetadata { name: "petstore".to_owned(), ..Default::default() };
    let cfg = PublishConfig::new(metadata, CiEnvironment::default(), CatalogTarget::default());
    let copy = cfg.clone();

    assert_eq!(copy.metadata.name, "petstore");
    assert!(std::ptr::eq(&cfg.metadata, &copy.metadata));
}
