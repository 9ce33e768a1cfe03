//! Integration tests for loading configuration and wiring the task API.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use hypertodo::api::{CollectionQuery, InMemoryTodoResource, ResourceInitError};
use hypertodo::config::{ApiConfig, ConfigError};
use hypertodo::hypermedia::negotiation::FormatRequest;
use rstest::rstest;
use serde_json::Value;

#[rstest]
fn empty_document_yields_defaults() {
    let config = ApiConfig::from_json_str("{}").expect("empty config should parse");

    assert_eq!(config, ApiConfig::default());
    assert_eq!(config.base_url, "http://localhost:5000");
    assert_eq!(config.default_take, 2);
    assert_eq!(config.seed_count, 4);
}

#[rstest]
fn partial_document_keeps_remaining_defaults() {
    let config =
        ApiConfig::from_json_str(r#"{"seed_count": 10}"#).expect("partial config should parse");

    assert_eq!(config.seed_count, 10);
    assert_eq!(config.default_take, 2);
}

#[rstest]
#[case::unknown_field(r#"{"base_uri": "http://localhost"}"#)]
#[case::wrong_type(r#"{"default_take": "two"}"#)]
#[case::not_json("base_url = 'x'")]
fn malformed_documents_are_parse_errors(#[case] json: &str) {
    let result = ApiConfig::from_json_str(json);

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[rstest]
#[case::relative("/api")]
#[case::blank("")]
fn relative_base_url_is_rejected(#[case] base_url: &str) {
    let json = serde_json::json!({ "base_url": base_url }).to_string();

    let result = ApiConfig::from_json_str(&json);

    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));
}

#[rstest]
fn zero_default_take_is_rejected() {
    let result = ApiConfig::from_json_str(r#"{"default_take": 0}"#);

    assert!(matches!(result, Err(ConfigError::ZeroDefaultTake)));
}

#[rstest]
fn missing_file_reports_its_path() {
    let path = Utf8Path::new("does/not/exist/hypertodo.json");

    let result = ApiConfig::from_path(path);

    match result {
        Err(ConfigError::Read { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[rstest]
fn path_without_file_name_is_a_read_error() {
    let result = ApiConfig::from_path(Utf8Path::new("/"));

    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[rstest]
fn config_file_is_loaded_from_its_directory() {
    let temp_root = Utf8PathBuf::from_path_buf(std::env::temp_dir())
        .expect("temp dir should be UTF-8");
    let dir_name = format!("hypertodo-config-{}", std::process::id());
    let root = Dir::open_ambient_dir(&temp_root, ambient_authority())
        .expect("temp dir should open");
    root.create_dir_all(&dir_name)
        .expect("config dir should be created");
    let config_dir = root.open_dir(&dir_name).expect("config dir should open");
    config_dir
        .write(
            "hypertodo.json",
            r#"{"base_url": "https://tasks.example", "seed_count": 7}"#,
        )
        .expect("config should be written");

    let result = ApiConfig::from_path(&temp_root.join(&dir_name).join("hypertodo.json"));
    root.remove_dir_all(&dir_name)
        .expect("config dir should be removed");

    let config = result.expect("config should load");
    assert_eq!(config.base_url, "https://tasks.example");
    assert_eq!(config.seed_count, 7);
    assert_eq!(config.default_take, 2);
}

#[rstest]
fn resource_rejects_invalid_config() {
    let config = ApiConfig {
        default_take: 0,
        ..ApiConfig::default()
    };

    let result = InMemoryTodoResource::from_config(&config);

    assert!(matches!(
        result,
        Err(ResourceInitError::Config(ConfigError::ZeroDefaultTake))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_resource_roots_links_and_pages() {
    let config = ApiConfig::from_json_str(
        r#"{"base_url": "https://tasks.example/", "default_take": 1, "seed_count": 3}"#,
    )
    .expect("config should parse");
    let resource = InMemoryTodoResource::from_config(&config).expect("resource should build");

    let reply = resource
        .get_collection(CollectionQuery::new().with_skip(1), &FormatRequest::new())
        .await;

    assert_eq!(reply.status(), 200);
    let body: Value = serde_json::from_slice(reply.body()).expect("body should be JSON");
    let items = body["items"].as_array().expect("collection should list items");
    let descriptions: Vec<&str> = items
        .iter()
        .filter_map(|item| item["description"].as_str())
        .collect();
    assert_eq!(descriptions, ["Task (1)"]);

    let hrefs: Vec<&str> = body["links"]
        .as_array()
        .expect("collection should carry links")
        .iter()
        .filter_map(|link| link["href"].as_str())
        .collect();
    assert_eq!(
        hrefs,
        [
            "https://tasks.example/api/todos?skip=0&take=1",
            "https://tasks.example/api/todos?skip=2&take=1",
            "https://tasks.example/api/todos?skip=1&take=1",
        ]
    );
}
