use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use icse_tutor::{
    config::Config,
    server::{self, handlers::AppState},
    tutor::TutorService,
};
use serde_json::Value;
use std::sync::Arc;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config.llm.api_key = "test-api-key".to_string();
    config
}

/// Build the full router around `client`
pub fn create_test_app_with(config: &Config, client: MockLlmClient) -> Router {
    let tutor = TutorService::new(config, Arc::new(client));
    let app_state = AppState {
        tutor: Arc::new(tutor),
    };
    server::router(app_state, &config.server)
}

pub fn create_test_app(client: MockLlmClient) -> Router {
    create_test_app_with(&create_test_config(), client)
}

pub fn ask_request(path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8081
  logs:
    level: "debug"

llm:
  api_key: "test-api-key"
  model: "gemini-2.5-flash-lite"

request_defaults:
  class_level: "10"
"#;
