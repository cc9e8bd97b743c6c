//! Shared helpers for the controller integration tests.
//!
//! The client is blocking, so every call into the crate goes through
//! `spawn_blocking` while WireMock runs on the test runtime.

#![allow(dead_code)]

use sensores_sync::config::Config;
use std::path::PathBuf;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer};

pub const PASSWORD: &str = "presidente";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Config pointing at the mock server and a file inside `dir`.
pub fn config_for(server: &MockServer, file: PathBuf) -> Config {
    Config {
        host: server.uri(),
        file,
        download_timeout: Duration::from_secs(5),
    }
}

/// Matches `/sensores.json?senha=presidente` with the given method.
pub fn sensors_mock(method_matcher: &str) -> wiremock::MockBuilder {
    Mock::given(method(method_matcher))
        .and(path("/sensores.json"))
        .and(query_param("senha", PASSWORD))
}
