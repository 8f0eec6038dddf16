//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the router with a test configuration
//! - Helper functions for creating conversion forms

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;

use deck_convert_backend::config::ServerConfig;
use deck_convert_backend::{build_router, AppState};

/// Public URL used by the test configuration.
pub const TEST_PUBLIC_URL: &str = "https://cards.test";

/// Test context holding the configuration and router under test.
pub struct TestContext {
    pub config: ServerConfig,
    app: Router,
}

impl TestContext {
    /// Create a new test context with default limits.
    pub fn new() -> Self {
        Self::with_config(ServerConfig {
            public_url: TEST_PUBLIC_URL.to_string(),
            ..ServerConfig::default()
        })
    }

    /// Create a test context with a custom input size limit.
    pub fn with_max_input_bytes(max_input_bytes: usize) -> Self {
        Self::with_config(ServerConfig {
            max_input_bytes,
            public_url: TEST_PUBLIC_URL.to_string(),
            ..ServerConfig::default()
        })
    }

    fn with_config(config: ServerConfig) -> Self {
        let app = build_router(AppState::new(config.clone()));
        Self { config, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}
