// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Builds server resources wired to scripted fake generator processes

#![allow(dead_code)]

use flavormind::config::{GeneratorConfig, ServerConfig};
use flavormind::server::ServerResources;
use flavormind::store::MemoryStore;
use std::sync::Arc;
use std::time::Duration;

/// Shared HS256 secret for test tokens
pub const TEST_JWT_SECRET: &str = "flavormind-test-secret";

/// A generator config that runs an inline shell script instead of the real
/// external process; the script speaks the same stdin/stdout framing protocol
pub fn scripted_generator(script: &str) -> GeneratorConfig {
    GeneratorConfig {
        command: "sh".to_owned(),
        args: vec!["-c".to_owned(), script.to_owned()],
        working_dir: None,
        timeout: None,
    }
}

/// Like [`scripted_generator`] but with a deadline armed
pub fn scripted_generator_with_timeout(script: &str, timeout: Duration) -> GeneratorConfig {
    GeneratorConfig {
        timeout: Some(timeout),
        ..scripted_generator(script)
    }
}

/// Server resources over an in-memory store and the given fake generator
pub fn create_test_resources(generator: GeneratorConfig) -> Arc<ServerResources> {
    let config = ServerConfig {
        http_port: 0,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        generator,
        static_dir: None,
    };
    Arc::new(ServerResources::new(config, Arc::new(MemoryStore::new())))
}

/// A bearer token for the given test user
pub fn bearer_token(resources: &ServerResources, uid: &str, email: Option<&str>) -> String {
    let token = resources
        .auth
        .generate_token(uid, email)
        .expect("test token issues");
    format!("Bearer {token}")
}
