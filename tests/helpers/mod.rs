// ABOUTME: Shared test helper modules
// ABOUTME: Re-exports the axum test harness for integration tests

pub mod axum_test;
