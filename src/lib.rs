// ABOUTME: Main library entry point for the FlavorMind recipe service
// ABOUTME: Wires the generator boundary, user data store, auth, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

#![deny(unsafe_code)]

//! # FlavorMind Recipe Service
//!
//! An HTTP service that generates recipes by delegating to an external
//! generation process and persists user data behind an opaque document store.
//!
//! ## Architecture
//!
//! - **Generator**: subprocess boundary to the external recipe generator,
//!   including the line-based output framing and its failure taxonomy
//! - **Normalize**: total, defaulting reshaper for the generator's
//!   heterogeneous output
//! - **Store**: document-store abstraction for profiles, favorites, and
//!   cooking history
//! - **Auth**: bearer-token verification for the user data routes
//! - **Routes**: axum handlers mapping generator/store outcomes to HTTP
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flavormind::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("FlavorMind configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Bearer-token verification and issuance
pub mod auth;

/// Environment-based server configuration
pub mod config;

/// Unified error types and HTTP error responses
pub mod errors;

/// Subprocess boundary to the external recipe generator
pub mod generator;

/// Logging configuration and subscriber setup
pub mod logging;

/// Request and recipe data models
pub mod models;

/// Normalization of heterogeneous generator output for display
pub mod normalize;

/// HTTP route handlers
pub mod routes;

/// Server assembly and shared resources
pub mod server;

/// Document-store abstraction for user data
pub mod store;
