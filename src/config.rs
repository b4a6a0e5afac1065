// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, generator command wiring, and runtime parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! Environment-based configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the external recipe generator process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Executable to spawn for each generation request
    pub command: String,
    /// Arguments passed to the executable
    pub args: Vec<String>,
    /// Optional working directory for the child process
    pub working_dir: Option<PathBuf>,
    /// Optional deadline after which the child is killed
    pub timeout: Option<Duration>,
}

impl GeneratorConfig {
    /// Load generator settings from environment variables
    ///
    /// `GENERATOR_COMMAND` defaults to `python3`, `GENERATOR_ARGS` is a
    /// whitespace-separated argument list defaulting to the bundled script.
    /// `GENERATOR_TIMEOUT_SECS` is unset by default, meaning no deadline.
    ///
    /// # Errors
    ///
    /// Returns an error if `GENERATOR_TIMEOUT_SECS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let command = env::var("GENERATOR_COMMAND").unwrap_or_else(|_| "python3".into());

        let args = env::var("GENERATOR_ARGS")
            .map(|raw| raw.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_else(|_| vec!["ai/generateRecipe.py".to_owned()]);

        let working_dir = env::var("GENERATOR_WORKING_DIR").ok().map(PathBuf::from);

        let timeout = match env::var("GENERATOR_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .context("GENERATOR_TIMEOUT_SECS must be a positive integer")?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            command,
            args,
            working_dir,
            timeout,
        })
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Secret used to verify bearer tokens
    pub jwt_secret: String,
    /// External generator process settings
    pub generator: GeneratorConfig,
    /// Directory of built frontend assets, served as a fallback when set
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT_SECRET` is missing or a numeric variable
    /// fails to parse.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw.parse().context("HTTP_PORT must be a valid port")?,
            Err(_) => 5001,
        };

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        let static_dir = env::var("STATIC_DIR").ok().map(PathBuf::from);

        Ok(Self {
            http_port,
            jwt_secret,
            generator: GeneratorConfig::from_env()?,
            static_dir,
        })
    }

    /// One-line configuration summary safe to log at startup
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} generator={} {} timeout={} static_dir={}",
            self.http_port,
            self.generator.command,
            self.generator.args.join(" "),
            self.generator
                .timeout
                .map_or_else(|| "none".into(), |t| format!("{}s", t.as_secs())),
            self.static_dir
                .as_ref()
                .map_or_else(|| "none".into(), |d| d.display().to_string()),
        )
    }
}
