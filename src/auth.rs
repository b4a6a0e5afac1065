// ABOUTME: Bearer-token verification for the user data routes
// ABOUTME: Verifies and issues HS256 JWTs, yielding a verified identity or a rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! # Authentication
//!
//! The identity provider is an opaque collaborator; this module only verifies
//! bearer tokens it issued and extracts the verified identity. Token issuance
//! is included for tests and operational tooling.

use crate::errors::AppError;
use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime for issued tokens
const TOKEN_EXPIRY_HOURS: i64 = 24;

/// JWT claims carried by a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub sub: String,
    /// User email, if known at issuance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// A verified identity extracted from a bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: Option<String>,
}

/// Verifies and issues bearer tokens
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthManager {
    /// Create a manager over a shared HS256 secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    /// Issue a token for the given user
    ///
    /// # Errors
    ///
    /// Returns an error if token signing fails.
    pub fn generate_token(
        &self,
        user_id: &str,
        email: Option<&str>,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_owned(),
            email: email.map(str::to_owned),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_EXPIRY_HOURS)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal("Token signing failed").with_source(e))
    }

    /// Verify a raw token and extract the identity
    ///
    /// # Errors
    ///
    /// Returns an `AUTH_INVALID` error for expired, malformed, or wrongly
    /// signed tokens.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::auth_invalid(format!("Invalid authentication token: {e}")))?;
        Ok(AuthenticatedUser {
            user_id: data.claims.sub,
            email: data.claims.email,
        })
    }

    /// Extract and verify the bearer token from request headers
    ///
    /// # Errors
    ///
    /// Returns `AUTH_REQUIRED` when no bearer token is present and
    /// `AUTH_INVALID` when verification fails.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthenticatedUser, AppError> {
        let token = headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or_else(AppError::auth_required)?;
        self.verify(token)
    }
}
