// ABOUTME: HTTP route handler modules for the FlavorMind recipe service
// ABOUTME: Groups generation, user data, and health endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! HTTP route handlers

/// Health and readiness endpoints
pub mod health;

/// Recipe generation endpoint
pub mod recipes;

/// User profile, favorites, and cooking-history endpoints
pub mod users;
