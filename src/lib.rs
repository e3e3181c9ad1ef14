// ABOUTME: Main library entry point for the Pierre energy calculator service
// ABOUTME: Exposes the BMR / TDEE / macro calculator as a library and as an HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Energy Server
//!
//! A small HTTP service that estimates daily energy needs from a body profile.
//!
//! ## Features
//!
//! - **BMR**: Mifflin-St Jeor basal metabolic rate
//! - **TDEE**: activity-scaled total daily energy expenditure
//! - **Targets**: goal-adjusted calorie target with a protein / carbs / fat split
//! - **HTTP API**: `POST /api/bmr` plus health and readiness probes
//!
//! ## Architecture
//!
//! - **Intelligence**: pure calculation functions and rounding helpers
//! - **Models**: loosely typed request resolution and the serialized report
//! - **Routes**: Axum handlers mapping results and errors to HTTP
//! - **Config**: calculator coefficients and environment-driven server settings
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_energy_server::config::nutrition::EnergyConfig;
//! use pierre_energy_server::intelligence::calculate_energy_needs;
//! use pierre_energy_server::models::Profile;
//!
//! let report = calculate_energy_needs(&Profile::new(30.0, 180.0, 80.0), &EnergyConfig::default());
//! assert_eq!(report.bmr, 1780.0);
//! assert_eq!(report.target_calories, Some(2759.0));
//! ```

/// Calculator coefficients and server settings
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Energy calculation algorithms
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Request and response data models
pub mod models;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;
