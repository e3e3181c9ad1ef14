// ABOUTME: Configuration module organization for server and calculator settings
// ABOUTME: Environment-driven server config plus immutable energy calculator constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! - [`environment`]: HTTP server settings read from environment variables
//! - [`nutrition`]: coefficients used by the energy calculator

/// Environment-based server configuration
pub mod environment;
/// Energy calculator coefficients
pub mod nutrition;

pub use environment::{LogLevel, ServerConfig};
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, ConfigError, EnergyConfig, GoalAdjustmentConfig,
    MacronutrientConfig,
};
