// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and a router wired exactly like the production server
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pierre_energy_server`

use axum::Router;
use pierre_energy_server::{
    config::{environment::ServerConfig, nutrition::EnergyConfig},
    models::{ActivityLevel, Goal, Profile, Sex},
    server::build_router,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Router with default server settings and calculator configuration
pub fn test_router() -> Router {
    init_test_logging();
    build_router(&ServerConfig::default(), Arc::new(EnergyConfig::default()))
}

/// Router with custom server settings
pub fn test_router_with(config: &ServerConfig) -> Router {
    init_test_logging();
    build_router(config, Arc::new(EnergyConfig::default()))
}

/// Fully specified profile
pub fn profile(
    age: f64,
    sex: Sex,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
    goal: Goal,
) -> Profile {
    Profile::new(age, height_cm, weight_kg)
        .with_sex(sex)
        .with_activity_level(activity_level)
        .with_goal(goal)
}
