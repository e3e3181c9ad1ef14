// ABOUTME: Route module organization for the energy calculator HTTP endpoints
// ABOUTME: Groups the calculation endpoint with service health endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the calculator.

/// BMR / TDEE / macro calculation route
pub mod bmr;
/// Health check and readiness routes
pub mod health;

/// Energy calculation route handlers
pub use bmr::BmrRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
