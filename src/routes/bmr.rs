// ABOUTME: Energy calculation route handler for the BMR / TDEE / macro endpoint
// ABOUTME: Decodes the JSON body, runs the calculator, and maps failures to 400/500 responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy calculation route
//!
//! `POST /api/bmr` with `{ "profile": { ... } }`. The body is decoded as a
//! raw JSON value instead of a typed extractor so that loosely typed input
//! (numeric strings, missing fields, non-object profiles) reaches the
//! calculator's coercion rules rather than being rejected up front.

use crate::config::nutrition::EnergyConfig;
use crate::constants::routes;
use crate::errors::{AppError, AppResult};
use crate::intelligence::energy_calculator::calculate_from_body;
use crate::models::EnergyReport;
use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Energy calculation routes
pub struct BmrRoutes;

impl BmrRoutes {
    /// Create the calculation route backed by the given configuration
    pub fn routes(config: Arc<EnergyConfig>) -> Router {
        Router::new()
            .route(routes::BMR, post(Self::handle_calculate))
            .with_state(config)
    }

    /// Handle an energy calculation request
    async fn handle_calculate(
        State(config): State<Arc<EnergyConfig>>,
        body: Bytes,
    ) -> Result<Json<EnergyReport>, AppError> {
        match Self::calculate(&body, &config) {
            Ok(report) => {
                if report.target_calories.is_none() {
                    warn!("Energy report contains non-finite values; check numeric profile fields");
                }
                Ok(Json(report))
            }
            Err(e) if e.code.is_client_error() => {
                info!(error.code = ?e.code, "Rejected energy calculation request: {}", e.message);
                Err(e)
            }
            Err(e) => {
                error!(error.code = ?e.code, "bmr error: {e}");
                Err(e)
            }
        }
    }

    fn calculate(body: &[u8], config: &EnergyConfig) -> AppResult<EnergyReport> {
        let body: Value = serde_json::from_slice(body)?;
        calculate_from_body(&body, config)
    }
}
