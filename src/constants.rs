// ABOUTME: Application constants grouped by domain
// ABOUTME: Service names, environment defaults, and Mifflin-St Jeor / macro reference values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants module
//!
//! Reference values live here so configuration defaults and tests agree on a
//! single source.

/// Service identification used in logs and health responses
pub mod service_names {
    /// Name of the HTTP service
    pub const PIERRE_ENERGY_SERVER: &str = "pierre-energy-server";
}

/// HTTP route paths
pub mod routes {
    /// Energy / macro calculation endpoint
    pub const BMR: &str = "/api/bmr";
    /// Liveness endpoint
    pub const HEALTH: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
}

/// Environment-based server defaults
pub mod env_config {
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
    /// Default CORS policy (any origin)
    pub const DEFAULT_CORS_ORIGINS: &str = "*";
    /// Default maximum request body size in bytes
    pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
    /// Header carrying the request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// Mifflin-St Jeor equation (Mifflin et al., 1990)
pub mod bmr {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age (subtracted)
    pub const AGE_COEF: f64 = -5.0;
    /// Male offset
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female offset
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// TDEE activity multipliers
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Physical job or twice-daily training
    pub const VERY_ACTIVE: f64 = 1.9;
    /// Used when the activity level is not in the table
    pub const FALLBACK: f64 = MODERATE;
}

/// Goal-driven calorie adjustments (kcal/day)
pub mod goal_adjustments {
    /// Deficit applied for `fat_loss`
    pub const FAT_LOSS_DEFICIT_KCAL: f64 = 500.0;
    /// Surplus applied for `bulk`
    pub const BULK_SURPLUS_KCAL: f64 = 400.0;
}

/// Macronutrient targets
pub mod macros {
    /// Protein g/kg while in a deficit
    pub const PROTEIN_FAT_LOSS_G_PER_KG: f64 = 2.2;
    /// Protein g/kg while in a surplus
    pub const PROTEIN_BULK_G_PER_KG: f64 = 2.5;
    /// Protein g/kg at maintenance
    pub const PROTEIN_MAINTAIN_G_PER_KG: f64 = 1.8;
    /// Share of target calories assigned to fat
    pub const FAT_SHARE_OF_CALORIES: f64 = 0.25;
    /// Energy density of protein
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Energy density of carbohydrate
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Energy density of fat
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Profile defaults applied when optional fields are absent
pub mod profile_defaults {
    /// Default sex
    pub const SEX: &str = "male";
    /// Default activity level
    pub const ACTIVITY_LEVEL: &str = "moderate";
    /// Default goal
    pub const GOAL: &str = "maintain";
}
