// ABOUTME: Calculator constants for BMR, TDEE, goal adjustments and macro targets
// ABOUTME: Immutable process-wide configuration with validation of every coefficient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Calculation Configuration
//!
//! Holds every coefficient the energy calculator uses. The values are fixed
//! reference constants; [`EnergyConfig::global`] builds them once per process
//! and hands out a shared reference afterwards.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use crate::constants::{activity_factors, bmr, goal_adjustments, macros};
use crate::errors::AppError;
use crate::models::ActivityLevel;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A coefficient must be a positive finite number
    #[error("Value out of range: {0} must be positive and finite")]
    NotPositive(&'static str),

    /// A coefficient must be finite
    #[error("Value out of range: {0} must be finite")]
    NotFinite(&'static str),

    /// A share must lie strictly between 0 and 1
    #[error("Invalid share: {0} must be between 0 and 1")]
    InvalidShare(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}

/// Complete calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EnergyConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multiplier table
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-driven calorie deltas
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein factors, fat share and energy densities
    pub macronutrients: MacronutrientConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: bmr::WEIGHT_COEF,
            msj_height_coef: bmr::HEIGHT_COEF,
            msj_age_coef: bmr::AGE_COEF,
            msj_male_constant: bmr::MALE_CONSTANT,
            msj_female_constant: bmr::FEMALE_CONSTANT,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// `sedentary`: 1.2
    pub sedentary: f64,
    /// `light`: 1.375
    pub light: f64,
    /// `moderate`: 1.55
    pub moderate: f64,
    /// `active`: 1.725
    pub active: f64,
    /// `very_active`: 1.9
    pub very_active: f64,
    /// Any level missing from the table: 1.55
    pub fallback: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            light: activity_factors::LIGHT,
            moderate: activity_factors::MODERATE,
            active: activity_factors::ACTIVE,
            very_active: activity_factors::VERY_ACTIVE,
            fallback: activity_factors::FALLBACK,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level, falling back for unknown levels
    #[must_use]
    pub fn multiplier(&self, level: &ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::Unrecognized(_) => self.fallback,
        }
    }
}

/// Calorie target adjustments per goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalAdjustmentConfig {
    /// kcal subtracted from TDEE for `fat_loss`
    pub fat_loss_deficit_kcal: f64,
    /// kcal added to TDEE for `bulk`
    pub bulk_surplus_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            fat_loss_deficit_kcal: goal_adjustments::FAT_LOSS_DEFICIT_KCAL,
            bulk_surplus_kcal: goal_adjustments::BULK_SURPLUS_KCAL,
        }
    }
}

/// Macronutrient recommendation configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacronutrientConfig {
    /// Protein g/kg for `fat_loss`
    pub protein_fat_loss_g_per_kg: f64,
    /// Protein g/kg for `bulk`
    pub protein_bulk_g_per_kg: f64,
    /// Protein g/kg for every other goal
    pub protein_maintain_g_per_kg: f64,
    /// Fraction of target calories assigned to fat
    pub fat_share_of_calories: f64,
    /// kcal per gram of protein
    pub protein_kcal_per_g: f64,
    /// kcal per gram of carbohydrate
    pub carbs_kcal_per_g: f64,
    /// kcal per gram of fat
    pub fat_kcal_per_g: f64,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_fat_loss_g_per_kg: macros::PROTEIN_FAT_LOSS_G_PER_KG,
            protein_bulk_g_per_kg: macros::PROTEIN_BULK_G_PER_KG,
            protein_maintain_g_per_kg: macros::PROTEIN_MAINTAIN_G_PER_KG,
            fat_share_of_calories: macros::FAT_SHARE_OF_CALORIES,
            protein_kcal_per_g: macros::PROTEIN_KCAL_PER_G,
            carbs_kcal_per_g: macros::CARBS_KCAL_PER_G,
            fat_kcal_per_g: macros::FAT_KCAL_PER_G,
        }
    }
}

/// Global configuration singleton
static ENERGY_CONFIG: OnceLock<EnergyConfig> = OnceLock::new();

impl EnergyConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENERGY_CONFIG.get_or_init(Self::default)
    }

    /// Validate every coefficient
    ///
    /// # Errors
    ///
    /// Returns the first coefficient that is non-finite, non-positive where a
    /// positive value is required, or a share outside `(0, 1)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("bmr.msj_age_coef", self.bmr.msj_age_coef),
            ("bmr.msj_male_constant", self.bmr.msj_male_constant),
            ("bmr.msj_female_constant", self.bmr.msj_female_constant),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }

        let factors = &self.activity_factors;
        let macros = &self.macronutrients;
        let positive = [
            ("bmr.msj_weight_coef", self.bmr.msj_weight_coef),
            ("bmr.msj_height_coef", self.bmr.msj_height_coef),
            ("activity_factors.sedentary", factors.sedentary),
            ("activity_factors.light", factors.light),
            ("activity_factors.moderate", factors.moderate),
            ("activity_factors.active", factors.active),
            ("activity_factors.very_active", factors.very_active),
            ("activity_factors.fallback", factors.fallback),
            (
                "goal_adjustments.fat_loss_deficit_kcal",
                self.goal_adjustments.fat_loss_deficit_kcal,
            ),
            (
                "goal_adjustments.bulk_surplus_kcal",
                self.goal_adjustments.bulk_surplus_kcal,
            ),
            (
                "macronutrients.protein_fat_loss_g_per_kg",
                macros.protein_fat_loss_g_per_kg,
            ),
            (
                "macronutrients.protein_bulk_g_per_kg",
                macros.protein_bulk_g_per_kg,
            ),
            (
                "macronutrients.protein_maintain_g_per_kg",
                macros.protein_maintain_g_per_kg,
            ),
            ("macronutrients.protein_kcal_per_g", macros.protein_kcal_per_g),
            ("macronutrients.carbs_kcal_per_g", macros.carbs_kcal_per_g),
            ("macronutrients.fat_kcal_per_g", macros.fat_kcal_per_g),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive(name));
            }
        }

        let share = macros.fat_share_of_calories;
        if !(share > 0.0 && share < 1.0) {
            return Err(ConfigError::InvalidShare(
                "macronutrients.fat_share_of_calories",
            ));
        }

        Ok(())
    }
}
