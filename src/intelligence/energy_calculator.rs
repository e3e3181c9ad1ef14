// ABOUTME: Energy calculation algorithms: Mifflin-St Jeor BMR, TDEE, calorie target and macros
// ABOUTME: Pure, deterministic functions over a resolved profile and immutable configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Energy Calculator Module
//!
//! Computes basal metabolic rate, total daily energy expenditure, a daily
//! calorie target and a protein / carbohydrate / fat split.
//!
//! The macro split and the published calorie target both derive from the
//! same unrounded target but are rounded independently, so the macro
//! calories need not add up to `target_calories` exactly.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use super::rounding::{round_decimal, round_whole};
use crate::config::nutrition::{
    ActivityFactorsConfig, BmrConfig, EnergyConfig, GoalAdjustmentConfig, MacronutrientConfig,
};
use crate::errors::AppResult;
use crate::models::{
    extract_profile, ActivityLevel, EnergyReport, Goal, MacroBreakdown, Profile, Sex,
};
use serde_json::Value;
use tracing::debug;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Female: -161
///
/// No range checks are applied; `NaN` inputs propagate.
// Separate multiply and add keep results identical to the unfused formula.
#[allow(clippy::suboptimal_flops)]
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let base = config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * age;

    match sex {
        Sex::Male => base + config.msj_male_constant,
        Sex::Female => base + config.msj_female_constant,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity multiplier. Levels missing from the table
/// use the fallback multiplier (1.55).
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: &ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.multiplier(activity_level)
}

/// Unrounded daily calorie target for a goal
#[must_use]
pub fn calculate_target_calories(tdee: f64, goal: Goal, config: &GoalAdjustmentConfig) -> f64 {
    let mut target = tdee;
    if goal == Goal::FatLoss {
        target = tdee - config.fat_loss_deficit_kcal;
    }
    if goal == Goal::Bulk {
        target = tdee + config.bulk_surplus_kcal;
    }
    target
}

/// Protein grams per kilogram of body weight for a goal
#[must_use]
pub const fn protein_factor(goal: Goal, config: &MacronutrientConfig) -> f64 {
    match goal {
        Goal::FatLoss => config.protein_fat_loss_g_per_kg,
        Goal::Bulk => config.protein_bulk_g_per_kg,
        Goal::Maintain => config.protein_maintain_g_per_kg,
    }
}

/// Split an unrounded calorie target into macro grams
///
/// Protein is fixed per kilogram, fat takes a fixed share of the target and
/// carbohydrates take the remaining calories. Intermediate calorie figures
/// are rounded to 2 decimals, gram figures to 1.
#[must_use]
pub fn calculate_macros(
    weight_kg: f64,
    target_calories: f64,
    goal: Goal,
    config: &MacronutrientConfig,
) -> MacroBreakdown {
    let protein_g = round_decimal(protein_factor(goal, config) * weight_kg, 1);
    let protein_kcal = protein_g * config.protein_kcal_per_g;

    let fat_kcal = round_decimal(config.fat_share_of_calories * target_calories, 2);
    let fat_g = round_decimal(fat_kcal / config.fat_kcal_per_g, 1);

    let carbs_kcal = round_decimal(target_calories - protein_kcal - fat_kcal, 2);
    let carbs_g = round_decimal(carbs_kcal / config.carbs_kcal_per_g, 1);

    MacroBreakdown {
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// Calculate the complete energy report for a resolved profile
///
/// This is the main entry point combining BMR, TDEE, calorie target and
/// macronutrient calculations.
#[must_use]
pub fn calculate_energy_needs(profile: &Profile, config: &EnergyConfig) -> EnergyReport {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, &profile.activity_level, &config.activity_factors);
    let target = calculate_target_calories(tdee, profile.goal, &config.goal_adjustments);
    let macros = calculate_macros(
        profile.weight_kg,
        target,
        profile.goal,
        &config.macronutrients,
    );

    debug!(
        bmr,
        tdee,
        target,
        activity_level = %profile.activity_level,
        goal = ?profile.goal,
        "Energy needs calculated"
    );

    EnergyReport {
        bmr: round_decimal(bmr, 2),
        tdee: round_decimal(tdee, 2),
        target_calories: round_whole(target),
        macros,
    }
}

/// Calculate the energy report straight from a request body
///
/// Looks up `profile`, resolves defaults and coercions, then calculates.
///
/// # Errors
///
/// Returns a missing-profile error when the body has no usable profile and an
/// internal error for bodies or fields that cannot be read.
pub fn calculate_from_body(body: &Value, config: &EnergyConfig) -> AppResult<EnergyReport> {
    let profile = Profile::from_json(extract_profile(body)?)?;
    Ok(calculate_energy_needs(&profile, config))
}
