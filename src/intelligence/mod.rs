// ABOUTME: Intelligence module for energy expenditure and macronutrient calculations
// ABOUTME: Groups the calculator algorithms with the rounding helpers they publish through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure calculation code. Nothing in here performs I/O or holds state.

/// BMR, TDEE, calorie target and macro split
pub mod energy_calculator;
/// Fixed-point rounding helpers
pub mod rounding;

pub use energy_calculator::{
    calculate_bmr, calculate_energy_needs, calculate_from_body, calculate_macros,
    calculate_target_calories, calculate_tdee, protein_factor,
};
pub use rounding::{round_decimal, round_whole};
