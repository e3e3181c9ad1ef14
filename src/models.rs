// ABOUTME: Request and response data models for the energy calculator
// ABOUTME: Profile resolution with defaults and numeric coercion, plus the serialized report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! A request body is a loosely typed JSON document. [`extract_profile`] finds
//! the `profile` member and [`Profile::from_json`] resolves it into a fully
//! populated [`Profile`]: optional text fields receive their documented
//! defaults and numeric fields are coerced the way a JavaScript `Number()`
//! call would, so malformed numbers become `NaN` instead of errors.

use crate::constants::profile_defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Biological sex selecting the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// `"male"` in any letter case
    Male,
    /// Every other value
    Female,
}

impl Sex {
    /// Case-insensitive parse; only `male` selects [`Sex::Male`]
    #[must_use]
    pub fn from_input(value: &str) -> Self {
        if value.to_lowercase() == "male" {
            Self::Male
        } else {
            Self::Female
        }
    }
}

/// Activity level keyed into the TDEE multiplier table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// `sedentary`
    Sedentary,
    /// `light`
    Light,
    /// `moderate`
    Moderate,
    /// `active`
    Active,
    /// `very_active`
    VeryActive,
    /// Any other (lower-cased) value; uses the fallback multiplier
    Unrecognized(String),
}

impl ActivityLevel {
    /// Case-insensitive parse; unknown values are kept as [`ActivityLevel::Unrecognized`]
    #[must_use]
    pub fn from_input(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            other => Self::Unrecognized(other.to_owned()),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sedentary => f.write_str("sedentary"),
            Self::Light => f.write_str("light"),
            Self::Moderate => f.write_str("moderate"),
            Self::Active => f.write_str("active"),
            Self::VeryActive => f.write_str("very_active"),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// Training goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit, higher protein
    FatLoss,
    /// Caloric surplus, highest protein
    Bulk,
    /// Maintenance; also every unrecognized goal
    Maintain,
}

impl Goal {
    /// Case-insensitive parse; anything besides `fat_loss` and `bulk` maintains
    #[must_use]
    pub fn from_input(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "fat_loss" => Self::FatLoss,
            "bulk" => Self::Bulk,
            _ => Self::Maintain,
        }
    }
}

/// Fully resolved calculator input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Age in years
    pub age: f64,
    /// Sex (default male)
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Activity level (default moderate)
    pub activity_level: ActivityLevel,
    /// Goal (default maintain)
    pub goal: Goal,
}

impl Profile {
    /// Profile with the required measurements and every optional field defaulted
    #[must_use]
    pub fn new(age: f64, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            age,
            sex: Sex::from_input(profile_defaults::SEX),
            height_cm,
            weight_kg,
            activity_level: ActivityLevel::from_input(profile_defaults::ACTIVITY_LEVEL),
            goal: Goal::from_input(profile_defaults::GOAL),
        }
    }

    /// Set the sex
    #[must_use]
    pub const fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    /// Set the activity level
    #[must_use]
    pub fn with_activity_level(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = activity_level;
        self
    }

    /// Set the goal
    #[must_use]
    pub const fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }

    /// Resolve a present `profile` JSON value
    ///
    /// Non-object values resolve as if every field were absent.
    ///
    /// # Errors
    ///
    /// Returns an internal error if `sex`, `activity_level` or `goal` holds a
    /// truthy value that is not a string.
    pub fn from_json(value: &Value) -> AppResult<Self> {
        let fields = value.as_object();
        let field = |key: &str| fields.and_then(|map| map.get(key));

        Ok(Self {
            age: coerce_number(field("age")),
            sex: Sex::from_input(&text_field(fields, "sex", profile_defaults::SEX)?),
            height_cm: coerce_number(field("height_cm")),
            weight_kg: coerce_number(field("weight_kg")),
            activity_level: ActivityLevel::from_input(&text_field(
                fields,
                "activity_level",
                profile_defaults::ACTIVITY_LEVEL,
            )?),
            goal: Goal::from_input(&text_field(fields, "goal", profile_defaults::GOAL)?),
        })
    }
}

/// Locate the `profile` member of a request body
///
/// # Errors
///
/// - internal error when the body itself is JSON `null`
/// - missing-profile error when `profile` is absent or falsy
pub fn extract_profile(body: &Value) -> AppResult<&Value> {
    let profile = match body {
        Value::Null => {
            return Err(AppError::internal(
                "Request body is null; cannot read property 'profile'",
            ))
        }
        Value::Object(map) => map.get("profile"),
        _ => None,
    };

    match profile {
        Some(value) if is_truthy(value) => Ok(value),
        _ => Err(AppError::missing_profile()),
    }
}

/// JavaScript truthiness of a JSON value
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Optional text field with default; falsy non-strings fall back to the default
fn text_field(fields: Option<&Map<String, Value>>, key: &str, default: &str) -> AppResult<String> {
    match fields.and_then(|map| map.get(key)) {
        None => Ok(default.to_owned()),
        Some(Value::String(text)) => Ok(text.to_lowercase()),
        Some(value) if !is_truthy(value) => Ok(default.to_owned()),
        Some(value) => Err(AppError::internal(format!(
            "{key} must be a string, got {}",
            json_type_name(value)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coerce a JSON value to a number following JavaScript `Number()` rules
///
/// Missing values, objects and unparseable strings become `NaN`;
/// `null`, `false` and blank strings become `0`. Arrays are read through
/// their joined text form: `[]` is `0`, a single element coerces like its
/// text, and longer arrays are `NaN`.
#[must_use]
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Object(_)) => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => parse_numeric_string(text),
        Some(Value::Array(items)) => coerce_array(items),
    }
}

fn coerce_array(items: &[Value]) -> f64 {
    match items {
        [] => 0.0,
        // Element text: `null` is empty, booleans and objects are words
        [Value::Null] => 0.0,
        [Value::Bool(_) | Value::Object(_)] => f64::NAN,
        [element] => coerce_number(Some(element)),
        _ => f64::NAN,
    }
}

fn parse_numeric_string(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix_literal = trimmed
        .get(..2)
        .and_then(|prefix| match prefix {
            "0x" | "0X" => Some(16),
            "0o" | "0O" => Some(8),
            "0b" | "0B" => Some(2),
            _ => None,
        })
        .map(|radix| (radix, &trimmed[2..]));
    if let Some((radix, digits)) = radix_literal {
        return parse_radix_digits(digits, radix);
    }

    let is_decimal_literal = trimmed.bytes().any(|b| b.is_ascii_digit())
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal_literal {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
        })
        .unwrap_or(f64::NAN)
}

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroBreakdown {
    /// Protein grams, 1 decimal
    pub protein_g: f64,
    /// Carbohydrate grams, 1 decimal
    pub carbs_g: f64,
    /// Fat grams, 1 decimal
    pub fat_g: f64,
}

/// Calculator output
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyReport {
    /// Basal metabolic rate, kcal/day, 2 decimals
    pub bmr: f64,
    /// Total daily energy expenditure, kcal/day, 2 decimals
    pub tdee: f64,
    /// Whole-number calorie target; `None` (JSON `null`) when not finite
    #[serde(serialize_with = "serialize_whole")]
    pub target_calories: Option<f64>,
    /// Macro breakdown derived from the unrounded target
    pub macros: MacroBreakdown,
}

/// Magnitude from which an integral `f64` no longer fits in `i64`
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Write an integral value without a fractional part while it fits in `i64`
#[allow(clippy::ref_option)]
fn serialize_whole<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(whole) if whole.abs() < I64_LIMIT => serializer.serialize_i64(*whole as i64),
        Some(whole) => serializer.serialize_f64(*whole),
        None => serializer.serialize_none(),
    }
}
