// ABOUTME: Command-line energy calculator sharing the HTTP API's calculation path
// ABOUTME: Builds a profile from flags and prints the energy report as JSON
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # bmr-cli
//!
//! ```text
//! bmr-cli --age 30 --height-cm 180 --weight-kg 80 --sex male --activity-level moderate --goal maintain
//! ```
//!
//! Output is byte-identical to the HTTP response body for the same profile
//! unless `--pretty` is given.

use anyhow::{Context, Result};
use clap::Parser;
use pierre_energy_server::{
    config::nutrition::EnergyConfig,
    constants::profile_defaults,
    intelligence::calculate_energy_needs,
    models::{ActivityLevel, Goal, Profile, Sex},
};

#[derive(Parser)]
#[command(name = "bmr-cli")]
#[command(about = "Calculate BMR, TDEE, a calorie target and macros for a profile")]
struct Args {
    /// Age in years
    #[arg(long)]
    age: f64,

    /// Height in centimeters
    #[arg(long)]
    height_cm: f64,

    /// Weight in kilograms
    #[arg(long)]
    weight_kg: f64,

    /// `male` or anything else for female
    #[arg(long, default_value = profile_defaults::SEX)]
    sex: String,

    /// sedentary, light, moderate, active or `very_active`
    #[arg(long, default_value = profile_defaults::ACTIVITY_LEVEL)]
    activity_level: String,

    /// `fat_loss`, bulk or maintain
    #[arg(long, default_value = profile_defaults::GOAL)]
    goal: String,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = EnergyConfig::global();
    config.validate()?;

    let profile = Profile::new(args.age, args.height_cm, args.weight_kg)
        .with_sex(Sex::from_input(&args.sex))
        .with_activity_level(ActivityLevel::from_input(&args.activity_level))
        .with_goal(Goal::from_input(&args.goal));

    let report = calculate_energy_needs(&profile, config);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("Failed to serialize energy report")?;

    println!("{rendered}");
    Ok(())
}
