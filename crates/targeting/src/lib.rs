//! Audience targeting for ClimAlert.
//!
//! This crate holds the read-only demographic tables behind reach
//! estimation and per-audience message personalization:
//!
//! - [`TargetingTables`] - injected region populations, audience
//!   factors, and advisory suffixes
//! - [`TargetingTables::estimate_reach`] - population-weighted reach
//!   over a region and group selection
//! - [`TargetingTables::personalize`] - action advice plus per-group
//!   safety suffix
//!
//! Deployments can load their own tables; [`TargetingTables::senegal`]
//! ships the product's built-in dataset for Senegal's 14 administrative
//! regions.

mod personalize;
mod reach;
mod tables;

pub use personalize::FALLBACK_ADVICE;
pub use tables::{
    TargetingTables, DEFAULT_COVERAGE_RATE, DEFAULT_FALLBACK_POPULATION, SENEGAL_REGIONS,
};
