//! Composite health scoring from self-reported biometrics and regional context.
//!
//! The [`scoring::ScoreEngine`] validates a [`input::HealthInput`], scores five
//! categories, rescales each for the person's region, combines them with fixed
//! weights and attaches advice. Region data comes from an immutable
//! [`region::RegionTable`], by default the built-in Indian state table.

pub mod config;
pub mod input;
pub mod output;
pub mod region;
pub mod scoring;
pub mod telemetry;
