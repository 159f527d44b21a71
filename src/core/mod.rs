// StatusBoard - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library plus the data-format crates (chrono, csv,
// rust_xlsxwriter). Must NOT depend on: ui, platform, or app.

pub mod export;
pub mod filter;
pub mod metrics;
pub mod model;
pub mod roles;
pub mod sample;
