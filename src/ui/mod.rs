// StatusBoard - ui/mod.rs
//
// UI layer: presentation only. Renders page results as plain text for the
// command-line shell.
// Dependencies: app (page reports), core (read-only models).
// Must NOT depend on: platform, direct I/O.

pub mod dashboard;
pub mod info;
pub mod table;
