// StatusBoard - app/mod.rs
//
// Application layer: dataset persistence, uploads, exports, page assembly
// and session state.
// Dependencies: core, platform.
// Must NOT depend on: ui.

pub mod export_mgr;
pub mod pages;
pub mod session;
pub mod state;
pub mod store;
pub mod upload;
