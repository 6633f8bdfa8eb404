//! Database query modules.
//!
//! - local_presets: Local preset CRUD

pub mod local_presets;
