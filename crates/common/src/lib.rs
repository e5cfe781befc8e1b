//! Shared runtime helpers for the catalog workspace.

pub mod utils;
