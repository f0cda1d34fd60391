//! Retab CLI: re-project tabular data through named column-mapping
//! templates.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
