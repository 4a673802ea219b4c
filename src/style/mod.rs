//! Request-level styling: the config struct, presets, fonts and the query boundary.

pub mod config;
pub mod fonts;
pub mod query;
pub mod theme;
