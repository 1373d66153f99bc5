//! `tsdoc` command-line driver: project config and frontend snapshot in,
//! documentation JSON out.

pub mod args;
pub mod driver;
pub mod tracing_config;
