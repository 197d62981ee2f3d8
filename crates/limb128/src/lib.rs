//! limb128 library: application logic behind the `limb128` binary.

pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod ops;
pub mod output;
