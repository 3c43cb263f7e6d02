//! Project configuration files derived from the preference store

pub mod generator;

pub use generator::{jsconfig, to_json_file, tsconfig};
