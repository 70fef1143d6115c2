//! CLI support for the `gwalk` binary.

pub mod commands;
