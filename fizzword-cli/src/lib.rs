//! fizzword CLI library
//!
//! This library provides the command-line interface for the fizzword
//! positional word replacer.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
