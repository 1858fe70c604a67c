//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod credentials;
mod global;

pub use common::OutputFormat;
pub use credentials::{LoginArgs, RegisterArgs};
pub use global::GlobalOptions;
