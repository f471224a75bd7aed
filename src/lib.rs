#![forbid(unsafe_code)]
//! Build-time generation of strongly-typed accessors for files deployed
//! alongside compiled output.

pub mod cancel;
pub mod cli;
pub mod conflict;
pub mod diagnostics;
pub mod error;
pub mod expand;
pub mod generator;
pub mod ident;
pub mod manifest;
pub mod scopes;
pub mod segments;
pub mod solution;
pub mod templates;
pub mod tree;

pub use error::{Error, Result};
