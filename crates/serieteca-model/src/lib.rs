#![forbid(unsafe_code)]
//! Serieteca domain model.

mod serie;

pub use serie::{Serie, SeriePatch};

pub const CRATE_NAME: &str = "serieteca-model";
