pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::TidyConfig;

pub use crate::core::{
    capostrophe, frac, hms, nullify, nullify_fields, nullify_json, Blank, Capostrophe, FracExt,
    HmsExt, Nullify,
};
pub use crate::domain::{model::Record, ports::FieldStore};
pub use crate::utils::error::{Result, TidyError};
