//! Core types for filemanager.
//!
//! This crate provides the data model shared by the file service and the
//! command-line front end: directory entry records, the uniform operation
//! error, operation requests and process configuration.

mod config;
mod error;
mod operation;
mod record;

pub use config::{Config, ConfigBuilder, ConfigBuilderError, ConfigError, BASE_DIR_VAR, LOG_LEVEL_VAR};
pub use error::{ErrorCause, OperationError, OperationKind};
pub use operation::FileOperation;
pub use record::FileRecord;
