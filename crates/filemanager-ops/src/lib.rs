//! File operations engine for filemanager.
//!
//! This crate provides the [`FileService`], which resolves logical paths
//! against a fixed base directory and performs list, create, delete, copy
//! and move operations. Every failure comes back as an
//! [`OperationError`] carrying the operation kind, the logical path the
//! caller supplied and the underlying cause.
//!
//! # Example
//!
//! ```rust,no_run
//! use filemanager_ops::{FileService, TracingLogger};
//!
//! let service = FileService::new("/tmp/fm-test", TracingLogger);
//! service.create("a/b.txt").unwrap();
//! for record in service.list("a").unwrap() {
//!     println!("{}\t{}", record.name, record.size);
//! }
//! ```

mod copy;
mod create;
mod delete;
mod executor;
mod list;
mod logger;
mod move_op;
mod resolve;
mod service;

pub use executor::OperationOutcome;
pub use logger::{Field, Logger, NullLogger, TracingLogger};
pub use resolve::resolve;
pub use service::FileService;

// Re-export core types for convenience
pub use filemanager_core::{
    Config, ErrorCause, FileOperation, FileRecord, OperationError, OperationKind,
};

/// Result type for file service operations.
pub type Result<T, E = OperationError> = std::result::Result<T, E>;
