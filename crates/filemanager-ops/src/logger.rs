//! Diagnostic logging capability used by the file service.

use std::fmt;
use std::sync::Arc;

/// A key/value diagnostic pair.
pub type Field<'a> = (&'a str, &'a dyn fmt::Display);

/// Narrow logging capability: a message plus structured key/value pairs.
///
/// The file service only reports non-fatal diagnostics through this trait;
/// operation failures are always returned to the caller instead.
pub trait Logger: Send + Sync {
    /// Log an informational message.
    fn info(&self, msg: &str, fields: &[Field<'_>]);

    /// Log an error message.
    fn error(&self, msg: &str, fields: &[Field<'_>]);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn info(&self, msg: &str, fields: &[Field<'_>]) {
        (**self).info(msg, fields);
    }

    fn error(&self, msg: &str, fields: &[Field<'_>]) {
        (**self).error(msg, fields);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn info(&self, msg: &str, fields: &[Field<'_>]) {
        (**self).info(msg, fields);
    }

    fn error(&self, msg: &str, fields: &[Field<'_>]) {
        (**self).error(msg, fields);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn info(&self, msg: &str, fields: &[Field<'_>]) {
        (**self).info(msg, fields);
    }

    fn error(&self, msg: &str, fields: &[Field<'_>]) {
        (**self).error(msg, fields);
    }
}

/// Logger that forwards to `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, msg: &str, fields: &[Field<'_>]) {
        tracing::info!(target: "filemanager", fields = %FieldList(fields), "{msg}");
    }

    fn error(&self, msg: &str, fields: &[Field<'_>]) {
        tracing::error!(target: "filemanager", fields = %FieldList(fields), "{msg}");
    }
}

/// Logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn info(&self, _msg: &str, _fields: &[Field<'_>]) {}

    fn error(&self, _msg: &str, _fields: &[Field<'_>]) {}
}

/// Renders fields as `key=value key=value`.
struct FieldList<'a, 'b>(&'a [Field<'b>]);

impl fmt::Display for FieldList<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}
