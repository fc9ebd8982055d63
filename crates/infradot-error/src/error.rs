//! The main Error type for infradot.

use crate::ErrorKind;
use std::fmt;
use std::path::Path;

/// Unified error type for all infradot operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Set the operation that caused this error.
    ///
    /// An already recorded operation moves into context as "called" so the
    /// call chain survives.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.operation)?;

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at {}", self.kind, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl Error {
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create an InvalidIdentifier error for the given kind of element
    /// ("node", "cluster", ...).
    pub fn invalid_identifier(element: &'static str) -> Self {
        Self::new(
            ErrorKind::InvalidIdentifier,
            format!("{} identifier must not be empty", element),
        )
        .with_context("element", element)
    }

    /// Create an UnsupportedShape error
    pub fn unsupported_shape(shape: impl Into<String>) -> Self {
        let shape = shape.into();
        Self::new(
            ErrorKind::UnsupportedShape,
            format!("shape '{}' has no renderer keyword", shape),
        )
        .with_context("shape", shape)
    }

    /// Wrap an io error that happened while touching `path`.
    pub fn io_at(err: std::io::Error, operation: &'static str, path: &Path) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation(operation)
            .with_context("path", path.display().to_string())
            .set_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::InvalidIdentifier, "empty id");
        assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
        assert_eq!(err.message(), "empty id");
        assert!(err.context().is_empty());
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::unsupported("hexagon")
            .with_operation("dot::parse_shape")
            .with_operation("facade::add_resource");

        assert_eq!(err.operation(), "facade::add_resource");
        assert_eq!(err.context().len(), 1);
        assert_eq!(err.context()[0], ("called", "dot::parse_shape".to_string()));
    }

    #[test]
    fn test_display() {
        let err = Error::invalid_identifier("node").with_operation("dot::add_node");

        let display = format!("{}", err);
        assert!(display.starts_with("InvalidIdentifier at dot::add_node"));
        assert!(display.contains("element: node"));
    }

    #[test]
    fn test_unsupported_shape() {
        let err = Error::unsupported_shape("hexagon");
        assert_eq!(err.kind(), ErrorKind::UnsupportedShape);
        assert!(err.message().contains("hexagon"));
        assert_eq!(err.context()[0], ("shape", "hexagon".to_string()));
    }

    #[test]
    fn test_io_at() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io_at(io_err, "recorder::begin_for", Path::new("/out"));
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(err.operation(), "recorder::begin_for");
        assert_eq!(err.context()[0], ("path", "/out".to_string()));
        assert!(std::error::Error::source(&err).is_some());

        let err = Error::io_at(std::io::Error::other("disk full"), "recorder::end", Path::new("x"));
        assert_eq!(err.kind(), ErrorKind::IoFailed);
    }
}
