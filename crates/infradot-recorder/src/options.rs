//! Recorder configuration.

use std::path::{Component, Path, PathBuf};

use infradot_error::{Error, Result};

/// Where documents are written and how they are named.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecorderOptions {
    /// Directory receiving the documents; created on demand.
    pub output_dir: PathBuf,
    /// File extension without the leading dot.
    pub extension: String,
}

impl Default for RecorderOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            extension: "dot".to_string(),
        }
    }
}

impl RecorderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// `<output_dir>/<prefix><identity>.<extension>`
    ///
    /// The file name must be a single path component; identities or
    /// prefixes carrying separators or `..` fail with `InvalidArgument`.
    pub fn document_path(&self, prefix: &str, identity: &str) -> Result<PathBuf> {
        let name = format!("{}{}.{}", prefix, identity, self.extension);
        let mut components = Path::new(&name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) if part.to_str() == Some(name.as_str()) => {
                Ok(self.output_dir.join(name))
            }
            _ => Err(Error::invalid_argument(format!(
                "document name '{}' is not a plain file name",
                name
            ))
            .with_operation("recorder::document_path")
            .with_context("identity", identity)),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
