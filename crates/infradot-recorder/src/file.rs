//! File-backed recorder with a one-buffer-per-document lifecycle.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use infradot_error::{Error, ErrorKind, Result};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::options::RecorderOptions;
use crate::sink::{Recorder, Target};

/// Writes one document per diagrammed target into the output directory.
///
/// The recorder owns a single buffer that is reset whenever a document is
/// opened. Only one [`Document`] can be live at a time because it borrows
/// the recorder mutably.
#[derive(Debug, Default)]
pub struct FileRecorder {
    options: RecorderOptions,
    buffer: String,
}

impl FileRecorder {
    pub fn new(options: RecorderOptions) -> Self {
        Self {
            options,
            buffer: String::with_capacity(4096),
        }
    }

    pub fn options(&self) -> &RecorderOptions {
        &self.options
    }

    /// Open the document `<prefix><target>.<ext>` in the output directory.
    ///
    /// Creates the output directory when it is missing. Text is staged in a
    /// hidden sibling file; the destination only changes when the returned
    /// document is ended.
    #[tracing::instrument(skip_all, fields(identity = target.identity(), prefix = prefix))]
    pub fn begin_for<T: Target + ?Sized>(
        &mut self,
        target: &T,
        prefix: &str,
    ) -> Result<Document<'_>> {
        self.buffer.clear();

        let path = self.options.document_path(prefix, target.identity())?;
        let dir = self.options.output_dir();
        ensure_dir(dir)?;

        if path.is_dir() {
            return Err(Error::new(
                ErrorKind::IoFailed,
                format!("destination {} is a directory", path.display()),
            )
            .with_operation("recorder::begin_for")
            .with_context("path", path.display().to_string()));
        }

        let staged = staging_file(dir, &path)
            .map_err(|err| Error::io_at(err, "recorder::begin_for", &path))?;
        debug!("opened document {}", path.display());

        Ok(Document {
            buffer: &mut self.buffer,
            staged: Some(staged),
            path,
        })
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|err| Error::io_at(err, "recorder::ensure_dir", dir))?;
    debug!("created output directory {}", dir.display());
    Ok(())
}

/// `.<name>.XXXXXX.partial` next to the destination, removed unless persisted.
fn staging_file(dir: &Path, path: &Path) -> std::io::Result<NamedTempFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    tempfile::Builder::new()
        .prefix(&format!(".{}.", name))
        .suffix(".partial")
        .tempfile_in(dir)
}

/// An open output document.
///
/// Text written here stays in memory. [`Document::end`] writes the whole
/// buffer once and moves it over the destination. A document dropped
/// without `end` leaves the destination untouched.
#[derive(Debug)]
pub struct Document<'r> {
    buffer: &'r mut String,
    staged: Option<NamedTempFile>,
    path: PathBuf,
}

impl Document<'_> {
    /// Path of the destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Text buffered so far.
    pub fn contents(&self) -> &str {
        self.buffer
    }

    /// Write the buffer, replace the destination with it and close it.
    pub fn end(mut self) -> Result<PathBuf> {
        let Some(mut staged) = self.staged.take() else {
            return Ok(self.path.clone());
        };
        staged
            .write_all(self.buffer.as_bytes())
            .and_then(|_| staged.flush())
            .map_err(|err| Error::io_at(err, "recorder::end", &self.path))?;
        staged
            .persist(&self.path)
            .map_err(|err| Error::io_at(err.error, "recorder::end", &self.path))?;
        debug!("wrote {} bytes to {}", self.buffer.len(), self.path.display());
        Ok(self.path.clone())
    }
}

impl Recorder for Document<'_> {
    fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

impl Drop for Document<'_> {
    fn drop(&mut self) {
        if self.staged.take().is_some() {
            warn!("document {} discarded without end()", self.path.display());
        }
    }
}
