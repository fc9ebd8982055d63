//! Output sinks for rendered graph documents.
//!
//! - [`Recorder`]: raw text sink the graph model renders into
//! - [`FileRecorder`]: opens one [`Document`] per diagrammed target, buffers
//!   everything written to it and replaces the destination exactly once
//! - [`RecorderOptions`]: output directory and file extension

mod file;
mod options;
mod sink;

pub use file::{Document, FileRecorder};
pub use options::RecorderOptions;
pub use sink::{Recorder, Target, escape_label, write_indent};
