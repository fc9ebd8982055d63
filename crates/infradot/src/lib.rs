//! infradot: infrastructure topology diagrams as Graphviz documents.
//!
//! Discovery code builds a [`Graph`] through the [`facade`] helpers and
//! hands it to [`render_document`], which writes `<prefix><target>.dot`
//! through a [`FileRecorder`].

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

pub use infradot_dot as dot;
pub use infradot_dot::{Edge, Graph, GraphContainer, Node, Shape, SubGraph};
pub use infradot_error::{Error, ErrorKind, Result};
pub use infradot_facade as facade;
pub use infradot_recorder::{Document, FileRecorder, Recorder, RecorderOptions, Target};

/// Render `graph` into the document for `target` and close it.
///
/// Returns the path of the written file.
pub fn render_document<T: Target + ?Sized>(
    recorder: &mut FileRecorder,
    target: &T,
    prefix: &str,
    graph: &Graph,
) -> Result<PathBuf> {
    let render_start = Instant::now();

    let mut doc = recorder
        .begin_for(target, prefix)
        .map_err(|err| err.with_operation("infradot::render_document"))?;
    graph.render(&mut doc);
    let path = doc
        .end()
        .map_err(|err| err.with_operation("infradot::render_document"))?;

    info!(
        "rendered {} in {:.3}s",
        path.display(),
        render_start.elapsed().as_secs_f64()
    );
    Ok(path)
}
