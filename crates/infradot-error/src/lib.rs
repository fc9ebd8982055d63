//! # infradot-error
//!
//! Unified error handling for infradot.
//!
//! Errors are surfaced to the immediate caller; nothing retries internally.
//!
//! - **ErrorKind**: what went wrong (e.g. InvalidIdentifier, UnsupportedShape)
//! - **Context**: operation name plus key/value pairs to locate the cause
//! - **Source**: the wrapped underlying error, if any
//!
//! ## Usage
//!
//! ```rust
//! use infradot_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InvalidIdentifier, "node id is empty")
//!         .with_operation("dot::add_node")
//!         .with_context("container", "cluster_vpc-1"))
//! }
//! ```

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the infradot Error
pub type Result<T> = std::result::Result<T, Error>;
