//! External rendering collaborator and fragment post-processing
//!
//! The collaborator contract: markup text on stdin, an optional format
//! selector as the final argument, rendered output on stdout. A non-zero
//! exit status with diagnostics on stderr reports failure.

pub mod command;
pub mod embed;

pub use command::CommandRenderer;
pub use embed::{inline_image, WrapMode};
