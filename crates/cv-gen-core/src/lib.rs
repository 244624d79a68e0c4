//! Generation engine for the `cv-gen` toolchain.
//!
//! Ties the parser and the renderer together behind a single call: read the
//! source file, parse it, render it, write the output atomically. The only
//! fatal failures are I/O on either end; everything in between degrades
//! gracefully.

mod engine;
mod error;
mod fs;

pub use engine::{generate, GenerateOutcome, GenerateRequest};
pub use error::{ExitCode, GenerateError, GenerateResult};
pub use fs::write_atomic;
