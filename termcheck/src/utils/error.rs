//! Errors that end an input call.
//!
//! A rejected candidate is not an error at this level: it is an
//! [`InvalidInput`](crate::utils::InvalidInput) that the retry loop consumes.
//! Everything here is either a construction mistake in the calling code or an
//! I/O condition the loop cannot recover from.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A check was built from a pattern that does not compile.
    #[error("invalid check pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Reading keys, switching the terminal mode or writing to a sink failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    /// The key source has no more keys to give.
    #[error("input stream closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, Error>;
