use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while loading a graph, running Prim's algorithm, or
/// writing the resulting tree.
#[derive(Debug, Error)]
pub enum Error {
    /// A header or edge line is missing fields or does not parse.
    #[error("malformed input at line {line}: {message}")]
    MalformedInput {
        /// 1-based line number where the problem was found.
        line: usize,
        /// Human-readable explanation.
        message: String,
    },

    /// The input could not be read or the output could not be written.
    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// `extract_min` was called on an empty heap.
    #[error("extract_min called on an empty heap")]
    EmptyHeap,

    /// The heap was given inconsistent nodes, or its ordering or position
    /// map no longer agree.
    #[error("heap invariant violated: {0}")]
    HeapInvariant(String),

    /// The requested root is not a vertex of the graph.
    #[error("source vertex {vertex} out of range for {vertex_count} vertices")]
    SourceOutOfRange {
        /// Requested source.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },

    /// Wrong command-line arguments.
    #[error("{0}")]
    Usage(String),
}

impl Error {
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileAccess {
            path: path.into(),
            source,
        }
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
