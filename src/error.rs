// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Error types for boundary editing and DEF file handling

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the rectilinear boundary editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    /// Malformed cut: identical points, out-of-range coordinates, or
    /// not exactly one interior and one boundary point.
    #[error("invalid cut: {0}")]
    InvalidCut(String),

    /// The die rectangle itself is empty or inverted.
    #[error("degenerate die area: {0}")]
    DegenerateCut(String),
}

/// Errors raised while reading, editing or writing a DEF file.
#[derive(Debug, Error)]
pub enum DefError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("DIEAREA line not found")]
    DieAreaNotFound,

    #[error("invalid DIEAREA: {0}")]
    InvalidDieArea(String),

    #[error("invalid contour: {0}")]
    InvalidContour(String),

    #[error("coordinate count must be {expected} (4 coordinates per rectangle), got {found}")]
    CoordinateCount { expected: usize, found: usize },

    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl DefError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DefError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for boundary editor results.
pub type BoundaryResult<T> = Result<T, BoundaryError>;
