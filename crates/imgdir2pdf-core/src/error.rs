// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for imgdir2pdf.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all imgdir2pdf operations.
#[derive(Debug, Error)]
pub enum Imgdir2PdfError {
    /// Directory listing, path resolution, or opening a source file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An image header (or its pixel data) could not be parsed.
    #[error("cannot decode image {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("no suitable files in {}", .dir.display())]
    EmptyInput { dir: PathBuf },

    /// The finished PDF could not be written to its target.
    #[error("{}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Imgdir2PdfError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, Imgdir2PdfError>;
