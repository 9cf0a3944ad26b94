// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for imgdir2pdf.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Image formats accepted as page sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageKind {
    Png,
    Jpeg,
    /// Only the first frame of an animated GIF becomes a page.
    Gif,
}

impl ImageKind {
    /// MIME type string, used in log output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
        }
    }

    /// Infer the image kind from a file extension (without the dot).
    ///
    /// Matching is exact: `PNG` is not `png`. The scanner only lets through
    /// names whose suffix is literally one of the configured extensions.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Infer the image kind from whatever follows the last `.` of a file name.
    ///
    /// Unlike [`Path::extension`](std::path::Path::extension), a leading dot
    /// counts: `.png` is a PNG named by its extension alone.
    pub fn from_file_name(name: &[u8]) -> Option<Self> {
        let dot = name.iter().rposition(|&b| b == b'.')?;
        std::str::from_utf8(&name[dot + 1..])
            .ok()
            .and_then(Self::from_extension)
    }
}

/// A source image found during the directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFileRef {
    /// Absolute path of the image.
    pub path: PathBuf,
    /// Format inferred from the extension. `None` when a custom extension set
    /// lets through a name this crate has no mapping for; the content is then
    /// sniffed when the file is probed.
    pub kind: Option<ImageKind>,
}

impl ImageFileRef {
    pub fn new(path: PathBuf) -> Self {
        let kind = path
            .file_name()
            .and_then(|name| ImageKind::from_file_name(name.as_encoded_bytes()));
        Self { path, kind }
    }
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A3,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: u32, height_mm: u32 },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::A3 => (297, 420),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
            Self::Tabloid => (279, 432),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }

    /// Dimensions as a [`PageSize`].
    pub fn page_size(&self) -> PageSize {
        let (w, h) = self.dimensions_mm();
        PageSize::new(f64::from(w), f64::from(h))
    }
}

/// Width and height of a single page in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageSize {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }
}

/// Pixel dimensions read from an image header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}
