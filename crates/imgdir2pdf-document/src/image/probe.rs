// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image probe — read pixel dimensions from a file header without decoding the
// pixel data.

use std::path::Path;

use image::ImageReader;
use imgdir2pdf_core::ImageDimensions;
use imgdir2pdf_core::error::{Imgdir2PdfError, Result};
use tracing::{debug, instrument};

/// Open a reader for `path`, format sniffed from content, else from extension.
pub(crate) fn open_reader(
    path: &Path,
) -> Result<ImageReader<std::io::BufReader<std::fs::File>>> {
    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| Imgdir2PdfError::io(path, err))
}

/// Read `(width, height)` in pixels from the image header at `path`.
///
/// The file is closed before this returns. For GIFs the logical screen size,
/// which is the first frame's canvas, is reported.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn probe_dimensions(path: impl AsRef<Path>) -> Result<ImageDimensions> {
    let path = path.as_ref();
    let reader = open_reader(path)?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|err| Imgdir2PdfError::decode(path, err))?;

    if width == 0 || height == 0 {
        return Err(Imgdir2PdfError::decode(
            path,
            format!("image has no area ({width}x{height})"),
        ));
    }

    debug!(width, height, "Image header read");
    Ok(ImageDimensions { width, height })
}
