// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Directory scanner — list the images in a directory in natural order.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use imgdir2pdf_core::error::{Imgdir2PdfError, Result};
use imgdir2pdf_core::{ConversionConfig, ImageFileRef};
use tracing::{debug, info, instrument};

use super::natural;

/// List the page sources in `dir`.
///
/// Returns absolute paths of every regular file whose name ends in one of the
/// configured extensions, in natural filename order. Subdirectories and other
/// non-regular entries are never included, even when their name looks like an
/// image; symlinks count when they resolve to a regular file.
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn list_images(dir: impl AsRef<Path>, config: &ConversionConfig) -> Result<Vec<ImageFileRef>> {
    let dir = dir.as_ref();
    let abs_dir = absolute(dir)?;

    let entries = std::fs::read_dir(dir).map_err(|err| Imgdir2PdfError::io(dir, err))?;

    let mut names: Vec<OsString> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| Imgdir2PdfError::io(dir, err))?;
        let name = entry.file_name();

        if !config.matches_extension(name.as_encoded_bytes()) {
            continue;
        }

        // Follows symlinks, so a dangling link is skipped too.
        if !entry.path().is_file() {
            debug!(name = ?name, "Skipping entry that is not a regular file");
            continue;
        }

        names.push(name);
    }

    natural::sort_naturally(&mut names, |name| name.as_encoded_bytes().to_vec());

    let images: Vec<ImageFileRef> = names
        .into_iter()
        .map(|name| ImageFileRef::new(abs_dir.join(name)))
        .collect();

    info!(count = images.len(), "Directory scanned");
    Ok(images)
}

/// Make `path` absolute without touching the filesystem.
///
/// Relative paths are joined onto the current directory, `.` components are
/// dropped and `..` removes the preceding component. Symlinks are left as is.
pub fn absolute(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|err| Imgdir2PdfError::io(path, err))?;
        cwd.join(path)
    };

    let mut clean = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                clean.pop();
            }
            other => clean.push(other.as_os_str()),
        }
    }
    Ok(clean)
}
