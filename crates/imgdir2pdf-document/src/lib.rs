// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// imgdir2pdf-document — Turn a directory of images into one PDF.
//
// Provides the directory scanner with natural filename ordering, image header
// probing and decoding, template-relative page sizing, PDF assembly with
// `printpdf`, and read-back inspection with `lopdf`.

pub mod convert;
pub mod image;
pub mod pdf;
pub mod scan;

// Re-export the primary entry points so callers can use
// `imgdir2pdf_document::DirectoryConverter` etc.
pub use convert::{ConversionReport, DirectoryConverter, PageRecord, convert_directory, output_path_for};
pub use self::image::{load_rgb, probe_dimensions};
pub use pdf::{PdfReader, PdfWriter, fit_page_size};
pub use scan::list_images;
