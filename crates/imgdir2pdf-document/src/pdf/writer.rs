// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — assemble one full-bleed image page per source using `printpdf`
// 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`.

use std::io::Write as _;
use std::path::Path;

use image::RgbImage;
use imgdir2pdf_core::PageSize;
use imgdir2pdf_core::error::{Imgdir2PdfError, Result};
use lopdf::Object;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, info, instrument, warn};

/// At 72 dpi one image pixel is one PDF point before scaling.
const PLACEMENT_DPI: f32 = 72.0;

/// Accumulates image pages and serialises them into a single PDF.
///
/// Pages keep the order in which they were added. Each page carries its own
/// size; the default page size is recorded for the document but never
/// overrides a page.
pub struct PdfWriter {
    document: PdfDocument,
    pages: Vec<PdfPage>,
    page_sizes: Vec<PageSize>,
    /// Exact `(width, height)` of each page in points, as used for the image
    /// transform.
    page_boxes_pt: Vec<(f32, f32)>,
    default_page_size: PageSize,
}

impl PdfWriter {
    /// Start an empty document.
    pub fn new(title: &str, default_page_size: PageSize) -> Self {
        debug!(title, ?default_page_size, "Creating PDF document");
        Self {
            document: PdfDocument::new(title),
            pages: Vec::new(),
            page_sizes: Vec::new(),
            page_boxes_pt: Vec::new(),
            default_page_size,
        }
    }

    pub fn default_page_size(&self) -> PageSize {
        self.default_page_size
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Sizes of the pages added so far, in order.
    pub fn page_sizes(&self) -> &[PageSize] {
        &self.page_sizes
    }

    /// Append a page of exactly `size` with `pixels` stretched over all of it.
    ///
    /// The image is anchored at the page origin and scaled independently on
    /// each axis to the page width and height.
    pub fn add_image_page(&mut self, pixels: RgbImage, size: PageSize) {
        let (width_px, height_px) = pixels.dimensions();
        let page_w = Mm(size.width_mm as f32);
        let page_h = Mm(size.height_mm as f32);
        let (width_pt, height_pt) = (page_w.into_pt().0, page_h.into_pt().0);

        let raw = RawImage {
            pixels: RawImageData::U8(pixels.into_raw()),
            width: width_px as usize,
            height: height_px as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = self.document.add_image(&raw);

        let scale_x = width_pt / width_px as f32;
        let scale_y = height_pt / height_px as f32;

        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                scale_x: Some(scale_x),
                scale_y: Some(scale_y),
                dpi: Some(PLACEMENT_DPI),
                rotate: None,
            },
        }];

        self.pages.push(PdfPage::new(page_w, page_h, ops));
        self.page_sizes.push(size);
        self.page_boxes_pt.push((width_pt, height_pt));

        debug!(
            page = self.pages.len(),
            width_mm = size.width_mm,
            height_mm = size.height_mm,
            scale_x,
            scale_y,
            "Image page added"
        );
    }

    /// Serialise the document.
    pub fn to_bytes(self) -> Result<Vec<u8>> {
        self.serialise().map_err(|source| Imgdir2PdfError::Write {
            path: "<memory>".into(),
            source,
        })
    }

    /// Serialise the document and write it to `path`.
    ///
    /// The bytes go to a temporary file next to `path` which is then renamed
    /// over it; on failure the temporary file is removed and `path` is left
    /// untouched.
    pub fn write_to_file(self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let pages = self.page_count();
        let bytes = self.serialise().map_err(|source| Imgdir2PdfError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        write_atomically(path, &bytes)?;
        info!(pages, bytes = bytes.len(), "Wrote PDF to {}", path.display());
        Ok(())
    }

    #[instrument(skip(self), fields(pages = self.pages.len()))]
    fn serialise(mut self) -> std::io::Result<Vec<u8>> {
        self.document.with_pages(self.pages);

        // Images are embedded at their source resolution.
        let options = PdfSaveOptions {
            image_optimization: None,
            ..Default::default()
        };
        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = self.document.save(&options, &mut warnings);
        for warning in &warnings {
            warn!(?warning, "printpdf reported a warning");
        }

        let output = set_exact_page_boxes(&output, &self.page_boxes_pt)?;
        debug!(bytes = output.len(), "PDF serialised");
        Ok(output)
    }
}

/// Rewrite every page's MediaBox, CropBox and TrimBox with the exact sizes in
/// `boxes_pt`.
///
/// printpdf writes page boxes as whole points, which would shave or pad up to
/// half a point off each fitted page and leave the image transform out of
/// step with the page edge.
fn set_exact_page_boxes(pdf: &[u8], boxes_pt: &[(f32, f32)]) -> std::io::Result<Vec<u8>> {
    let to_io = |err: lopdf::Error| std::io::Error::other(err.to_string());

    let mut document = lopdf::Document::load_mem(pdf).map_err(to_io)?;
    let page_ids: Vec<_> = document.get_pages().into_values().collect();
    if page_ids.len() != boxes_pt.len() {
        return Err(std::io::Error::other(format!(
            "serialised {} pages, expected {}",
            page_ids.len(),
            boxes_pt.len()
        )));
    }

    for (page_id, &(width, height)) in page_ids.into_iter().zip(boxes_pt) {
        let page = document
            .get_object_mut(page_id)
            .and_then(Object::as_dict_mut)
            .map_err(to_io)?;
        for key in ["MediaBox", "CropBox", "TrimBox"] {
            let rect = vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width),
                Object::Real(height),
            ];
            page.set(key, Object::Array(rect));
        }
    }

    let mut output = Vec::with_capacity(pdf.len());
    document
        .save_to(&mut output)
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    Ok(output)
}

/// Write `bytes` to `path` via a sibling temporary file.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source: std::io::Error| Imgdir2PdfError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".imgdir2pdf-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
