// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — open a generated PDF and inspect its page geometry using the
// `lopdf` crate.

use std::path::Path;

use imgdir2pdf_core::PageSize;
use imgdir2pdf_core::error::{Imgdir2PdfError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, instrument};

const MM_PER_PT: f64 = 25.4 / 72.0;

/// Upper bound on /Parent hops when looking for an inherited MediaBox.
const MAX_PAGE_TREE_DEPTH: usize = 32;

/// Read-only view of an existing PDF file.
///
/// Used to check what a conversion produced: how many pages, in which order,
/// and at what size.
pub struct PdfReader {
    document: Document,
}

impl PdfReader {
    // -- Construction ---------------------------------------------------------

    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = Document::load(path).map_err(|err| Imgdir2PdfError::decode(path, err))?;
        debug!(pages = document.get_pages().len(), "PDF loaded");
        Ok(Self { document })
    }

    /// Load a PDF already in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document =
            Document::load_mem(data).map_err(|err| Imgdir2PdfError::decode("<memory>", err))?;
        Ok(Self { document })
    }

    // -- Inspection -----------------------------------------------------------

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Page sizes in millimetres, in page order, taken from each MediaBox.
    pub fn page_sizes_mm(&self) -> Result<Vec<PageSize>> {
        self.document
            .get_pages()
            .into_values()
            .map(|page_id| self.page_size(page_id))
            .collect()
    }

    fn page_size(&self, page_id: ObjectId) -> Result<PageSize> {
        let media_box = self
            .media_box(page_id)
            .ok_or_else(|| malformed(format!("page {page_id:?} has no MediaBox")))?;

        let coords = media_box
            .iter()
            .map(|obj| self.resolve(obj).as_float().map(f64::from))
            .collect::<std::result::Result<Vec<f64>, _>>()
            .map_err(|err| malformed(format!("bad MediaBox on {page_id:?}: {err}")))?;

        match coords.as_slice() {
            [x0, y0, x1, y1] => Ok(PageSize::new(
                (x1 - x0).abs() * MM_PER_PT,
                (y1 - y0).abs() * MM_PER_PT,
            )),
            _ => Err(malformed(format!(
                "MediaBox on {page_id:?} has {} entries",
                coords.len()
            ))),
        }
    }

    /// The page's MediaBox, inherited from ancestors in the page tree if the
    /// page itself has none.
    fn media_box(&self, page_id: ObjectId) -> Option<&Vec<Object>> {
        let mut dict = self.document.get_dictionary(page_id).ok()?;
        for _ in 0..MAX_PAGE_TREE_DEPTH {
            if let Ok(obj) = dict.get(b"MediaBox") {
                return self.resolve(obj).as_array().ok();
            }
            dict = self.parent(dict)?;
        }
        None
    }

    fn parent(&self, dict: &Dictionary) -> Option<&Dictionary> {
        let parent_id = dict.get(b"Parent").ok()?.as_reference().ok()?;
        self.document.get_dictionary(parent_id).ok()
    }

    fn resolve<'a>(&'a self, obj: &'a Object) -> &'a Object {
        match obj {
            Object::Reference(id) => self.document.get_object(*id).unwrap_or(obj),
            _ => obj,
        }
    }
}

fn malformed(reason: String) -> Imgdir2PdfError {
    Imgdir2PdfError::Decode {
        path: "<pdf>".into(),
        reason,
    }
}
