// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page layout — derive each page's size from the template and the image.

use imgdir2pdf_core::{ImageDimensions, PageSize};

/// Size a page for an image of `image` pixels against `template`.
///
/// The page takes the template's width and the image's aspect ratio:
/// `height = image.height * template.width / image.width`. Height is not
/// clamped to the template, so tall images give pages longer than the template
/// and wide images give shorter ones. The template height is not consulted.
pub fn fit_page_size(template: PageSize, image: ImageDimensions) -> PageSize {
    let scale = template.width_mm / f64::from(image.width);
    PageSize::new(template.width_mm, scale * f64::from(image.height))
}
