// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Conversion configuration.

use serde::{Deserialize, Serialize};

/// Extensions recognised by default, without the leading dot.
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Settings for a single directory-to-PDF conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Reference page every image page is scaled against. Only its width is
    /// used when fitting; see `fit_page_size`.
    pub template: crate::PaperSize,
    /// File extensions (without the dot) that qualify a file as a page source.
    /// Matched as a case-sensitive `.ext` suffix of the file name.
    pub extensions: Vec<String>,
    /// Title for the PDF /Info dictionary. Defaults to the output file stem.
    pub title: Option<String>,
}

impl ConversionConfig {
    /// Builder-style override of the template paper size.
    pub fn with_template(mut self, template: crate::PaperSize) -> Self {
        self.template = template;
        self
    }

    /// Whether `file_name` ends with `.ext` for any configured extension.
    pub fn matches_extension(&self, file_name: &[u8]) -> bool {
        self.extensions.iter().any(|ext| {
            let ext = ext.as_bytes();
            file_name.len() > ext.len()
                && file_name.ends_with(ext)
                && file_name[file_name.len() - ext.len() - 1] == b'.'
        })
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            template: crate::PaperSize::A4,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            title: None,
        }
    }
}
