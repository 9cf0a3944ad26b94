// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — page layout, document assembly, and read-back inspection.

pub mod layout;
pub mod reader;
pub mod writer;

pub use layout::fit_page_size;
pub use reader::PdfReader;
pub use writer::PdfWriter;
