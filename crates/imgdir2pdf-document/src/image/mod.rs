// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — header probing and decoding of page source images.

pub mod loader;
pub mod probe;

pub use loader::load_rgb;
pub use probe::probe_dimensions;
