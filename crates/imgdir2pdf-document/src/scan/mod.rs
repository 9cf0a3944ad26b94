// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Directory scanning — extension filtering and natural filename ordering.

pub mod directory;
pub mod natural;

pub use directory::{absolute, list_images};
