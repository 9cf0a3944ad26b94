// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Natural filename ordering — numeric suffixes compare by value.

/// Width of the encoded numeric suffix.
const SUFFIX_WIDTH: usize = std::mem::size_of::<u64>();

/// Build the byte-wise sort key for a file name.
///
/// The name is split at its last `.` into stem and extension (the extension
/// keeps its dot). The trailing run of ASCII digits in the stem is replaced by
/// its value plus one as a big-endian `u64`; a stem without digits, or with
/// digits that overflow `u64`, gets eight zero bytes instead. Comparing keys
/// byte-wise therefore yields `amt, amt0, amt2, amt10, amt099, amt100`.
pub fn sort_key(file_name: &[u8]) -> Vec<u8> {
    let ext_start = file_name
        .iter()
        .rposition(|&b| b == b'.')
        .unwrap_or(file_name.len());
    let (stem, ext) = file_name.split_at(ext_start);

    let digits_start = stem
        .iter()
        .rposition(|b| !b.is_ascii_digit())
        .map_or(0, |i| i + 1);
    let (prefix, digits) = stem.split_at(digits_start);

    // Zero is reserved for "no numeric suffix", so "amt" sorts before "amt0".
    let encoded = std::str::from_utf8(digits)
        .ok()
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<u64>().ok())
        .and_then(|n| n.checked_add(1))
        .unwrap_or(0);

    let mut key = Vec::with_capacity(prefix.len() + SUFFIX_WIDTH + ext.len());
    key.extend_from_slice(prefix);
    key.extend_from_slice(&encoded.to_be_bytes());
    key.extend_from_slice(ext);
    key
}

/// Sort items in natural order of the name `name_of` extracts.
///
/// Each key is computed once per item. Names with equal keys (`a01.png` and
/// `a1.png`) fall back to a plain byte comparison, so the order never depends
/// on directory listing order.
pub fn sort_naturally<T, F>(items: &mut [T], name_of: F)
where
    F: Fn(&T) -> Vec<u8>,
{
    items.sort_by_cached_key(|item| {
        let name = name_of(item);
        (sort_key(&name), name)
    });
}
