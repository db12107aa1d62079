//! Query-string form of a [`FilterState`].
//!
//! Recognized keys are `filter`, `range` and `search`. A key that is absent
//! means the field is at its default, and default fields are never written.
//! Decoding never fails: unknown keys are ignored, unknown values fall back
//! to the default and the first occurrence of a key wins.

use crate::models::{DateRange, FilterState, TypeFilter};

pub const KEY_FILTER: &str = "filter";
pub const KEY_RANGE: &str = "range";
pub const KEY_SEARCH: &str = "search";

/// Encode without the leading `?`. The default state encodes to "".
pub fn encode(state: &FilterState) -> String {
    let mut pairs: Vec<String> = Vec::new();

    if let TypeFilter::Only(t) = state.type_filter {
        pairs.push(format!("{KEY_FILTER}={}", percent_encode(t.as_str())));
    }
    if state.date_range != DateRange::AllTime {
        pairs.push(format!("{KEY_RANGE}={}", percent_encode(state.date_range.as_str())));
    }
    if !state.search.is_empty() {
        pairs.push(format!("{KEY_SEARCH}={}", percent_encode(&state.search)));
    }

    pairs.join("&")
}

pub fn decode(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut filter: Option<String> = None;
    let mut range: Option<String> = None;
    let mut search: Option<String> = None;

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = percent_decode(raw_key);
        let slot = match key.as_str() {
            KEY_FILTER => &mut filter,
            KEY_RANGE => &mut range,
            KEY_SEARCH => &mut search,
            other => {
                tracing::trace!(key = other, "ignoring unknown query key");
                continue;
            }
        };
        if slot.is_none() {
            *slot = Some(percent_decode(raw_value));
        }
    }

    FilterState {
        type_filter: filter
            .as_deref()
            .and_then(TypeFilter::from_wire)
            .unwrap_or_default(),
        date_range: range
            .as_deref()
            .and_then(DateRange::from_wire)
            .unwrap_or_default(),
        search: search.unwrap_or_default(),
    }
}

/// `base?query`, or just `base` for the default state.
pub fn share_url(base: &str, state: &FilterState) -> String {
    let q = encode(state);
    if q.is_empty() {
        base.to_string()
    } else {
        format!("{base}?{q}")
    }
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~')
}

pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Lenient decoding: `+` is a space, broken escapes are kept as written.
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}
