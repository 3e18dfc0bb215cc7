//! Fixed-capacity text helpers

use heapless::String;

/// Copy `text` into a fixed-capacity string, dropping whatever does not fit.
///
/// Truncation happens on a character boundary.
pub fn bounded<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    push_bounded(&mut out, text);
    out
}

/// Append as much of `text` as fits. Returns `false` if anything was dropped.
pub fn push_bounded<const N: usize>(out: &mut String<N>, text: &str) -> bool {
    for c in text.chars() {
        if out.push(c).is_err() {
            return false;
        }
    }
    true
}
