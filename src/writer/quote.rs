//! Quoting engine: produces the escaped, quoted form of a cell.
//!
//! Quoting is decided per column type, matching the byte-exact output
//! contract: text cells and header field names are always wrapped in quotes
//! with embedded quote characters doubled (an empty text cell becomes `""`);
//! numeric and boolean cells never contain special characters and are emitted
//! verbatim; null cells emit the configured null string with no quoting at
//! all. Delimiters and line breaks inside a quoted cell need no further
//! escaping.

use super::config::QUOTE;

/// Append the quoted form of `raw` to `out`: surrounding quotes with every
/// embedded quote character doubled.
pub(super) fn push_quoted(raw: &str, out: &mut Vec<u8>) {
    out.push(QUOTE);
    for &b in raw.as_bytes() {
        if b == QUOTE {
            out.push(QUOTE);
        }
        out.push(b);
    }
    out.push(QUOTE);
}
