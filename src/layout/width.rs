//! On-screen width of character spans.
//!
//! Every character is one column wide except tab, which advances to the next
//! tab stop. Wide and combining characters are not special-cased.

use super::types::TabWidth;

/// Columns occupied by `span` when drawn starting at column 0.
pub fn visual_width(span: &[char], tab: TabWidth) -> usize {
    let tab = tab.get();
    span.iter().fold(0, |width, &c| {
        if c == '\t' {
            width + tab - width % tab
        } else {
            width + 1
        }
    })
}

/// Render `span` with each tab replaced by spaces up to the next tab stop.
pub fn expand_tabs(span: &[char], tab: TabWidth) -> String {
    let tab = tab.get();
    let mut out = String::with_capacity(span.len());
    let mut column = 0;
    for &c in span {
        if c == '\t' {
            let pad = tab - column % tab;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}
