// src/core/html.rs
//
// Tolerant, case-insensitive tag scanning. Good enough for the generated
// stats tables we read; not a general HTML parser.

use crate::table::RawTable;
use super::sanitize::{decode_entities, normalize_ws, strip_comments};

pub fn to_lower(s: &str) -> String {
    // ASCII-only lowering keeps byte offsets identical to the source.
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find `<name` at or after `from` where the next byte ends the tag name
/// (so `<th` does not match `<thead`). `lc` must already be lowered.
fn find_open_ci(lc: &str, name: &str, from: usize) -> Option<usize> {
    let pat = format!("<{}", name);
    let mut at = from;
    loop {
        let i = lc.get(at..)?.find(&pat)? + at;
        let next = lc.as_bytes().get(i + pat.len()).copied();
        match next {
            Some(b'>') | Some(b'/') => return Some(i),
            Some(b) if b.is_ascii_whitespace() => return Some(i),
            _ => at = i + pat.len(),
        }
    }
}

/// Next `<name ...>…</name>` block at or after `from`, as byte offsets
/// `(start, end)` covering both tags.
pub fn next_tag_block_ci(s: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    next_block_in(&lc, s, name, from)
}

/// Byte offset just past the `>` closing the tag that opens at `start`.
/// `>` inside a quoted attribute value (`data-tip="<b>…</b>"`) doesn't count.
fn open_tag_end(s: &str, start: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, &b) in s.as_bytes().get(start..)?.iter().enumerate() {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return Some(start + i + 1),
            _ => {}
        }
    }
    None
}

fn next_block_in(lc: &str, s: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let start = find_open_ci(lc, name, from)?;
    let open_end = open_tag_end(s, start)?;
    let close = format!("</{}>", name);
    let end = lc[open_end..].find(&close)? + open_end + close.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = open_tag_end(block, 0) {
        if let Some(cs) = block.rfind('<') {
            if cs >= oe {
                return block[oe..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    let mut quote: Option<char> = None;

    for ch in s.chars() {
        match (in_tag, quote, ch) {
            (true, Some(q), _) if ch == q => quote = None,
            (true, Some(_), _) => {}
            (true, None, '"' | '\'') => quote = Some(ch),
            (true, None, '>') => in_tag = false,
            (true, None, _) => {}
            (false, _, '<') => in_tag = true,
            (false, _, _) => out.push(ch),
        }
    }
    out
}

/// Visible text of a cell block: tags stripped, entities decoded, whitespace collapsed.
pub fn cell_text(block: &str) -> String {
    let inner = inner_after_open_tag(block);
    normalize_ws(&decode_entities(&strip_tags(inner)))
}

/// All `<th>`/`<td>` cells of one row, in document order.
/// Empty cells come back as `None`.
pub fn read_cells(tr: &str) -> Vec<Option<String>> {
    let lc = to_lower(tr);
    let mut cells = Vec::new();
    let mut pos = 0usize;

    loop {
        let th = next_block_in(&lc, tr, "th", pos);
        let td = next_block_in(&lc, tr, "td", pos);
        let (s, e) = match (th, td) {
            (Some(a), Some(b)) => if a.0 < b.0 { a } else { b },
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => break,
        };
        let text = cell_text(&tr[s..e]);
        cells.push(if text.is_empty() { None } else { Some(text) });
        pos = e;
    }
    cells
}

/// First `<table>` of the document (comments ignored).
/// The first row with cells is the header; every later row with cells is data.
pub fn first_table(doc: &str) -> Option<RawTable> {
    let doc = strip_comments(doc);
    let (t_s, t_e) = next_tag_block_ci(&doc, "table", 0)?;
    let table = &doc[t_s..t_e];
    let lc = to_lower(table);

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut pos = 0usize;

    while let Some((tr_s, tr_e)) = next_block_in(&lc, table, "tr", pos) {
        pos = tr_e;
        let cells = read_cells(&table[tr_s..tr_e]);
        if cells.is_empty() { continue; }

        if headers.is_none() {
            headers = Some(cells.into_iter().map(Option::unwrap_or_default).collect());
        } else {
            rows.push(cells);
        }
    }

    headers.map(|h| RawTable::new(h, rows))
}
