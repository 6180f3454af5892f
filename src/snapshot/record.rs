//! Scanner for the self-closing `<Op ... />` records of a command listing.
//!
//! Only the record shape is recognized here; what an operation means is decided by
//! [`crate::snapshot::parse`]. Anything between records (comments, blank lines, other tags) is
//! skipped.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record<'a> {
    /// Byte offset of the leading `<` in the scanned input.
    pub(crate) offset: usize,
    attrs: Vec<(&'a str, &'a str)>,
}

impl<'a> Record<'a> {
    /// Value of attribute `name`; on duplicates the last one wins.
    pub(crate) fn get(&self, name: &str) -> Option<&'a str> {
        self.attrs
            .iter()
            .rev()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
    }

    pub(crate) fn id(&self) -> Option<&'a str> {
        self.get("id")
    }
}

const OPEN: &str = "<Op";

pub(crate) fn scan(input: &str) -> Vec<Record<'_>> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;

    while let Some(rel) = input[i..].find(OPEN) {
        let start = i + rel;
        let body_start = start + OPEN.len();
        i = body_start;

        // `<Op` must be followed by whitespace (`<Options>` is not a record).
        if !bytes.get(body_start).is_some_and(|b| b.is_ascii_whitespace()) {
            continue;
        }
        let Some(close_rel) = input[body_start..].find('>') else {
            break;
        };
        let close = body_start + close_rel;
        if bytes[close - 1] != b'/' {
            continue;
        }

        let body = &input[body_start..close - 1];
        if body.trim().is_empty() {
            continue;
        }
        out.push(Record {
            offset: start,
            attrs: scan_attrs(body),
        });
        i = close + 1;
    }

    out
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

// name="value" pairs; unquoted or dangling attributes are dropped.
fn scan_attrs(body: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let bytes = body.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        if !is_word(bytes[i]) {
            i += 1;
            continue;
        }

        let name_start = i;
        while i < bytes.len() && is_word(bytes[i]) {
            i += 1;
        }
        let name = &body[name_start..i];

        if bytes.get(i) != Some(&b'=') || bytes.get(i + 1) != Some(&b'"') {
            continue;
        }
        let value_start = i + 2;
        let Some(value_len) = body[value_start..].find('"') else {
            break;
        };
        out.push((name, &body[value_start..value_start + value_len]));
        i = value_start + value_len + 1;
    }

    out
}
