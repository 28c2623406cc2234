// src/core/sanitize.rs
use url::Url;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Sphinx headings end with a permalink pilcrow: "What’s New In Python 3.12¶".
pub fn strip_pilcrow(s: &str) -> String {
    s.trim_end_matches('¶').trim().to_string()
}

/// Last path segment of `url`, used as a local file name.
/// `None` when the URL ends in a directory ("…/archives/").
pub fn file_name_from_url(url: &Url) -> Option<String> {
    let name = url.path_segments()?.next_back()?;
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}

/// Status code from a PEP index abbreviation: the type letter comes first
/// ("SF" → "F", "IA" → "A"), a bare type letter means no status yet ("P" → "").
pub fn status_code(abbr: &str) -> &str {
    let abbr = abbr.trim();
    match abbr.char_indices().nth(1) {
        Some((i, _)) => &abbr[i..],
        None => "",
    }
}
