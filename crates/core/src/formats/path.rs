//! Suffix-based path helpers.
//!
//! serz decides what to do from the file name suffix, so these work on the
//! literal string and never sniff file contents.

use std::path::{Path, PathBuf};

/// Extension of the file name (text after the last dot), without the dot.
pub fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Replaces a trailing `old` with `new`. Returns `None` when `s` does not end
/// with `old`. Only the last occurrence is touched: `a.xml.xml` becomes
/// `a.xml.bin`.
pub fn replace_suffix(s: &str, old: &str, new: &str) -> Option<String> {
    let stem = s.strip_suffix(old)?;
    let mut replaced = String::with_capacity(stem.len() + new.len());
    replaced.push_str(stem);
    replaced.push_str(new);
    Some(replaced)
}

/// [`replace_suffix`] over a path. `None` for non UTF-8 paths or when the
/// suffix does not match.
pub fn sibling_path(path: &Path, old: &str, new: &str) -> Option<PathBuf> {
    let s = path.to_str()?;
    replace_suffix(s, old, new).map(PathBuf::from)
}
