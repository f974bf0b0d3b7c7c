use crate::lexer::{self, Line};

/// Find the source line that assigns `key` (a full dotted path).
///
/// Tracks `[group]` headers the same way the parser does, and treats a
/// header that names `key` itself as a match. Falls back to the first line
/// whose bare key equals the last path segment. Returns `(0, "<key not found>")`
/// when nothing matches.
pub(super) fn find_config_line(key: &str, raw_content: &str) -> (usize, String) {
    let mut group = String::new();
    let mut fallback: Option<(usize, String)> = None;
    let leaf = key.rsplit('.').next().unwrap_or(key);

    for (idx, raw) in raw_content.lines().enumerate() {
        match lexer::classify(raw) {
            Line::Group { name, text } => {
                if name == key {
                    return (idx + 1, text.to_string());
                }
                group = name.to_string();
            }
            Line::Assignment { key: line_key, text, .. } => {
                let full_path = if group.is_empty() {
                    line_key.to_string()
                } else {
                    format!("{}.{}", group, line_key)
                };

                if full_path == key {
                    return (idx + 1, text.to_string());
                }
                if fallback.is_none() && line_key == leaf {
                    fallback = Some((idx + 1, text.to_string()));
                }
            }
            Line::Blank | Line::Other(_) => {}
        }
    }

    fallback.unwrap_or_else(|| (0, "<key not found>".into()))
}

/// Like [`find_config_line`], but walks up the path until some prefix of it
/// can be located. Used for lookups that miss, to show where the nearest
/// existing parent lives.
pub(super) fn find_closest_config_line(key: &str, raw_content: &str) -> (usize, String) {
    let mut candidate = key;
    loop {
        let (line, snippet) = find_config_line(candidate, raw_content);
        if line > 0 {
            return (line, snippet);
        }
        match candidate.rsplit_once('.') {
            Some((parent, _)) => candidate = parent,
            None => return (0, "<key not found>".into()),
        }
    }
}
