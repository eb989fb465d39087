//! Identifier casing for generated Go code.

/// Segments written fully upper-case, per Go initialism convention.
const INITIALISMS: &[&str] = &["id", "url", "ip"];

fn format_segment(segment: &str) -> String {
    if INITIALISMS.contains(&segment.to_lowercase().as_str()) {
        return segment.to_uppercase();
    }
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `snake_case` to `CamelCase`: "chat_id" → "ChatID", "file_url" → "FileURL".
pub fn exported_name(name: &str) -> String {
    name.split('_')
        .filter(|s| !s.is_empty())
        .map(format_segment)
        .collect()
}

/// Like [`exported_name`] with the first letter lower-cased, unless the
/// whole name is an initialism ("chat_id" → "chatID", "id" → "ID").
pub fn local_name(name: &str) -> String {
    let exported = exported_name(name);
    if exported.to_uppercase() == exported {
        return exported;
    }
    let mut chars = exported.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
