//! Line comments with greedy word wrapping.

/// Render `text` as `//` comment lines indented by `indent` spaces.
///
/// Each input line longer than `width` characters is broken at the last
/// whitespace at or before column `width`. A line with no such whitespace
/// is kept whole rather than split inside a word.
pub fn format_comment(text: &str, indent: usize, width: usize) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let pad = " ".repeat(indent);
    wrap_lines(text, width)
        .iter()
        .map(|line| {
            if line.is_empty() {
                format!("{}//", pad)
            } else {
                format!("{}// {}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap each `\n`-separated line of `text` to at most `width` characters
/// where a word boundary allows it.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.split('\n') {
        let mut current = line.to_string();
        loop {
            let chars: Vec<char> = current.chars().collect();
            if chars.len() <= width {
                out.push(current);
                break;
            }
            let Some(split_at) = (1..=width).rev().find(|&i| chars[i].is_whitespace()) else {
                out.push(current);
                break;
            };
            let head: String = chars[..split_at].iter().collect();
            let tail: String = chars[split_at..].iter().collect();
            out.push(head.trim().to_string());
            let tail = tail.trim().to_string();
            if tail.is_empty() {
                break;
            }
            current = tail;
        }
    }
    out
}
