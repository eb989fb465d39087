//! Tag stream reader: pull-based HTML event iterator.
//!
//! Understands tags, attributes, text, comments and raw-text elements.
//! Malformed markup is never an error: the reader keeps going and the
//! collector simply fails to find the structure it is looking for.

use regex::{Captures, Regex};
use std::collections::VecDeque;
use std::sync::LazyLock;

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "menuitem",
    "meta", "param", "source", "track", "wbr",
];

/// Elements whose content is raw text, not markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

static RE_CHAR_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    Open {
        name: String,
        /// In source order, values with character references decoded
        attrs: Vec<(String, String)>,
    },
    Close {
        name: String,
    },
    Text(String),
}

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Single-pass iterator over the structural events of an HTML document.
pub struct TagReader<'a> {
    input: &'a str,
    pos: usize,
    /// Open non-void elements, innermost last
    stack: Vec<String>,
    /// Events already decided but not yet returned (`<p/>` close, raw text)
    pending: VecDeque<TagEvent>,
}

impl<'a> TagReader<'a> {
    pub fn new(input: &'a str) -> Self {
        TagReader {
            input,
            pos: 0,
            stack: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Skip past `terminator`, or to the end of input if it never appears.
    fn skip_past(&mut self, terminator: &str) {
        match self.rest().find(terminator) {
            Some(idx) => self.pos += idx + terminator.len(),
            None => self.pos = self.input.len(),
        }
    }

    fn push(&mut self, name: &str) {
        if !is_void_element(name) {
            self.stack.push(name.to_string());
        }
    }

    fn pop(&mut self, name: &str) {
        if let Some(idx) = self.stack.iter().rposition(|open| open == name) {
            self.stack.truncate(idx);
        }
    }

    fn read_text(&mut self) -> TagEvent {
        let rest = self.rest();
        // A '<' at the current position was not a tag; keep it as text.
        let first = rest.chars().next().map_or(0, char::len_utf8);
        let end = rest[first..]
            .find('<')
            .map(|i| i + first)
            .unwrap_or(rest.len());
        self.pos += end;
        TagEvent::Text(decode_entities(&rest[..end]))
    }

    fn read_close_tag(&mut self) -> TagEvent {
        self.pos += 2;
        let name = self.read_name();
        self.skip_past(">");
        self.pop(&name);
        TagEvent::Close { name }
    }

    fn read_name(&mut self) -> String {
        let rest = self.rest();
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == ':' || c == '_'))
            .unwrap_or(rest.len());
        self.pos += end;
        rest[..end].to_ascii_lowercase()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn read_open_tag(&mut self) -> TagEvent {
        self.pos += 1;
        let name = self.read_name();
        let mut attrs = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.is_empty() {
                break;
            }
            if rest.starts_with('>') {
                self.pos += 1;
                break;
            }
            if rest.starts_with("/>") {
                self.pos += 2;
                self_closing = true;
                break;
            }
            if rest.starts_with('/') {
                self.pos += 1;
                continue;
            }
            let attr_end = rest
                .find(|c: char| c.is_whitespace() || c == '=' || c == '>' || c == '/')
                .unwrap_or(rest.len())
                .max(1);
            let attr_name = rest[..attr_end].to_ascii_lowercase();
            self.pos += attr_end;
            self.skip_whitespace();
            let value = if self.rest().starts_with('=') {
                self.pos += 1;
                self.skip_whitespace();
                self.read_attr_value()
            } else {
                String::new()
            };
            attrs.push((attr_name, value));
        }

        self.push(&name);
        if self_closing && !is_void_element(&name) {
            self.pop(&name);
            self.pending.push_back(TagEvent::Close { name: name.clone() });
        } else if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            self.read_raw_text(&name);
        }
        TagEvent::Open { name, attrs }
    }

    fn read_attr_value(&mut self) -> String {
        let rest = self.rest();
        if let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') {
            let body = &rest[1..];
            let end = body.find(quote).unwrap_or(body.len());
            self.pos += 1 + end + usize::from(end < body.len());
            decode_entities(&body[..end])
        } else {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(rest.len());
            self.pos += end;
            decode_entities(&rest[..end])
        }
    }

    /// Queue the verbatim body and closing tag of a `script`/`style` element.
    fn read_raw_text(&mut self, name: &str) {
        let rest = self.rest();
        let closing = format!("</{}", name);
        let end = rest
            .to_ascii_lowercase()
            .find(&closing)
            .unwrap_or(rest.len());
        if end > 0 {
            self.pending.push_back(TagEvent::Text(rest[..end].to_string()));
        }
        self.pos += end;
        if self.pos < self.input.len() {
            let close = self.read_close_tag();
            self.pending.push_back(close);
        }
    }
}

impl Iterator for TagReader<'_> {
    type Item = TagEvent;

    fn next(&mut self) -> Option<TagEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return None;
            }
            if !rest.starts_with('<') {
                return Some(self.read_text());
            }
            if rest.starts_with("<!--") {
                self.skip_past("-->");
                continue;
            }
            if rest.starts_with("<!") || rest.starts_with("<?") {
                self.skip_past(">");
                continue;
            }
            let after = rest[1..].chars().next();
            if rest.starts_with("</") && rest[2..].starts_with(|c: char| c.is_ascii_alphabetic()) {
                return Some(self.read_close_tag());
            }
            if after.is_some_and(|c| c.is_ascii_alphabetic()) {
                return Some(self.read_open_tag());
            }
            return Some(self.read_text());
        }
    }
}

/// Decode named and numeric character references. Unknown names are kept.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    RE_CHAR_REF
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(body)
            };
            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "mdash" => Some('\u{2014}'),
        "ndash" => Some('\u{2013}'),
        "hellip" => Some('\u{2026}'),
        "laquo" => Some('\u{ab}'),
        "raquo" => Some('\u{bb}'),
        "copy" => Some('\u{a9}'),
        "reg" => Some('\u{ae}'),
        "lsquo" => Some('\u{2018}'),
        "rsquo" => Some('\u{2019}'),
        "ldquo" => Some('\u{201c}'),
        "rdquo" => Some('\u{201d}'),
        "times" => Some('\u{d7}'),
        "middot" => Some('\u{b7}'),
        "bull" => Some('\u{2022}'),
        "thinsp" => Some('\u{2009}'),
        "ensp" => Some('\u{2002}'),
        "emsp" => Some('\u{2003}'),
        "larr" => Some('\u{2190}'),
        "rarr" => Some('\u{2192}'),
        "deg" => Some('\u{b0}'),
        _ => None,
    }
}
