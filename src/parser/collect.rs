//! Fragment collector: flattens tag events into the text of interesting tags.
//!
//! No tree is built. Only the text of `h4`, `p`, `td` and `th` elements is
//! kept, one trimmed fragment per element, plus a marker where each
//! outermost `table` ends. Interesting tags nested inside an open one are
//! treated as inline markup.

use super::tags::{TagEvent, TagReader};

const HEADING_TAG: &str = "h4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Heading,
    Paragraph,
    Cell,
    TableEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

impl Fragment {
    fn new(kind: FragmentKind, text: &str) -> Self {
        Fragment {
            kind,
            text: text.trim().to_string(),
        }
    }
}

fn slot_kind(tag: &str) -> Option<FragmentKind> {
    match tag {
        HEADING_TAG => Some(FragmentKind::Heading),
        "p" => Some(FragmentKind::Paragraph),
        "td" | "th" => Some(FragmentKind::Cell),
        _ => None,
    }
}

/// An interesting element whose text is being accumulated.
struct OpenSlot {
    kind: FragmentKind,
    /// Reader depth before the element opened
    depth: usize,
    buf: String,
}

#[derive(Default)]
struct Collector {
    fragments: Vec<Fragment>,
    slot: Option<OpenSlot>,
    /// Reader depth before the outermost open table
    table_depth: Option<usize>,
}

impl Collector {
    fn handle(&mut self, event: TagEvent, before: usize, after: usize) {
        match event {
            TagEvent::Open { name, .. } => {
                if name == "table" && self.table_depth.is_none() {
                    self.table_depth = Some(before);
                }
                if self.slot.is_none() {
                    if let Some(kind) = slot_kind(&name) {
                        self.slot = Some(OpenSlot {
                            kind,
                            depth: before,
                            buf: String::new(),
                        });
                    }
                }
            }
            TagEvent::Text(text) => {
                if let Some(slot) = self.slot.as_mut() {
                    slot.buf.push_str(&text);
                }
            }
            TagEvent::Close { .. } => {
                if self.slot.as_ref().is_some_and(|slot| after <= slot.depth) {
                    if let Some(slot) = self.slot.take() {
                        self.fragments.push(Fragment::new(slot.kind, &slot.buf));
                    }
                }
                if self.table_depth.is_some_and(|depth| after <= depth) {
                    self.table_depth = None;
                    self.fragments.push(Fragment::new(FragmentKind::TableEnd, ""));
                }
            }
        }
    }
}

/// Drain `reader` into the flat fragment list.
pub fn collect(mut reader: TagReader<'_>) -> Vec<Fragment> {
    let mut collector = Collector::default();
    loop {
        let before = reader.depth();
        let Some(event) = reader.next() else {
            break;
        };
        let after = reader.depth();
        collector.handle(event, before, after);
    }
    // Unterminated slot at end of input still counts.
    if let Some(slot) = collector.slot.take() {
        collector.fragments.push(Fragment::new(slot.kind, &slot.buf));
    }
    collector.fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frags(input: &str) -> Vec<(FragmentKind, String)> {
        collect(TagReader::new(input))
            .into_iter()
            .map(|f| (f.kind, f.text))
            .collect()
    }

    fn f(kind: FragmentKind, text: &str) -> (FragmentKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn heading_with_anchor() {
        let html = r##"<h4><a class="anchor" name="update" href="#update"><i class="anchor-icon"></i></a>Update</h4>"##;
        assert_eq!(frags(html), vec![f(FragmentKind::Heading, "Update")]);
    }

    #[test]
    fn paragraph_inline_markup() {
        let html = "<p>This <a href=\"#x\">object</a> represents<br/> an <em>incoming</em> update.</p>";
        assert_eq!(
            frags(html),
            vec![f(FragmentKind::Paragraph, "This object represents an incoming update.")]
        );
    }

    #[test]
    fn table_cells_and_end_marker() {
        let html = "<table><thead><tr><th>Field</th><th>Type</th></tr></thead>\
                    <tbody><tr><td>a</td><td></td></tr></tbody></table><p>after</p>";
        assert_eq!(
            frags(html),
            vec![
                f(FragmentKind::Cell, "Field"),
                f(FragmentKind::Cell, "Type"),
                f(FragmentKind::Cell, "a"),
                f(FragmentKind::Cell, ""),
                f(FragmentKind::TableEnd, ""),
                f(FragmentKind::Paragraph, "after"),
            ]
        );
    }

    #[test]
    fn nested_interesting_tag_is_inline() {
        let html = "<td>one <p>two</p> three</td><p>next</p>";
        assert_eq!(
            frags(html),
            vec![
                f(FragmentKind::Cell, "one two three"),
                f(FragmentKind::Paragraph, "next"),
            ]
        );
    }

    #[test]
    fn text_outside_slots_is_ignored() {
        let html = "<div>loose <span>text</span></div><ul><li>item</li></ul><p>kept</p>";
        assert_eq!(frags(html), vec![f(FragmentKind::Paragraph, "kept")]);
    }

    #[test]
    fn self_closed_paragraph_is_empty_fragment() {
        assert_eq!(
            frags("<p/><p>x</p>"),
            vec![f(FragmentKind::Paragraph, ""), f(FragmentKind::Paragraph, "x")]
        );
    }

    #[test]
    fn nested_table_ends_once() {
        let html = "<table><tr><td><table><tr><td>in</td></tr></table></td></tr></table>";
        assert_eq!(
            frags(html),
            vec![f(FragmentKind::Cell, "in"), f(FragmentKind::TableEnd, "")]
        );
    }

    #[test]
    fn unterminated_slot_flushed() {
        assert_eq!(frags("<p>dangling"), vec![f(FragmentKind::Paragraph, "dangling")]);
    }
}
