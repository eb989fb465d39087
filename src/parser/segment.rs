//! Record segmenter: partitions fragments into heading-anchored records.

use super::collect::{Fragment, FragmentKind};

/// Raw text belonging to one heading, before any interpretation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    /// Paragraphs and cells up to the end of the first table
    pub body: Vec<String>,
    /// Paragraphs and cells after the first table
    pub suffix: Vec<String>,
}

impl Record {
    fn new(title: String) -> Self {
        Record {
            title,
            ..Record::default()
        }
    }
}

/// Group fragments into records. Anything before the first heading is dropped.
pub fn segment(fragments: Vec<Fragment>) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current: Option<Record> = None;
    let mut table_closed = false;

    for fragment in fragments {
        match fragment.kind {
            FragmentKind::Heading => {
                records.extend(current.take());
                current = Some(Record::new(fragment.text));
                table_closed = false;
            }
            FragmentKind::TableEnd => table_closed = true,
            FragmentKind::Paragraph | FragmentKind::Cell => {
                if let Some(record) = current.as_mut() {
                    if table_closed {
                        record.suffix.push(fragment.text);
                    } else {
                        record.body.push(fragment.text);
                    }
                }
            }
        }
    }
    records.extend(current);
    records
}
