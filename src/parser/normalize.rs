//! Schema normalizer: turns a raw record into a typed definition.
//!
//! A record is a type when its table header reads `Field | Type | Description`
//! and a function when it reads `Parameter | Type | Required | Description`.
//! Records with neither header, or with no complete rows, are section
//! headings rather than definitions and are dropped.

use super::segment::Record;
use crate::model::{Definition, DefinitionKind, ParamEntry};
use tracing::{debug, trace, warn};

const TYPE_HEADER: &[&str] = &["Field", "Type", "Description"];
const FUNCTION_HEADER: &[&str] = &["Parameter", "Type", "Required", "Description"];

/// Position and kind of the first header row in `body`.
fn find_header(body: &[String]) -> Option<(usize, DefinitionKind)> {
    let matches_at = |i: usize, header: &[&str]| {
        body.len() >= i + header.len()
            && body[i..i + header.len()]
                .iter()
                .zip(header)
                .all(|(cell, expected)| cell == expected)
    };
    (0..body.len()).find_map(|i| {
        if matches_at(i, TYPE_HEADER) {
            Some((i, DefinitionKind::Type))
        } else if matches_at(i, FUNCTION_HEADER) {
            Some((i, DefinitionKind::Function))
        } else {
            None
        }
    })
}

fn header_width(kind: DefinitionKind) -> usize {
    match kind {
        DefinitionKind::Type => TYPE_HEADER.len(),
        DefinitionKind::Function => FUNCTION_HEADER.len(),
    }
}

fn param_from_row(kind: DefinitionKind, row: &[String]) -> ParamEntry {
    match kind {
        DefinitionKind::Type => ParamEntry {
            name: row[0].clone(),
            declared_type: row[1].clone(),
            required: !row[2].starts_with("Optional"),
            description: row[2].clone(),
        },
        DefinitionKind::Function => ParamEntry {
            name: row[0].clone(),
            declared_type: row[1].clone(),
            required: row[2].eq_ignore_ascii_case("yes"),
            description: row[3].clone(),
        },
    }
}

/// Normalize one record; `None` when it does not describe a definition.
///
/// Empty paragraphs are left out of the description rather than kept as blank lines.
pub fn normalize(record: Record) -> Option<Definition> {
    let Some((header_at, kind)) = find_header(&record.body) else {
        debug!(title = %record.title, "dropping record without a parameter table");
        return None;
    };

    let width = header_width(kind);
    let rows = &record.body[header_at + width..];
    let params: Vec<ParamEntry> = rows
        .chunks_exact(width)
        .map(|row| param_from_row(kind, row))
        .collect();
    let leftover = rows.len() % width;
    if leftover != 0 {
        debug!(title = %record.title, leftover, "ignoring incomplete table row");
    }
    if params.is_empty() {
        debug!(title = %record.title, "dropping record with an empty parameter table");
        return None;
    }

    let looks_like_function = record.title.starts_with(|c: char| c.is_lowercase());
    if looks_like_function != (kind == DefinitionKind::Function) {
        warn!(
            title = %record.title,
            ?kind,
            "table header disagrees with the capitalization of the name"
        );
    }
    if !record.suffix.is_empty() {
        trace!(title = %record.title, suffix = ?record.suffix, "ignoring text after table");
    }

    let description = record.body[..header_at]
        .iter()
        .filter(|text| !text.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    Some(Definition {
        name: record.title,
        description,
        params,
        kind,
    })
}
