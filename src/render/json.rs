//! JSON renderer: the normalized model itself, for tooling and debugging.

use super::Renderer;
use crate::model::Definition;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, defs: &[Definition]) -> String {
        // Serializing plain structs of strings, bools and vecs cannot fail.
        let mut out = serde_json::to_string_pretty(defs).unwrap_or_default();
        out.push('\n');
        out
    }
}
