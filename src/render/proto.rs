//! Protobuf renderer: one message per definition, methods included.

use super::comment::format_comment;
use super::{push_comment, Renderer};
use crate::model::Definition;
use crate::types::MappedType;

pub struct ProtoRenderer {
    pub width: usize,
    pub opaque_types: Vec<String>,
}

impl Renderer for ProtoRenderer {
    fn render(&self, defs: &[Definition]) -> String {
        let blocks: Vec<String> = defs.iter().map(|def| self.render_message(def)).collect();
        if blocks.is_empty() {
            return String::new();
        }
        let mut output = blocks.join("\n\n");
        output.push('\n');
        output
    }
}

impl ProtoRenderer {
    fn render_message(&self, def: &Definition) -> String {
        let mut out = String::new();
        push_comment(&mut out, &format_comment(&def.description, 0, self.width));
        out.push_str(&format!("message {} {{\n", def.name));
        // Field numbers follow table order, starting at 1.
        for (number, param) in (1..).zip(&def.params) {
            out.push('\n');
            push_comment(&mut out, &format_comment(&param.description, 2, self.width));
            let field_type = MappedType::parse(&param.declared_type, &self.opaque_types).proto_type();
            out.push_str(&format!("  {} {} = {};\n", field_type, param.name, number));
        }
        out.push('}');
        out
    }
}
