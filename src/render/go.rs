//! Go renderer: one struct per type, one signature comment per method.

use super::comment::format_comment;
use super::naming::{exported_name, local_name};
use super::{push_comment, Renderer};
use crate::model::{Definition, ParamEntry};
use crate::types::MappedType;

pub struct GoRenderer {
    pub package: String,
    pub width: usize,
    pub opaque_types: Vec<String>,
}

impl Renderer for GoRenderer {
    fn render(&self, defs: &[Definition]) -> String {
        let mut output = format!("package {}\n", self.package);
        let blocks: Vec<String> = defs
            .iter()
            .map(|def| {
                if def.is_function() {
                    self.render_function(def)
                } else {
                    self.render_struct(def)
                }
            })
            .collect();
        if !blocks.is_empty() {
            output.push('\n');
            output.push_str(&blocks.join("\n\n"));
            output.push('\n');
        }
        output
    }
}

impl GoRenderer {
    fn go_type(&self, declared: &str) -> String {
        MappedType::parse(declared, &self.opaque_types).go_type()
    }

    fn render_struct(&self, def: &Definition) -> String {
        let mut out = String::new();
        push_comment(&mut out, &format_comment(&def.description, 0, self.width));
        out.push_str(&format!("type {} struct {{", def.name));
        for param in &def.params {
            out.push('\n');
            out.push_str(&self.render_field(param));
            out.push('\n');
        }
        out.push('}');
        out
    }

    fn render_field(&self, param: &ParamEntry) -> String {
        let mut out = String::new();
        push_comment(&mut out, &format_comment(&param.description, 2, self.width));
        out.push_str(&format!(
            "  {} {} `json:\"{}\"`",
            exported_name(&param.name),
            self.go_type(&param.declared_type),
            param.name
        ));
        out
    }

    fn render_function(&self, def: &Definition) -> String {
        let mut out = String::new();
        push_comment(&mut out, &format_comment(&def.description, 0, self.width));
        out.push_str(&format!("// {}", self.signature(def)));
        out
    }

    /// `func name(arg type, ...) (T, error)`, or `... error` when the
    /// description names no result.
    fn signature(&self, def: &Definition) -> String {
        let args: Vec<String> = def
            .params
            .iter()
            .map(|p| format!("{} {}", local_name(&p.name), self.go_type(&p.declared_type)))
            .collect();
        let result = match def.returned_type() {
            Some(returned) => format!("({}, error)", self.go_type(returned)),
            None => "error".to_string(),
        };
        format!("func {}({}) {}", def.name, args.join(", "), result)
    }
}
