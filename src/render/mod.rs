//! Renderer module: trait-based dialect dispatch.

pub mod comment;
pub mod go;
pub mod json;
pub mod naming;
pub mod proto;

use crate::config::{Dialect, GeneratorConfig};
use crate::model::Definition;

/// Trait for rendering sorted definitions into one output dialect.
pub trait Renderer {
    fn render(&self, defs: &[Definition]) -> String;
}

/// Create the renderer selected by `config.dialect`.
pub fn create_renderer(config: &GeneratorConfig) -> Box<dyn Renderer> {
    match config.dialect {
        Dialect::Struct => Box::new(go::GoRenderer {
            package: config.package.clone(),
            width: config.width,
            opaque_types: config.opaque_types.clone(),
        }),
        Dialect::Message => Box::new(proto::ProtoRenderer {
            width: config.width,
            opaque_types: config.opaque_types.clone(),
        }),
        Dialect::Json => Box::new(json::JsonRenderer),
    }
}

/// Push `comment` followed by a newline, unless it is empty.
fn push_comment(out: &mut String, comment: &str) {
    if !comment.is_empty() {
        out.push_str(comment);
        out.push('\n');
    }
}
