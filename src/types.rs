//! Type mapper: declared-type prose to target type tokens.
//!
//! The reference describes types informally ("Array of PhotoSize",
//! "Integer or String"). [`MappedType::parse`] reduces that text to a base
//! type plus an array-dimension count; the dialect methods render it.

const ARRAY_WRAPPER: &str = "Array of";

/// Names that stand for polymorphic API concepts with no single shape.
pub const DEFAULT_OPAQUE_TYPES: &[&str] = &[
    "ChatMember",
    "InputFile",
    "CallbackGame",
    "InlineQueryResult",
    "InputMessageContent",
    "VoiceChatStarted",
    "InputMedia",
    "BotCommandScope",
    "PassportElementError",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Integer,
    Float,
    String,
    Boolean,
}

impl Scalar {
    fn lookup(name: &str) -> Option<Self> {
        match name {
            "Integer" => Some(Scalar::Integer),
            "Float" | "Float number" => Some(Scalar::Float),
            "String" => Some(Scalar::String),
            "Boolean" | "True" | "False" => Some(Scalar::Boolean),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseType {
    Scalar(Scalar),
    /// Another generated definition, referenced by name
    Reference(String),
    /// Union, opaque or unresolvable type
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    pub base: BaseType,
    pub dimensions: usize,
    /// Declared text contains " or" (message dialect collapses these)
    pub loose_union: bool,
}

impl MappedType {
    /// Map declared-type text, treating names in `opaque` as [`BaseType::Any`].
    pub fn parse(declared: &str, opaque: &[String]) -> Self {
        let dimensions = declared.matches(ARRAY_WRAPPER).count();
        let stripped = declared.replace(ARRAY_WRAPPER, "");
        let name = stripped.trim();

        let base = if declared.contains(" or ") || !is_identifier(name) {
            BaseType::Any
        } else if let Some(scalar) = Scalar::lookup(name) {
            BaseType::Scalar(scalar)
        } else if DEFAULT_OPAQUE_TYPES.contains(&name) || opaque.iter().any(|o| o == name) {
            BaseType::Any
        } else if name.starts_with(|c: char| c.is_uppercase()) {
            BaseType::Reference(name.to_string())
        } else {
            BaseType::Any
        };

        MappedType {
            base,
            dimensions,
            loose_union: declared.contains(" or"),
        }
    }

    /// Go type: `[]` per dimension, pointers for references, `interface{}` for Any.
    pub fn go_type(&self) -> String {
        let inner = match &self.base {
            BaseType::Scalar(Scalar::Integer) => "int64".to_string(),
            BaseType::Scalar(Scalar::Float) => "float32".to_string(),
            BaseType::Scalar(Scalar::String) => "string".to_string(),
            BaseType::Scalar(Scalar::Boolean) => "bool".to_string(),
            BaseType::Reference(name) => format!("*{}", name),
            BaseType::Any => "interface{}".to_string(),
        };
        format!("{}{}", "[]".repeat(self.dimensions), inner)
    }

    /// Protobuf type. Unions and nested arrays cannot be expressed as
    /// repeated fields, so they collapse to `bytes`.
    pub fn proto_type(&self) -> String {
        if self.loose_union || self.dimensions > 1 {
            return "bytes".to_string();
        }
        let inner = match &self.base {
            BaseType::Scalar(Scalar::Integer) => "int64",
            BaseType::Scalar(Scalar::Float) => "float",
            BaseType::Scalar(Scalar::String) => "string",
            BaseType::Scalar(Scalar::Boolean) => "bool",
            BaseType::Reference(name) => name.as_str(),
            BaseType::Any => "bytes",
        };
        if self.dimensions == 1 {
            format!("repeated {}", inner)
        } else {
            inner.to_string()
        }
    }
}

/// A single word of letters, digits or underscores ("Float number" is
/// handled by the scalar table before this matters).
fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && (Scalar::lookup(name).is_some()
            || name.chars().all(|c| c.is_alphanumeric() || c == '_'))
}
