//! Generator configuration, decoupled from the command line.

use clap::ValueEnum;

pub const DEFAULT_URL: &str = "https://core.telegram.org/bots/api";
pub const DEFAULT_PACKAGE: &str = "telegram";
pub const DEFAULT_WIDTH: usize = 95;

/// Output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dialect {
    /// Go structs and method signatures
    Struct,
    /// Protobuf messages
    Message,
    /// The normalized model as JSON
    Json,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub dialect: Dialect,
    /// Package declaration for struct output
    pub package: String,
    /// Comment wrap column
    pub width: usize,
    /// Skip definitions before the first heading with this title
    pub start_at: Option<String>,
    pub include_functions: bool,
    /// Extra names mapped to the placeholder type
    pub opaque_types: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            dialect: Dialect::Struct,
            package: DEFAULT_PACKAGE.to_string(),
            width: DEFAULT_WIDTH,
            start_at: None,
            include_functions: true,
            opaque_types: Vec::new(),
        }
    }
}
