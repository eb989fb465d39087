//! apigen: generate type declarations from an HTML API reference page.
//!
//! Reads the reference (by default the Telegram Bot API page), extracts
//! every heading followed by a `Field`/`Parameter` table and prints the
//! result as Go structs, protobuf messages or a JSON model dump:
//!
//! - `apigen > types.go`
//! - `apigen --dialect message api.html > api.proto`
//! - `curl -s https://core.telegram.org/bots/api | apigen - --skip-functions`

mod config;
mod model;
mod parser;
mod render;
mod source;
mod types;

use anyhow::{bail, Result};
use clap::Parser;
use config::{Dialect, GeneratorConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "apigen",
    about = "Generate Go structs or protobuf messages from an HTML API reference page"
)]
struct Cli {
    /// Local HTML file, or "-" for stdin. If omitted, the document is fetched from --url.
    input: Option<String>,

    /// Reference page to fetch when no input file is given
    #[arg(short = 'u', long, default_value = config::DEFAULT_URL)]
    url: String,

    /// Output dialect
    #[arg(short = 'd', long, value_enum, default_value_t = Dialect::Struct)]
    dialect: Dialect,

    /// Package name for struct output
    #[arg(short = 'p', long, default_value = config::DEFAULT_PACKAGE)]
    package: String,

    /// Column at which comments are wrapped
    #[arg(short = 'w', long, default_value_t = config::DEFAULT_WIDTH)]
    width: usize,

    /// Ignore every definition before the first heading with this title
    #[arg(long)]
    start_at: Option<String>,

    /// Emit type definitions only
    #[arg(long)]
    skip_functions: bool,

    /// Extra type names to treat as opaque (repeatable)
    #[arg(long = "opaque", value_name = "TYPE")]
    opaque_types: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn generator_config(&self) -> Result<GeneratorConfig> {
        if self.width == 0 {
            bail!("--width must be greater than zero");
        }
        Ok(GeneratorConfig {
            dialect: self.dialect,
            package: self.package.clone(),
            width: self.width,
            start_at: self.start_at.clone(),
            include_functions: !self.skip_functions,
            opaque_types: self.opaque_types.clone(),
        })
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Logs go to stderr; stdout carries the generated source.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("apigen={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.generator_config()?;
    let source = source::Source::from_args(cli.input.as_deref(), &cli.url);
    let markup = source::load(&source)?;

    let defs = parser::parse_document(&markup, &config)?;
    let renderer = render::create_renderer(&config);
    print!("{}", renderer.render(&defs));
    Ok(())
}
