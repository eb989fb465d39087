//! Document loading: HTTP fetch, local file or stdin.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;

const USER_AGENT: &str = concat!("apigen/", env!("CARGO_PKG_VERSION"));

/// Where the reference document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
    Stdin,
}

impl Source {
    /// `-` selects stdin, any other input is a path, no input means `url`.
    pub fn from_args(input: Option<&str>, url: &str) -> Self {
        match input {
            Some("-") => Source::Stdin,
            Some(path) => Source::File(PathBuf::from(path)),
            None => Source::Url(url.to_string()),
        }
    }
}

/// Read the whole document into memory.
pub fn load(source: &Source) -> Result<String> {
    let markup = match source {
        Source::Url(url) => fetch(url)?,
        Source::File(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        Source::Stdin => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };
    info!(bytes = markup.len(), "loaded document");
    Ok(markup)
}

fn fetch(url: &str) -> Result<String> {
    info!(%url, "fetching");
    // ureq reports non-2xx statuses as errors.
    let response = ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .call()
        .with_context(|| format!("failed to fetch {}", url))?;
    let mut body = String::new();
    response
        .into_reader()
        .read_to_string(&mut body)
        .with_context(|| format!("failed to read response body from {}", url))?;
    Ok(body)
}
