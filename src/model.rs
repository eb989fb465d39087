//! Data model for scraped API definitions: dialect-agnostic.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Whether a definition describes a data type or a callable method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKind {
    /// Table header "Field | Type | Description"
    Type,
    /// Table header "Parameter | Type | Required | Description"
    Function,
}

/// One row of a parameter table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamEntry {
    pub name: String,
    /// Free text from the document, e.g. "Array of String"
    pub declared_type: String,
    pub required: bool,
    pub description: String,
}

/// A normalized type or function definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    pub name: String,
    /// Newline-joined paragraphs between the heading and the table header
    pub description: String,
    pub params: Vec<ParamEntry>,
    pub kind: DefinitionKind,
}

// Returned-type phrases used by the Bot API reference, most specific first.
static RE_RETURNS_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"in form of an? ((?:Array of )*[A-Z][A-Za-z0-9]*) object").unwrap()
});

static RE_RETURNS_AS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bas (?:an? )?((?:Array of )*[A-Z][A-Za-z0-9]*) objects?\b").unwrap()
});

static RE_RETURNS_PASSIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:Array of )*[A-Z][A-Za-z0-9]*)(?: objects?)? (?:is|are) returned").unwrap()
});

static RE_RETURNS_ACTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?i:returns) (?:an? |the )?(?:[a-z]+ )*?\b((?:Array of )*[A-Z][A-Za-z0-9]*)")
        .unwrap()
});

impl Definition {
    pub fn is_function(&self) -> bool {
        self.kind == DefinitionKind::Function
    }

    /// Declared type named as the method result in the description, if any.
    ///
    /// "On success, the sent Message is returned" yields `Message`;
    /// "Returns True on success" yields `True`; "Returns the new invite link
    /// as ChatInviteLink object" yields `ChatInviteLink`.
    pub fn returned_type(&self) -> Option<&str> {
        [
            &RE_RETURNS_FORM,
            &RE_RETURNS_AS,
            &RE_RETURNS_PASSIVE,
            &RE_RETURNS_ACTIVE,
        ]
            .iter()
            .find_map(|re| re.captures(&self.description))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Sort key: the name from its first uppercase letter on.
///
/// "getMe" keys as "Me"; "Message" keys as itself. A name without any
/// uppercase letter keys as its last character.
pub fn sort_key(name: &str) -> &str {
    let start = name
        .find(char::is_uppercase)
        .or_else(|| name.char_indices().last().map(|(i, _)| i))
        .unwrap_or(0);
    &name[start..]
}

/// Stable sort by [`sort_key`].
pub fn sort_definitions(defs: &mut [Definition]) {
    defs.sort_by(|a, b| sort_key(&a.name).cmp(sort_key(&b.name)));
}
