use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$[0-9]+$").expect("placeholder pattern compiles"));

static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+|[0-9]+\.[0-9]+)$").expect("numeric literal pattern compiles")
});

/// Whether `identifier` names a compiler-introduced temporary such as `$0`.
pub fn is_placeholder(identifier: &str) -> bool {
    PLACEHOLDER.is_match(identifier)
}

/// Whether a constant may be printed as-is. Everything else is redacted.
pub fn is_verbatim_literal(value: &str) -> bool {
    value == "true" || value == "false" || NUMERIC_LITERAL.is_match(value)
}

/// Rendered right-hand sides of placeholder assignments, keyed by placeholder identifier.
///
/// Lives for a single render pass.
#[derive(Debug, Default, Clone)]
pub struct Substitutions {
    entries: HashMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `text` for `identifier`, returning the text it replaces.
    pub fn insert(&mut self, identifier: &str, text: String) -> Option<String> {
        self.entries.insert(identifier.to_string(), text)
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    /// The captured text for `identifier`, or `identifier` itself.
    pub fn resolve<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.get(identifier).unwrap_or(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
