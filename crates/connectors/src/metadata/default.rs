use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DEFAULT_FOR: Regex = Regex::new(r"(?i)DEFAULT\s+(.+)\s+FOR\s+\[(\S+)\]\s*$")
        .expect("default clause pattern is valid");
}

/// Target and expression of a `DEFAULT <expr> FOR [<column>]` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultClause {
    pub column: String,
    pub expression: String,
}

/// Extracts the trailing `DEFAULT <expr> FOR [<column>]` clause from a default
/// constraint's definition. Matching is case-insensitive and trailing
/// whitespace is ignored.
pub fn parse_default_clause(text: &str) -> Option<DefaultClause> {
    let caps = DEFAULT_FOR.captures(text)?;
    Some(DefaultClause {
        column: caps.get(2)?.as_str().to_string(),
        expression: caps.get(1)?.as_str().to_string(),
    })
}
