use once_cell::sync::Lazy;
use regex::Regex;
use log::*;
use crate::{Error, Result};

/// Include search list block which follows both the quote and the angle
/// headers and ends with the terminator line.
const SEARCH_LIST_PATTERN: &str =
    r#"(?:#include ["<]\.\.\.[">] search starts here:\n){2}((?:(?:.*?)\n)*)(?:End of search list\.)"#;

static SEARCH_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(SEARCH_LIST_PATTERN).expect("Invalid search list pattern")
});

/// Extract include directories from preprocessor diagnostics in search order
pub fn parse_search_list(diagnostics: &str) -> Result<Vec<String>> {
    let block = SEARCH_LIST.captures(diagnostics)
        .and_then(|captures| captures.get(1))
        .ok_or(Error::PatternNotMatched)?;

    debug!("Search list block: {:?}", block.as_str());

    Ok(block.as_str().trim().lines()
       .map(|line| line.trim().into())
       .collect())
}
