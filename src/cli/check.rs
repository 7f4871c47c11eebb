//! Validate filter JSON without compiling it

use super::CliError;
use crate::parser::parse_filter;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Filter JSON
    pub filter: Option<String>,
    /// Return the parsed tree instead of a verdict
    pub ast: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// The filter parsed
    Valid,
    /// The parsed tree, as JSON
    Tree(serde_json::Value),
}

/// Parse the filter and report the outcome
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let text = options.filter.as_deref().ok_or(CliError::NoInput)?;
    let tree = parse_filter(text)?;

    if options.ast {
        Ok(CheckResult::Tree(serde_json::to_value(&tree)?))
    } else {
        Ok(CheckResult::Valid)
    }
}
