//! Appending a compiled filter to an existing WHERE clause.
//!
//! A listing request may carry a filter payload next to the constraints the
//! listing already applies. The payload is decoded and compiled here and
//! joined with the existing conditions by `AND`. A payload that cannot be
//! decoded leaves the clause untouched; a decoded payload that fails to
//! compile is an error.

use std::fmt;

use serde_json::Value as Json;
use tracing::{debug, warn};

use crate::{
    compiler::{Compiler, is_empty_filter},
    error::Result,
    parser::parse_value,
};

/// Conditions of a WHERE clause, joined with `AND`.
///
/// # Examples
///
/// ```
/// use rulesql::{Compiler, WhereClause};
///
/// let mut clause = WhereClause::new();
/// clause.push("`deleted` = 0");
///
/// let payload = r#"{"condition":"AND","rules":[
///     {"field":"title","type":"string","operator":"begins_with","value":"foo"}
/// ],"valid":true}"#;
/// clause.push_filter(Some(payload), "title", &Compiler::new()).unwrap();
///
/// assert_eq!(clause.to_string(), "`deleted` = 0 AND  ( `title` LIKE 'foo%' ) ");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    conditions: Vec<String>,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, condition: impl Into<String>) {
        self.conditions.push(condition.into());
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Compiles `payload` against `target` and appends it.
    ///
    /// Returns whether a condition was added. Absent, blank or undecodable
    /// payloads and filters without rules add nothing.
    pub fn push_filter(
        &mut self,
        payload: Option<&str>,
        target: &str,
        compiler: &Compiler,
    ) -> Result<bool> {
        let Some(text) = payload.filter(|text| !text.trim().is_empty()) else {
            return Ok(false);
        };

        let json: Json = match serde_json::from_str(text) {
            Ok(json) => json,
            Err(e) => {
                warn!(target_field = target, error = %e, "skipping undecodable filter payload");
                return Ok(false);
            }
        };

        if !json.is_object() {
            warn!(target_field = target, "skipping filter payload that is not an object");
            return Ok(false);
        }

        if is_empty_filter(&json) {
            debug!(target_field = target, "filter has no rules");
            return Ok(false);
        }

        let tree = parse_value(&json)?;
        let fragment = compiler.compile(&tree, target)?;
        self.conditions.push(fragment);
        Ok(true)
    }
}

impl fmt::Display for WhereClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.conditions.join(" AND "))
    }
}
