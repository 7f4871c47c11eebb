//! Identifier and literal quoting for the target SQL dialect.

use std::fmt;
use std::str::FromStr;

/// Quoting conventions of the database the fragment is appended to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// Back-quoted identifiers, backslash is an escape character in literals
    #[default]
    MySql,
    /// Double-quoted identifiers
    Ansi,
}

/// How single quotes inside a value are written into a literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueEscaping {
    /// `'` becomes `''` (and `\` becomes `\\` for MySQL)
    #[default]
    Doubled,
    /// Values are inserted as-is. Only safe for trusted input.
    Verbatim,
}

impl Dialect {
    fn identifier_quote(self) -> char {
        match self {
            Dialect::MySql => '`',
            Dialect::Ansi => '"',
        }
    }

    /// Quote a column reference. Dotted names are quoted per part, so
    /// `pages.title` becomes `` `pages`.`title` ``.
    pub fn quote_identifier(self, name: &str) -> String {
        let quote = self.identifier_quote();
        let doubled = format!("{quote}{quote}");

        name.split('.')
            .map(|part| format!("{quote}{}{quote}", part.replace(quote, &doubled)))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Escape text for use between single quotes. The quotes themselves are
    /// added by the caller, since LIKE patterns wrap the text in `%` first.
    pub fn escape_literal(self, text: &str, escaping: ValueEscaping) -> String {
        match (escaping, self) {
            (ValueEscaping::Verbatim, _) => text.to_string(),
            (ValueEscaping::Doubled, Dialect::MySql) => {
                text.replace('\\', "\\\\").replace('\'', "''")
            }
            (ValueEscaping::Doubled, Dialect::Ansi) => text.replace('\'', "''"),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::MySql => f.write_str("mysql"),
            Dialect::Ansi => f.write_str("ansi"),
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "ansi" | "postgres" | "postgresql" | "sqlite" => Ok(Dialect::Ansi),
            _ => Err(format!("unknown dialect '{}' (expected mysql or ansi)", s)),
        }
    }
}
