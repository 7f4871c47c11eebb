use std::fmt;

use serde::Serialize;

/// Declared type of a rule's field, as sent by the rule builder.
///
/// Only `Double` changes how values are rendered; the others pass through.
/// Tags outside the known set are kept as `Other` so the compiler can decide
/// whether to reject them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    String,
    Integer,
    /// Also accepts the `float` tag
    Double,
    Boolean,
    Date,
    Time,
    Datetime,
    Other(String),
}

impl TypeTag {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "string" => TypeTag::String,
            "integer" => TypeTag::Integer,
            "double" | "float" => TypeTag::Double,
            "boolean" => TypeTag::Boolean,
            "date" => TypeTag::Date,
            "time" => TypeTag::Time,
            "datetime" => TypeTag::Datetime,
            other => TypeTag::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TypeTag::Other(_))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Double => "double",
            TypeTag::Boolean => "boolean",
            TypeTag::Date => "date",
            TypeTag::Time => "time",
            TypeTag::Datetime => "datetime",
            TypeTag::Other(tag) => tag.as_str(),
        };
        f.write_str(tag)
    }
}
