use serde::Serialize;

/// A single literal taken from a rule's value.
///
/// Integers and floats stay distinct from text because `double` fields render
/// them differently: a JSON number goes through float formatting, a string is
/// only rewritten from a decimal comma to a decimal point.
///
/// # Examples
///
/// ```
/// use rulesql::Scalar;
///
/// assert_eq!(Scalar::Integer(-5).to_text(), "-5");
/// assert_eq!(Scalar::Float(42.0).to_text(), "42");
/// assert_eq!(Scalar::Float(42.55).to_text(), "42.55");
/// assert_eq!(Scalar::Text("42,50".into()).to_text(), "42,50");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
}

impl Scalar {
    /// Literal text of the value with no type-directed rewriting
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Text(s) => s.clone(),
            Scalar::Boolean(b) => (if *b { "1" } else { "0" }).to_string(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Float(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Boolean(b)
    }
}

/// The value side of a rule, shaped by its operator's arity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleValue {
    /// Nullary operators
    None,
    Scalar(Scalar),
    List(Vec<Scalar>),
    Pair(Scalar, Scalar),
}

impl RuleValue {
    /// Short description used in arity errors
    pub fn shape(&self) -> String {
        match self {
            RuleValue::None => "no value".to_string(),
            RuleValue::Scalar(_) => "a single value".to_string(),
            RuleValue::List(items) => format!("a list of {} value(s)", items.len()),
            RuleValue::Pair(..) => "a pair of values".to_string(),
        }
    }
}
