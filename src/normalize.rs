//! Type-directed rendering of rule values.
//!
//! | Declared type | JSON number            | JSON string               |
//! |---------------|------------------------|---------------------------|
//! | `double`      | float formatting       | `,` replaced by `.`       |
//! | anything else | float/integer text     | verbatim                  |
//!
//! Float formatting drops a zero fraction (`42.00` → `42`, `42.50` → `42.5`),
//! while a decimal-comma string keeps its digits (`"42,50"` → `42.50`). A
//! numeric string without a comma (`"42.50"`) is not reformatted at all.

use crate::ast::TypeTag;
use crate::value::Scalar;

/// Render one scalar for insertion into a SQL literal.
///
/// Normalizing an already normalized value returns it unchanged.
///
/// # Examples
///
/// ```
/// use rulesql::ast::TypeTag;
/// use rulesql::normalize::normalize;
/// use rulesql::Scalar;
///
/// assert_eq!(normalize(&Scalar::Float(42.50), &TypeTag::Double), "42.5");
/// assert_eq!(normalize(&Scalar::from("42,50"), &TypeTag::Double), "42.50");
/// assert_eq!(normalize(&Scalar::from("42,5"), &TypeTag::String), "42,5");
/// ```
pub fn normalize(scalar: &Scalar, type_tag: &TypeTag) -> String {
    match (type_tag, scalar) {
        (TypeTag::Double, Scalar::Text(text)) => text.replace(',', "."),
        _ => scalar.to_text(),
    }
}
