//! Loosely-typed values assigned to recognizer attributes
//!
//! Attribute setters accept whatever the caller hands them and coerce it the
//! way a browser does. The setter hands the raw value back; the getter
//! returns the coerced one.

use std::fmt;

/// Upper bound on `maxAlternatives`. Padded alternatives grow with their
/// rank, so larger counts are clamped to this.
pub const MAX_ALTERNATIVES: usize = 1000;

/// A value assigned to a recognizer attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AttributeValue {
    /// Boolean conversion
    pub fn is_truthy(&self) -> bool {
        match self {
            AttributeValue::Undefined | AttributeValue::Null => false,
            AttributeValue::Bool(b) => *b,
            AttributeValue::Number(n) => *n != 0.0 && !n.is_nan(),
            AttributeValue::Text(s) => !s.is_empty(),
        }
    }

    /// Coercion used by `maxAlternatives`: numbers are floored and clamped to
    /// [`MAX_ALTERNATIVES`], everything else becomes 0. Negative and
    /// non-finite numbers also become 0.
    pub fn to_count(&self) -> usize {
        match self {
            AttributeValue::Number(n) if n.is_finite() && *n >= 0.0 => {
                n.floor().min(MAX_ALTERNATIVES as f64) as usize
            }
            _ => 0,
        }
    }

    /// Coercion used by `lang`
    pub fn to_lang(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Undefined => f.write_str("undefined"),
            AttributeValue::Null => f.write_str("null"),
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Number(n) if n.is_nan() => f.write_str("NaN"),
            AttributeValue::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            AttributeValue::Number(n) => write_number(f, *n),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

/// Finite numbers in browser notation: plain decimals for magnitudes in
/// [1e-6, 1e21), exponent form with an explicit sign otherwise.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n == 0.0 {
        return f.write_str("0");
    }
    if (1e-6..1e21).contains(&n.abs()) {
        return write!(f, "{}", n);
    }

    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&formatted),
    }
}

macro_rules! attribute_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    AttributeValue::Number(value as f64)
                }
            }
        )*
    };
}

attribute_from_number!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64, f32, f64);

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<()> for AttributeValue {
    fn from(_: ()) -> Self {
        AttributeValue::Undefined
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Null, Into::into)
    }
}
