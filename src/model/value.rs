use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A box output or resolved input: every value on the canvas is either a
/// boolean or a number.
///
/// Serialized as a plain JSON bool or number. Non-finite numbers have no JSON
/// form and are written as the strings `"Infinity"`, `"-Infinity"` and `"NaN"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(f64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Number(_) => serializer.collect_str(self),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawValue::deserialize(deserializer)? {
            RawValue::Bool(b) => Ok(Value::Bool(b)),
            RawValue::Number(n) => Ok(Value::Number(n)),
            RawValue::Text(text) => match text.as_str() {
                "Infinity" => Ok(Value::Number(f64::INFINITY)),
                "-Infinity" => Ok(Value::Number(f64::NEG_INFINITY)),
                "NaN" => Ok(Value::Number(f64::NAN)),
                other => Err(D::Error::custom(format!("'{}' is not a value", other))),
            },
        }
    }
}

// Manual implementation to handle f64
impl Eq for Value {}

// Manual implementation to handle f64 by hashing its bits
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Value::Number(n) => n.to_bits().hash(state),
            Value::Bool(b) => b.hash(state),
        }
    }
}

impl Value {
    /// Numeric view of the value. Booleans coerce to `1` and `0`.
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(true) => 1.0,
            Value::Bool(false) => 0.0,
        }
    }

    /// Boolean view of the value. Numbers are true unless zero or NaN.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }

    /// Bitwise equality, so that a `NaN` output counts as unchanged between passes.
    pub fn same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) if n.is_nan() => write!(f, "NaN"),
            Value::Number(n) if n.is_infinite() => {
                if n.is_sign_positive() {
                    write!(f, "Infinity")
                } else {
                    write!(f, "-Infinity")
                }
            }
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}
