//! Payloads for heterogeneous chains.
//!
//! A [`Cascade`](crate::Cascade) is generic over its payload. When a chain is
//! used as an execution tape holding mixed data, [`Value`] provides a tagged
//! payload with an explicit [`Value::Empty`] state, and [`Condition`] tells the
//! conditional jumps which payloads count as booleans.

use std::fmt;

/// A dynamically typed payload.
///
/// `Empty` is the "no value" sentinel. It is distinct from every user value,
/// including `Bool(false)`, `Int(0)` and the empty string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` if this is the `Empty` sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Empty
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => f.write_str("<empty>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Value::Empty, Into::into)
    }
}

/// Payloads that may be exactly a boolean.
///
/// The conditional jumps only fire on `Some(true)` / `Some(false)`. Anything
/// merely "truthy" (a non-zero integer, a non-empty string) answers `None`.
pub trait Condition {
    fn truth(&self) -> Option<bool>;
}

impl Condition for bool {
    fn truth(&self) -> Option<bool> {
        Some(*self)
    }
}

impl<C: Condition> Condition for Option<C> {
    fn truth(&self) -> Option<bool> {
        self.as_ref().and_then(Condition::truth)
    }
}

impl Condition for Value {
    fn truth(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Condition, Value};

    #[test]
    fn value_empty_is_distinct() {
        assert!(Value::default().is_empty());
        assert_ne!(Value::Empty, Value::Bool(false));
        assert_ne!(Value::Empty, Value::Int(0));
        assert_ne!(Value::Empty, Value::from(""));
        assert_eq!(Value::from(None::<i64>), Value::Empty);
        assert_eq!(Value::from(Some(3)), Value::Int(3));
    }

    #[test]
    fn value_truth_is_exact() {
        assert_eq!(Value::Bool(true).truth(), Some(true));
        assert_eq!(Value::Bool(false).truth(), Some(false));
        assert_eq!(Value::Int(1).truth(), None);
        assert_eq!(Value::from("true").truth(), None);
        assert_eq!(Value::Empty.truth(), None);
        assert_eq!(Some(true).truth(), Some(true));
        assert_eq!(None::<bool>.truth(), None);
    }

    #[test]
    fn value_display() {
        let list = Value::from(vec![Value::Int(1), Value::from("two"), Value::Empty]);
        assert_eq!(list.to_string(), "[1, two, <empty>]");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
    }
}
