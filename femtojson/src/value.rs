// SPDX-License-Identifier: Apache-2.0

/// The type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
}

/// A decoded JSON scalar.
///
/// A freshly created value, and any value a failed parse wrote into, is
/// [`Value::Null`]. Values own no heap data and are freely copyable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// The `null` literal.
    #[default]
    Null,
    /// The `false` literal.
    False,
    /// The `true` literal.
    True,
    /// A JSON number converted to the nearest `f64`.
    Number(f64),
}

impl Value {
    /// Returns the type tag. Defined for every value, including after a failed parse.
    pub fn get_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::False => ValueType::False,
            Value::True => ValueType::True,
            Value::Number(_) => ValueType::Number,
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    /// Panics if the value is not a [`Value::Number`]. Check [`get_type`] first,
    /// or use [`as_number`] for a non-panicking query.
    ///
    /// [`get_type`]: Self::get_type
    /// [`as_number`]: Self::as_number
    pub fn get_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("get_number called on a {:?} value", other.get_type()),
        }
    }

    /// Get the numeric payload, or `None` for the literals.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get `true`/`false` as a `bool`, or `None` for null and numbers.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    /// Check if this is the `null` literal.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::False => f.write_str("false"),
            Value::True => f.write_str("true"),
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        let v = Value::default();
        assert_eq!(v.get_type(), ValueType::Null);
        assert!(v.is_null());
    }

    #[test]
    fn test_type_query() {
        assert_eq!(Value::False.get_type(), ValueType::False);
        assert_eq!(Value::True.get_type(), ValueType::True);
        assert_eq!(Value::Number(1.5).get_type(), ValueType::Number);
    }

    #[test]
    fn test_number_query() {
        assert_eq!(Value::Number(-2.25).get_number(), -2.25);
        assert_eq!(Value::Number(3.0).as_number(), Some(3.0));
        assert_eq!(Value::True.as_number(), None);
    }

    #[test]
    #[should_panic(expected = "get_number called on a True value")]
    fn test_number_query_on_non_number_panics() {
        Value::True.get_number();
    }

    #[test]
    fn test_bool_conversions() {
        assert_eq!(Value::from(true), Value::True);
        assert_eq!(Value::from(false), Value::False);
        assert_eq!(Value::True.as_bool(), Some(true));
        assert_eq!(Value::False.as_bool(), Some(false));
        assert_eq!(Value::Null.as_bool(), None);
        assert_eq!(Value::Number(0.0).as_bool(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::True.to_string(), "true");
        assert_eq!(Value::False.to_string(), "false");
        assert_eq!(Value::from(100000.0).to_string(), "100000");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
    }
}
