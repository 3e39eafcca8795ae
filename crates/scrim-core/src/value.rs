//! Dynamic value representation
//!
//! A [`Value`] is the unit everything in the substrate moves around:
//! property reads return them, traps receive them, coercion produces
//! them. Heap payloads (`Str`, `Object`, `Proxy`) are behind `Arc`, so a
//! clone is a reference bump and identity comparison is pointer
//! comparison.

use std::fmt;
use std::sync::Arc;

use crate::object::{Function, Object};
use crate::proxy::Proxy;

/// A dynamic runtime value
#[derive(Clone)]
pub enum Value {
    /// The null value (a present value, distinct from an absent property)
    Null,
    /// Boolean
    Bool(bool),
    /// Double-precision number
    Number(f64),
    /// Immutable string
    Str(Arc<str>),
    /// Named callable
    Function(Function),
    /// Plain object
    Object(Arc<Object>),
    /// Intercepted object
    Proxy(Arc<Proxy>),
}

impl Value {
    /// The null value
    pub fn null() -> Self {
        Self::Null
    }

    /// Boolean value
    pub fn bool(b: bool) -> Self {
        Self::Bool(b)
    }

    /// Numeric value
    pub fn number(n: f64) -> Self {
        Self::Number(n)
    }

    /// String value
    pub fn str(s: impl AsRef<str>) -> Self {
        Self::Str(Arc::from(s.as_ref()))
    }

    /// Object value
    pub fn object(obj: Object) -> Self {
        Self::Object(Arc::new(obj))
    }

    /// Check for null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check for a callable value
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Check for a value that participates in property interception
    /// (a plain object or a proxy)
    pub fn is_object_like(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Proxy(_))
    }

    /// Extract a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extract a callable
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Extract a plain object
    pub fn as_object(&self) -> Option<&Arc<Object>> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Extract a proxy
    pub fn as_proxy(&self) -> Option<&Arc<Proxy>> {
        match self {
            Self::Proxy(p) => Some(p),
            _ => None,
        }
    }

    /// Identity comparison
    ///
    /// Heap values compare by pointer, numbers by bit pattern (so NaN is
    /// identical to itself), strings by content. This is the comparison
    /// receivers are matched with during method rebinding.
    pub fn same_identity(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a.same_identity(b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Proxy(a), Self::Proxy(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Function(_) => "function",
            Self::Object(_) => "object",
            Self::Proxy(_) => "proxy",
        }
    }
}

// Manual Debug keeps lock state out of object formatting.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Function(func) => write!(f, "{func:?}"),
            Self::Object(o) => write!(f, "{o:?}"),
            Self::Proxy(p) => write!(f, "{p:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_identity_primitives() {
        assert!(Value::null().same_identity(&Value::null()));
        assert!(Value::bool(true).same_identity(&Value::bool(true)));
        assert!(!Value::bool(true).same_identity(&Value::bool(false)));
        assert!(Value::number(1.5).same_identity(&Value::number(1.5)));
        assert!(Value::number(f64::NAN).same_identity(&Value::number(f64::NAN)));
        assert!(Value::str("a").same_identity(&Value::str("a")));
        assert!(!Value::str("a").same_identity(&Value::str("b")));
    }

    #[test]
    fn test_same_identity_objects_by_pointer() {
        let a = Value::object(Object::new());
        let b = Value::object(Object::new());
        assert!(a.same_identity(&a.clone()));
        assert!(!a.same_identity(&b));
    }

    #[test]
    fn test_same_identity_across_kinds() {
        assert!(!Value::number(0.0).same_identity(&Value::bool(false)));
        assert!(!Value::null().same_identity(&Value::number(0.0)));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::null().type_name(), "null");
        assert_eq!(Value::number(1.0).type_name(), "number");
        assert_eq!(Value::object(Object::new()).type_name(), "object");
    }
}
