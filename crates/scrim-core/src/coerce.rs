//! Primitive coercion
//!
//! Object-like values convert to primitives through the well-known
//! `to_primitive` hook, looked up with an ordinary property read so
//! proxy handlers see the access like any other. Without a hook the
//! ordinary conversions apply: string conversion yields
//! `[object {tag}]` (the tag read from the well-known `to_string_tag`
//! property, defaulting to `Object`), numeric conversion yields NaN.

use crate::error::{RunResult, RuntimeError};
use crate::symbol::{well_known, PropKey};
use crate::value::Value;

/// The conversion a caller is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveHint {
    /// Numeric context
    Number,
    /// String context
    String,
    /// No preference
    Default,
}

impl PrimitiveHint {
    /// The wire string handed to hook functions
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Default => "default",
        }
    }

    /// Parse a hook argument back into a hint (unknown strings read as
    /// `Default`, matching hook fallthrough)
    pub fn from_value(v: Option<&Value>) -> Self {
        match v.and_then(Value::as_str) {
            Some("number") => Self::Number,
            Some("string") => Self::String,
            _ => Self::Default,
        }
    }
}

/// Convert a value to a primitive
///
/// Primitives pass through unchanged. Object-like values consult their
/// `to_primitive` hook; a present hook must be callable and must return
/// a primitive, both enforced with a `TypeError`.
pub fn to_primitive(v: &Value, hint: PrimitiveHint) -> RunResult<Value> {
    if !v.is_object_like() {
        return Ok(v.clone());
    }

    if let Some(hook) = v.get(&PropKey::Sym(well_known::to_primitive()))? {
        let Value::Function(f) = hook else {
            return Err(RuntimeError::type_error(format!(
                "to_primitive hook is a {}, not callable",
                hook.type_name()
            )));
        };
        let out = f.call(v, &[Value::str(hint.as_str())])?;
        if out.is_object_like() {
            return Err(RuntimeError::type_error(
                "to_primitive hook returned an object",
            ));
        }
        return Ok(out);
    }

    Ok(match hint {
        PrimitiveHint::String => {
            let tag = v.get(&PropKey::Sym(well_known::to_string_tag()))?;
            match tag {
                Some(Value::Str(s)) => Value::str(format!("[object {s}]")),
                _ => Value::str("[object Object]"),
            }
        }
        PrimitiveHint::Number | PrimitiveHint::Default => Value::number(f64::NAN),
    })
}

/// Convert a value to a display string
pub fn to_display_string(v: &Value) -> RunResult<String> {
    let prim = to_primitive(v, PrimitiveHint::String)?;
    Ok(match prim {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::Str(s) => s.to_string(),
        Value::Function(f) => format!("[function {}]", f.name()),
        // to_primitive never returns an object-like value
        other => format!("{other:?}"),
    })
}

/// Convert a value to a number
pub fn to_number(v: &Value) -> RunResult<f64> {
    let prim = to_primitive(v, PrimitiveHint::Number)?;
    Ok(match prim {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n,
        Value::Str(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        _ => f64::NAN,
    })
}

/// Host-style number formatting: integral values print without a
/// fractional part
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == n.trunc() && n.abs() < 9e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Function, Object};
    use crate::symbol::Symbol;

    #[test]
    fn test_primitives_pass_through() {
        assert_eq!(to_number(&Value::number(2.5)).unwrap(), 2.5);
        assert_eq!(to_number(&Value::bool(true)).unwrap(), 1.0);
        assert_eq!(to_number(&Value::null()).unwrap(), 0.0);
        assert_eq!(to_display_string(&Value::str("abc")).unwrap(), "abc");
        assert_eq!(to_display_string(&Value::number(3.0)).unwrap(), "3");
        assert_eq!(to_display_string(&Value::number(3.5)).unwrap(), "3.5");
    }

    #[test]
    fn test_string_to_number_parsing() {
        assert_eq!(to_number(&Value::str(" 42 ")).unwrap(), 42.0);
        assert_eq!(to_number(&Value::str("")).unwrap(), 0.0);
        assert!(to_number(&Value::str("nope")).unwrap().is_nan());
    }

    #[test]
    fn test_plain_object_fallbacks() {
        let obj = Value::object(Object::new());
        assert_eq!(to_display_string(&obj).unwrap(), "[object Object]");
        assert!(to_number(&obj).unwrap().is_nan());
    }

    #[test]
    fn test_string_tag_changes_display() {
        let obj = Object::new();
        obj.set_own(
            PropKey::Sym(well_known::to_string_tag()),
            Value::str("Widget"),
        );
        assert_eq!(
            to_display_string(&Value::object(obj)).unwrap(),
            "[object Widget]"
        );
    }

    #[test]
    fn test_hook_drives_conversion() {
        let obj = Object::new();
        obj.set_own(
            PropKey::Sym(well_known::to_primitive()),
            Value::Function(Function::named("toPrimitive", |_, args| {
                Ok(match PrimitiveHint::from_value(args.first()) {
                    PrimitiveHint::Number => Value::number(6.0),
                    PrimitiveHint::String => Value::str("six"),
                    PrimitiveHint::Default => Value::number(6.5),
                })
            })),
        );
        let v = Value::object(obj);
        assert_eq!(to_number(&v).unwrap(), 6.0);
        assert_eq!(to_display_string(&v).unwrap(), "six");
        assert_eq!(
            to_primitive(&v, PrimitiveHint::Default).unwrap().as_number(),
            Some(6.5)
        );
    }

    #[test]
    fn test_non_callable_hook_is_type_error() {
        let obj = Object::new();
        obj.set_own(PropKey::Sym(well_known::to_primitive()), Value::number(1.0));
        let err = to_number(&Value::object(obj)).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeError(_)));
    }

    #[test]
    fn test_hook_returning_object_is_type_error() {
        let obj = Object::new();
        obj.set_own(
            PropKey::Sym(well_known::to_primitive()),
            Value::Function(Function::named("bad", |_, _| {
                Ok(Value::object(Object::new()))
            })),
        );
        let err = to_display_string(&Value::object(obj)).unwrap_err();
        assert!(matches!(err, RuntimeError::TypeError(_)));
    }

    #[test]
    fn test_unrelated_symbol_is_not_a_hook() {
        let obj = Object::new();
        obj.set_own(
            PropKey::Sym(Symbol::new("scrim.toPrimitive")),
            Value::Function(Function::named("fake", |_, _| Ok(Value::number(9.0)))),
        );
        // Same description, different identity: the hook lookup misses.
        assert!(to_number(&Value::object(obj)).unwrap().is_nan());
    }
}
