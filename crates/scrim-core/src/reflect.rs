//! Ordinary operation semantics and value-level dispatch
//!
//! The free functions here are the host's default behavior for each
//! operation in the interception vocabulary: what happens when no
//! handler customizes anything. The default bodies of
//! [`TrapHandler`](crate::handler::TrapHandler) call straight into them,
//! and the `Value` methods below are the public entry points that route
//! proxies through their handler chain.
//!
//! Dispatch rules:
//! - proxies route to their handler, passing the proxy itself as the
//!   receiver;
//! - plain objects use own-property lookup, then class-method lookup;
//! - primitives read as misses and refuse writes.

use std::sync::Arc;

use crate::error::{RunResult, RuntimeError};
use crate::object::Class;
use crate::symbol::PropKey;
use crate::value::Value;

/// Ordinary property read
///
/// `receiver` is forwarded untouched when the target is itself a proxy,
/// so nested handler chains observe the original access point.
pub fn get(target: &Value, key: &PropKey, receiver: &Value) -> RunResult<Option<Value>> {
    match target {
        Value::Object(obj) => {
            if let Some(found) = obj.get_own(key) {
                return Ok(Some(found));
            }
            let method = obj
                .class()
                .zip(key.as_str())
                .and_then(|(class, name)| class.method(name).cloned());
            Ok(method.map(Value::Function))
        }
        Value::Proxy(p) => p.handler().get(p.target(), key, receiver),
        _ => Ok(None),
    }
}

/// Ordinary property write, reporting success
pub fn set(target: &Value, key: &PropKey, value: Value, receiver: &Value) -> RunResult<bool> {
    match target {
        Value::Object(obj) => {
            obj.set_own(key.clone(), value);
            Ok(true)
        }
        Value::Proxy(p) => p.handler().set(p.target(), key, value, receiver),
        _ => Err(RuntimeError::type_error(format!(
            "cannot set property on a {}",
            target.type_name()
        ))),
    }
}

/// Ordinary existence check (own properties and class methods)
pub fn has(target: &Value, key: &PropKey) -> RunResult<bool> {
    match target {
        Value::Object(obj) => {
            if obj.has_own(key) {
                return Ok(true);
            }
            let in_class = obj
                .class()
                .zip(key.as_str())
                .is_some_and(|(class, name)| class.method(name).is_some());
            Ok(in_class)
        }
        Value::Proxy(p) => p.handler().has(p.target(), key),
        _ => Ok(false),
    }
}

/// Ordinary deletion, reporting whether the property existed
pub fn delete(target: &Value, key: &PropKey) -> RunResult<bool> {
    match target {
        Value::Object(obj) => Ok(obj.delete_own(key)),
        Value::Proxy(p) => p.handler().delete(p.target(), key),
        _ => Ok(false),
    }
}

/// Ordinary own-key enumeration (own properties only, not methods)
pub fn own_keys(target: &Value) -> RunResult<Vec<PropKey>> {
    match target {
        Value::Object(obj) => Ok(obj.own_keys()),
        Value::Proxy(p) => p.handler().own_keys(p.target()),
        _ => Ok(Vec::new()),
    }
}

/// Ordinary class introspection
pub fn class_of(target: &Value) -> RunResult<Option<Arc<Class>>> {
    match target {
        Value::Object(obj) => Ok(obj.class().cloned()),
        Value::Proxy(p) => p.handler().class_of(p.target()),
        _ => Ok(None),
    }
}

impl Value {
    /// Read a property (through the handler chain for proxies)
    pub fn get(&self, key: &PropKey) -> RunResult<Option<Value>> {
        get(self, key, self)
    }

    /// Write a property, reporting success
    pub fn set(&self, key: &PropKey, value: Value) -> RunResult<bool> {
        set(self, key, value, self)
    }

    /// Check property existence
    pub fn has(&self, key: &PropKey) -> RunResult<bool> {
        has(self, key)
    }

    /// Delete a property, reporting whether it existed
    pub fn delete(&self, key: &PropKey) -> RunResult<bool> {
        delete(self, key)
    }

    /// Enumerate own property keys
    pub fn own_keys(&self) -> RunResult<Vec<PropKey>> {
        own_keys(self)
    }

    /// The class backing this value, if any
    pub fn class_of(&self) -> RunResult<Option<Arc<Class>>> {
        class_of(self)
    }

    /// Read a property and call it as a method, with this value as the
    /// unqualified receiver
    pub fn invoke(&self, key: &PropKey, args: &[Value]) -> RunResult<Value> {
        match self.get(key)? {
            Some(Value::Function(f)) => f.call(self, args),
            Some(other) => Err(RuntimeError::type_error(format!(
                "property {key:?} is a {}, not callable",
                other.type_name()
            ))),
            None => Err(RuntimeError::type_error(format!(
                "no such method {key:?}"
            ))),
        }
    }
}
