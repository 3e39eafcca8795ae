//! Interception handler capability
//!
//! [`TrapHandler`] is the fixed vocabulary of operations a proxy routes
//! through its handler. Every method has a default body equal to the
//! ordinary semantics on the target, so a handler that customizes
//! nothing is indistinguishable from no handler at all, and a handler
//! that customizes one trap delegates the rest for free.
//!
//! The vocabulary is closed: [`TRAP_NAMES`] lists every operation, and
//! wrappers that rewrite the whole vocabulary (e.g. target mapping)
//! synthesize their forwarding from that fixed list rather than from
//! run-time reflection.

use std::sync::Arc;

use crate::error::RunResult;
use crate::object::Class;
use crate::reflect;
use crate::symbol::PropKey;
use crate::value::Value;

/// The fixed interception vocabulary, in trap order
pub const TRAP_NAMES: &[&str] = &["get", "set", "has", "delete", "own_keys", "class_of"];

/// Interception handler for a proxy
///
/// A `get` returning `Ok(None)` means "no value here" and resolves to
/// ordinary fallthrough; it is never an error. Errors raised by an inner
/// handler propagate through outer handlers unmodified.
pub trait TrapHandler: Send + Sync {
    /// Intercept a property read
    ///
    /// `receiver` is the proxy the access originated on and must be
    /// preserved when delegating.
    fn get(&self, target: &Value, key: &PropKey, receiver: &Value) -> RunResult<Option<Value>> {
        reflect::get(target, key, receiver)
    }

    /// Intercept a property write, reporting success
    fn set(&self, target: &Value, key: &PropKey, value: Value, receiver: &Value) -> RunResult<bool> {
        reflect::set(target, key, value, receiver)
    }

    /// Intercept an existence check
    fn has(&self, target: &Value, key: &PropKey) -> RunResult<bool> {
        reflect::has(target, key)
    }

    /// Intercept a property deletion, reporting whether it existed
    fn delete(&self, target: &Value, key: &PropKey) -> RunResult<bool> {
        reflect::delete(target, key)
    }

    /// Intercept own-key enumeration
    fn own_keys(&self, target: &Value) -> RunResult<Vec<PropKey>> {
        reflect::own_keys(target)
    }

    /// Intercept class introspection
    fn class_of(&self, target: &Value) -> RunResult<Option<Arc<Class>>> {
        reflect::class_of(target)
    }
}

/// The root handler: every trap is ordinary semantics
pub struct Transparent;

impl TrapHandler for Transparent {}

// Boxed handlers forward, so layer stacks can be assembled at run time
// from an ordered list as well as by nested construction.
impl TrapHandler for Box<dyn TrapHandler> {
    fn get(&self, target: &Value, key: &PropKey, receiver: &Value) -> RunResult<Option<Value>> {
        (**self).get(target, key, receiver)
    }

    fn set(&self, target: &Value, key: &PropKey, value: Value, receiver: &Value) -> RunResult<bool> {
        (**self).set(target, key, value, receiver)
    }

    fn has(&self, target: &Value, key: &PropKey) -> RunResult<bool> {
        (**self).has(target, key)
    }

    fn delete(&self, target: &Value, key: &PropKey) -> RunResult<bool> {
        (**self).delete(target, key)
    }

    fn own_keys(&self, target: &Value) -> RunResult<Vec<PropKey>> {
        (**self).own_keys(target)
    }

    fn class_of(&self, target: &Value) -> RunResult<Option<Arc<Class>>> {
        (**self).class_of(target)
    }
}
