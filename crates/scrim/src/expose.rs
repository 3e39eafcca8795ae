//! Target exposure through a reserved key

use once_cell::sync::Lazy;
use scrim_core::{PropKey, RunResult, Symbol, TrapHandler, Value};

/// The reserved key. Private to this module: the symbol value is never
/// exported, so no caller can mint an equal key or observe it in any
/// enumeration.
static TARGET_KEY: Lazy<Symbol> = Lazy::new(|| Symbol::new("scrim.exposedTarget"));

fn reserved_key() -> PropKey {
    PropKey::Sym(TARGET_KEY.clone())
}

/// Answers the reserved key with the raw target
///
/// The check happens first, before any delegation, so no other layer
/// can shadow or observe it. Every other key, and every other trap,
/// is pure delegation; in particular existence checks and key
/// enumeration never reveal the reserved key.
///
/// [`get_target`] is the only way to perform the reserved read from
/// outside this module.
pub struct ExposeTarget<H> {
    inner: H,
}

impl<H: TrapHandler> ExposeTarget<H> {
    /// Wrap `inner` with target exposure
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: TrapHandler> TrapHandler for ExposeTarget<H> {
    fn get(&self, target: &Value, key: &PropKey, receiver: &Value) -> RunResult<Option<Value>> {
        if *key == reserved_key() {
            return Ok(Some(target.clone()));
        }
        self.inner.get(target, key, receiver)
    }
}

/// Unwrap a proxy back to the target it exposes
///
/// Performs an ordinary property read of the reserved key — the same
/// mechanism as any other access — and returns the target if the value
/// is a proxy whose handler stack includes [`ExposeTarget`]. Everything
/// else (plain objects, primitives, proxies without the layer) reports
/// absence. This query never faults; a foreign handler that errors
/// while serving the read counts as not participating.
pub fn get_target(value: &Value) -> Option<Value> {
    value.get(&reserved_key()).ok().flatten()
}

/// Unwrap nested exposing proxies to the innermost target
pub fn get_target_deep(value: &Value) -> Option<Value> {
    let mut current = get_target(value)?;
    while let Some(inner) = get_target(&current) {
        current = inner;
    }
    Some(current)
}
