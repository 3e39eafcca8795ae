//! Default type tag from class metadata

use scrim_core::{reflect, well_known, PropKey, RunResult, TrapHandler, Value};

/// Supplies a type tag when the chain has none
///
/// Delegates every read first. Only a miss for the well-known
/// `to_string_tag` key is answered, computed from the target's class:
/// the constructor's display name when the class declares one, a miss
/// otherwise. String conversion of the proxy then reports
/// `[object {ConstructorName}]` instead of the anonymous default.
pub struct DefaultTypeTag<H> {
    inner: H,
}

impl<H: TrapHandler> DefaultTypeTag<H> {
    /// Wrap `inner` with the default type tag
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: TrapHandler> TrapHandler for DefaultTypeTag<H> {
    fn get(&self, target: &Value, key: &PropKey, receiver: &Value) -> RunResult<Option<Value>> {
        let found = self.inner.get(target, key, receiver)?;
        if found.is_some() || *key != PropKey::Sym(well_known::to_string_tag()) {
            return Ok(found);
        }

        let tag = reflect::class_of(target)?
            .and_then(|class| class.constructor().map(|ctor| Value::str(ctor.name())));
        Ok(tag)
    }
}
