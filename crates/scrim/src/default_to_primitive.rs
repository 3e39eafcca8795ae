//! Default primitive-coercion hook

use scrim_core::{
    coerce, well_known, Function, PrimitiveHint, PropKey, RunResult, TrapHandler, Value,
};

/// Supplies a primitive-coercion hook when the chain has none
///
/// Delegates every read first. Only a miss for the well-known
/// `to_primitive` key is answered, with a hook that converts the raw
/// target: hint `"string"` is the target's string conversion, `"number"`
/// its numeric conversion, `"default"` its generic conversion. A hook
/// provided by an inner layer (or by the target itself) always wins.
pub struct DefaultToPrimitive<H> {
    inner: H,
}

impl<H: TrapHandler> DefaultToPrimitive<H> {
    /// Wrap `inner` with the default coercion hook
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: TrapHandler> TrapHandler for DefaultToPrimitive<H> {
    fn get(&self, target: &Value, key: &PropKey, receiver: &Value) -> RunResult<Option<Value>> {
        let found = self.inner.get(target, key, receiver)?;
        if found.is_some() || *key != PropKey::Sym(well_known::to_primitive()) {
            return Ok(found);
        }

        let target = target.clone();
        let hook = Function::named("toPrimitive", move |_this, args| {
            match PrimitiveHint::from_value(args.first()) {
                PrimitiveHint::String => Ok(Value::str(coerce::to_display_string(&target)?)),
                PrimitiveHint::Number => Ok(Value::number(coerce::to_number(&target)?)),
                PrimitiveHint::Default => coerce::to_primitive(&target, PrimitiveHint::Default),
            }
        });
        Ok(Some(Value::Function(hook)))
    }
}
