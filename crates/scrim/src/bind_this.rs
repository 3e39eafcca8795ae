//! Method receiver rebinding

use scrim_core::{Function, PropKey, RunResult, TrapHandler, Value};

/// Rebinds method receivers to the raw target
///
/// A callable read through this layer comes back wrapped: invoked
/// through the proxy (receiver identical to the proxy), the call runs
/// with `this` bound to the raw target, so methods see the real object
/// instead of the interception shell. An explicit receiver supplied by
/// the caller is respected untouched. The wrapper keeps the original
/// display name. Non-callable reads pass through unchanged.
pub struct BindThis<H> {
    inner: H,
}

impl<H: TrapHandler> BindThis<H> {
    /// Wrap `inner` with receiver rebinding
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: TrapHandler> TrapHandler for BindThis<H> {
    fn get(&self, target: &Value, key: &PropKey, receiver: &Value) -> RunResult<Option<Value>> {
        match self.inner.get(target, key, receiver)? {
            Some(Value::Function(f)) => {
                let inner_fn = f.clone();
                let target = target.clone();
                let receiver = receiver.clone();
                let bound = Function::named(f.name(), move |this, args| {
                    if this.same_identity(&receiver) {
                        inner_fn.call(&target, args)
                    } else {
                        inner_fn.call(this, args)
                    }
                });
                Ok(Some(Value::Function(bound)))
            }
            other => Ok(other),
        }
    }
}
