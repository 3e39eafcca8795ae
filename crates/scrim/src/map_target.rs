//! Target-mapping indirection

use std::sync::Arc;

use scrim_core::{Class, PropKey, RunResult, TrapHandler, Value};

/// Routes every operation through a derived target
///
/// Each operation in the interception vocabulary passes
/// `mapper(target)` down to the inner handler in place of the target;
/// every other argument is untouched. The forwarding below is
/// synthesized from the vocabulary once, so adding a trap to the
/// vocabulary extends this layer without consumer changes.
///
/// The mapper runs once per intercepted operation — repeated accesses
/// re-derive the target every time, and construction derives nothing.
/// That is the contract, not an oversight: a caller whose mapper is
/// expensive memoizes inside the mapper.
pub struct MapTarget<H, F> {
    inner: H,
    mapper: F,
}

impl<H, F> MapTarget<H, F>
where
    H: TrapHandler,
    F: Fn(&Value) -> Value + Send + Sync,
{
    /// Wrap `inner`, deriving the target with `mapper` on every operation
    pub fn new(inner: H, mapper: F) -> Self {
        Self { inner, mapper }
    }
}

/// Synthesizes the forwarding for one vocabulary entry: derive the
/// target, pass everything else through.
macro_rules! map_traps {
    ($($name:ident($($arg:ident: $ty:ty),*) -> $ret:ty;)*) => {
        $(
            fn $name(&self, target: &Value $(, $arg: $ty)*) -> RunResult<$ret> {
                let mapped = (self.mapper)(target);
                self.inner.$name(&mapped $(, $arg)*)
            }
        )*
    };
}

impl<H, F> TrapHandler for MapTarget<H, F>
where
    H: TrapHandler,
    F: Fn(&Value) -> Value + Send + Sync,
{
    map_traps! {
        get(key: &PropKey, receiver: &Value) -> Option<Value>;
        set(key: &PropKey, value: Value, receiver: &Value) -> bool;
        has(key: &PropKey) -> bool;
        delete(key: &PropKey) -> bool;
        own_keys() -> Vec<PropKey>;
        class_of() -> Option<Arc<Class>>;
    }
}
