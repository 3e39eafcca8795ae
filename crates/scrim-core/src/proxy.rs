//! Proxy objects
//!
//! A [`Proxy`] pairs a target value with an interception handler. The
//! substrate never consults the target directly once a value is wrapped;
//! every operation goes through the handler, which may answer itself or
//! fall through to ordinary semantics. Handler instances are stateless
//! and live exactly as long as the proxy they back.

use std::fmt;
use std::sync::Arc;

use crate::handler::TrapHandler;
use crate::value::Value;

/// An intercepted object: a target plus its handler
pub struct Proxy {
    target: Value,
    handler: Box<dyn TrapHandler>,
}

impl Proxy {
    /// Wrap `target` behind `handler`
    ///
    /// Returns the proxy as a [`Value`] so it can flow anywhere a plain
    /// object can, including as the target of another proxy.
    pub fn new(target: Value, handler: impl TrapHandler + 'static) -> Value {
        Value::Proxy(Arc::new(Self {
            target,
            handler: Box::new(handler),
        }))
    }

    /// The wrapped target
    pub fn target(&self) -> &Value {
        &self.target
    }

    /// The interception handler
    pub fn handler(&self) -> &dyn TrapHandler {
        self.handler.as_ref()
    }
}

impl fmt::Debug for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proxy({:?})", self.target)
    }
}
