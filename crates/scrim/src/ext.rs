//! Fluent layer composition

use scrim_core::{TrapHandler, Value};

use crate::{BindThis, DefaultToPrimitive, DefaultTypeTag, ExposeTarget, MapTarget};

/// Chaining constructors for the layer wrappers
///
/// Layers compose in any order and any subset; each call wraps the
/// handler built so far, so the last call in a chain is the outermost
/// layer and the first one consulted at run time:
///
/// ```rust,ignore
/// let handler = Transparent
///     .default_type_tag()
///     .bind_this()
///     .expose_target();   // outermost
/// let proxy = Proxy::new(target, handler);
/// ```
pub trait TrapHandlerExt: TrapHandler + Sized {
    /// Wrap with method receiver rebinding
    fn bind_this(self) -> BindThis<Self> {
        BindThis::new(self)
    }

    /// Wrap with the default primitive-coercion hook
    fn default_to_primitive(self) -> DefaultToPrimitive<Self> {
        DefaultToPrimitive::new(self)
    }

    /// Wrap with the default type tag
    fn default_type_tag(self) -> DefaultTypeTag<Self> {
        DefaultTypeTag::new(self)
    }

    /// Wrap with target exposure
    fn expose_target(self) -> ExposeTarget<Self> {
        ExposeTarget::new(self)
    }

    /// Wrap with target-mapping indirection
    fn map_target<F>(self, mapper: F) -> MapTarget<Self, F>
    where
        F: Fn(&Value) -> Value + Send + Sync,
    {
        MapTarget::new(self, mapper)
    }
}

impl<H: TrapHandler + Sized> TrapHandlerExt for H {}
