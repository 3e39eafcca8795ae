//! Composable behavior layers for proxy interception handlers
//!
//! Each layer here wraps an existing [`TrapHandler`] and returns a new
//! one, adding a single cross-cutting behavior while delegating
//! everything else to what it wraps:
//!
//! - [`BindThis`] — methods read through the proxy run with `this`
//!   bound to the raw target
//! - [`DefaultToPrimitive`] — supplies a primitive-coercion hook when
//!   the chain has none
//! - [`DefaultTypeTag`] — supplies a type tag from the target's class
//!   when the chain has none
//! - [`ExposeTarget`] — answers a reserved, unforgeable key with the
//!   raw target; [`get_target`] is the paired query
//! - [`MapTarget`] — derives a fresh target for every operation via a
//!   caller-supplied mapper
//!
//! Layers compose in any order and any subset, by nesting constructors
//! or with the [`TrapHandlerExt`] chaining methods; the outermost layer
//! is consulted first. No layer requires another, no layer catches an
//! inner layer's errors, and absence is always reported as a miss,
//! never a fault.
//!
//! ```rust,ignore
//! use scrim::{get_target, Proxy, Transparent, TrapHandlerExt, Value};
//!
//! let proxy = Proxy::new(
//!     target,
//!     Transparent
//!         .default_to_primitive()
//!         .default_type_tag()
//!         .bind_this()
//!         .expose_target(),
//! );
//! assert!(get_target(&proxy).is_some());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod bind_this;
mod default_to_primitive;
mod default_type_tag;
mod expose;
mod ext;
mod map_target;

pub use bind_this::BindThis;
pub use default_to_primitive::DefaultToPrimitive;
pub use default_type_tag::DefaultTypeTag;
pub use expose::{get_target, get_target_deep, ExposeTarget};
pub use ext::TrapHandlerExt;
pub use map_target::MapTarget;

// The substrate surface consumers need to build targets and proxies.
pub use scrim_core::{
    coerce, well_known, Class, Function, Object, PrimitiveHint, PropKey, Proxy, RunResult,
    RuntimeError, Symbol, Transparent, TrapHandler, Value, TRAP_NAMES,
};
