//! Scrim object substrate
//!
//! This crate provides the host-capability layer the `scrim` handler
//! layers are written against:
//! - **Values**: dynamic, cheaply clonable runtime values (`value`)
//! - **Objects**: property tables, classes, named callables (`object`)
//! - **Keys**: string and unforgeable symbol property keys (`symbol`)
//! - **Interception**: the `TrapHandler` vocabulary and `Proxy` routing
//!   (`handler`, `proxy`, `reflect`)
//! - **Coercion**: hook-driven primitive conversion (`coerce`)
//!
//! # Example
//!
//! ```rust,ignore
//! use scrim_core::{Object, PropKey, Proxy, Transparent, Value};
//!
//! let obj = Object::new();
//! obj.set_own(PropKey::str("x"), Value::number(1.0));
//!
//! let proxy = Proxy::new(Value::object(obj), Transparent);
//! let x = proxy.get(&PropKey::str("x"))?;
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod coerce;
pub mod error;
pub mod handler;
pub mod object;
pub mod proxy;
pub mod reflect;
pub mod symbol;
pub mod value;

pub use coerce::{to_display_string, to_number, to_primitive, PrimitiveHint};
pub use error::{RunResult, RuntimeError};
pub use handler::{Transparent, TrapHandler, TRAP_NAMES};
pub use object::{Class, Function, Object};
pub use proxy::Proxy;
pub use symbol::{well_known, PropKey, Symbol};
pub use value::Value;
