//! Object model and class system
//!
//! Objects carry an own-property table and an optional [`Class`]. The
//! class is an explicit metadata carrier: name, constructor, and method
//! table all live here rather than being reflected out of the host, so
//! introspection (type tags, method lookup) reads plain data.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::RunResult;
use crate::symbol::PropKey;
use crate::value::Value;

/// Global counter for generating unique object IDs
static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a new unique object ID
fn generate_object_id() -> u64 {
    NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Signature of a callable body: explicit receiver plus arguments
pub type FunctionBody = dyn Fn(&Value, &[Value]) -> RunResult<Value> + Send + Sync;

/// A named callable
///
/// The display name travels with the function so wrappers can preserve
/// it; identity is the body pointer, so two wrappers around the same
/// body are still distinct callables.
#[derive(Clone)]
pub struct Function {
    name: Arc<str>,
    body: Arc<FunctionBody>,
}

impl Function {
    /// Create a callable with a display name
    pub fn named(
        name: &str,
        body: impl Fn(&Value, &[Value]) -> RunResult<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: Arc::from(name),
            body: Arc::new(body),
        }
    }

    /// The display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke with an explicit receiver
    pub fn call(&self, this: &Value, args: &[Value]) -> RunResult<Value> {
        (self.body)(this, args)
    }

    /// Identity comparison (same underlying body)
    pub fn same_identity(&self, other: &Function) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[function {}]", self.name)
    }
}

/// Class definition metadata
#[derive(Clone, Default)]
pub struct Class {
    name: Arc<str>,
    constructor: Option<Function>,
    methods: FxHashMap<Arc<str>, Function>,
}

impl Class {
    /// Create a new class
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            constructor: None,
            methods: FxHashMap::default(),
        }
    }

    /// Attach a constructor
    pub fn with_constructor(mut self, ctor: Function) -> Self {
        self.constructor = Some(ctor);
        self
    }

    /// Attach a method
    pub fn with_method(mut self, name: &str, method: Function) -> Self {
        self.methods.insert(Arc::from(name), method);
        self
    }

    /// Class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The constructor, if the class declares one
    pub fn constructor(&self) -> Option<&Function> {
        self.constructor.as_ref()
    }

    /// Look up a method by name
    pub fn method(&self, name: &str) -> Option<&Function> {
        self.methods.get(name)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[class {}]", self.name)
    }
}

/// Object instance (heap-allocated, shared)
pub struct Object {
    /// Unique object ID (assigned on creation)
    object_id: u64,
    /// The class this object was instantiated from, if any
    class: Option<Arc<Class>>,
    /// Own-property table
    props: RwLock<FxHashMap<PropKey, Value>>,
}

impl Object {
    /// Create a classless object
    pub fn new() -> Self {
        Self {
            object_id: generate_object_id(),
            class: None,
            props: RwLock::new(FxHashMap::default()),
        }
    }

    /// Create an instance of a class
    pub fn with_class(class: Arc<Class>) -> Self {
        Self {
            object_id: generate_object_id(),
            class: Some(class),
            props: RwLock::new(FxHashMap::default()),
        }
    }

    /// Unique object ID
    pub fn object_id(&self) -> u64 {
        self.object_id
    }

    /// The object's class, if any
    pub fn class(&self) -> Option<&Arc<Class>> {
        self.class.as_ref()
    }

    /// Read an own property
    pub fn get_own(&self, key: &PropKey) -> Option<Value> {
        self.props.read().get(key).cloned()
    }

    /// Write an own property
    pub fn set_own(&self, key: PropKey, value: Value) {
        self.props.write().insert(key, value);
    }

    /// Check for an own property
    pub fn has_own(&self, key: &PropKey) -> bool {
        self.props.read().contains_key(key)
    }

    /// Delete an own property, reporting whether it existed
    pub fn delete_own(&self, key: &PropKey) -> bool {
        self.props.write().remove(key).is_some()
    }

    /// Snapshot of the own-property keys
    pub fn own_keys(&self) -> Vec<PropKey> {
        self.props.read().keys().cloned().collect()
    }
}

impl Default for Object {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.class {
            Some(class) => write!(f, "[object {}]#{}", class.name(), self.object_id),
            None => write!(f, "[object]#{}", self.object_id),
        }
    }
}
