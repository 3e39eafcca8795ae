//! Property keys: strings and unforgeable symbols
//!
//! A [`Symbol`] is an identity-keyed property name. Two symbols compare
//! equal only if one is a clone of the other; `Symbol::new` always mints
//! a fresh identity and there is no constructor from raw ids, so a module
//! that keeps its symbol private holds a key nobody else can produce.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

/// Global counter for generating unique symbol identities
static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// An unforgeable property key
///
/// Equality and hashing use only the private identity, never the
/// description, so a symbol with a colliding description is still a
/// distinct key.
#[derive(Clone)]
pub struct Symbol {
    id: u64,
    desc: Arc<str>,
}

impl Symbol {
    /// Mint a symbol with a fresh identity
    pub fn new(desc: &str) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            desc: Arc::from(desc),
        }
    }

    /// The human-readable description (debugging only, not identity)
    pub fn description(&self) -> &str {
        &self.desc
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.desc)
    }
}

/// Well-known symbols shared by the whole process
///
/// These are the hooks the substrate itself consults: the
/// primitive-coercion hook and the type-tag hook.
pub mod well_known {
    use super::*;

    static TO_PRIMITIVE: Lazy<Symbol> = Lazy::new(|| Symbol::new("scrim.toPrimitive"));
    static TO_STRING_TAG: Lazy<Symbol> = Lazy::new(|| Symbol::new("scrim.toStringTag"));

    /// The primitive-coercion hook key, consulted by [`crate::coerce`]
    pub fn to_primitive() -> Symbol {
        TO_PRIMITIVE.clone()
    }

    /// The type-tag hook key, consulted by string conversion
    pub fn to_string_tag() -> Symbol {
        TO_STRING_TAG.clone()
    }
}

/// A property name: an interned-style string or a symbol
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum PropKey {
    /// String-named property
    Str(Arc<str>),
    /// Symbol-keyed property
    Sym(Symbol),
}

impl PropKey {
    /// String key
    pub fn str(name: &str) -> Self {
        Self::Str(Arc::from(name))
    }

    /// Symbol key
    pub fn sym(sym: Symbol) -> Self {
        Self::Sym(sym)
    }

    /// Array-style index key (stringified, like host index access)
    pub fn index(i: usize) -> Self {
        Self::Str(Arc::from(i.to_string().as_str()))
    }

    /// The string name, if this is a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Sym(_) => None,
        }
    }
}

impl From<&str> for PropKey {
    fn from(name: &str) -> Self {
        Self::str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_identity_is_unique() {
        let a = Symbol::new("marker");
        let b = Symbol::new("marker");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_symbol_description_not_identity() {
        let a = Symbol::new("x");
        assert_eq!(a.description(), "x");
        assert_ne!(a, Symbol::new("x"));
    }

    #[test]
    fn test_well_known_symbols_are_stable() {
        assert_eq!(well_known::to_primitive(), well_known::to_primitive());
        assert_eq!(well_known::to_string_tag(), well_known::to_string_tag());
        assert_ne!(well_known::to_primitive(), well_known::to_string_tag());
    }

    #[test]
    fn test_prop_key_equality() {
        assert_eq!(PropKey::str("a"), PropKey::from("a"));
        assert_ne!(PropKey::str("a"), PropKey::str("b"));
        assert_eq!(PropKey::index(3), PropKey::str("3"));

        let sym = Symbol::new("k");
        assert_eq!(PropKey::sym(sym.clone()), PropKey::sym(sym));
    }

    #[test]
    fn test_prop_key_as_str() {
        assert_eq!(PropKey::str("name").as_str(), Some("name"));
        assert_eq!(PropKey::sym(Symbol::new("s")).as_str(), None);
    }
}
