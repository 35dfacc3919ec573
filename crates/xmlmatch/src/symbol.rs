//! Interned symbolic identifiers
//!
//! Element names, attribute keys and symbolic atoms all share one process-wide
//! interner, so repeated names cost a single allocation and clone cheaply.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

static INTERNER: Lazy<SymbolInterner> = Lazy::new(SymbolInterner::new);

/// A symbolic identifier
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Intern `name` and return its canonical symbol
    ///
    /// Interned names are never evicted: every distinct name stays allocated
    /// for the life of the process.
    pub fn new(name: &str) -> Self {
        INTERNER.intern(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl From<&String> for Symbol {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<&Self> for Symbol {
    fn from(symbol: &Self) -> Self {
        symbol.clone()
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

struct SymbolInterner {
    strings: RwLock<HashMap<Box<str>, Arc<str>>>,
}

impl SymbolInterner {
    fn new() -> Self {
        Self {
            strings: RwLock::new(HashMap::new()),
        }
    }

    fn intern(&self, s: &str) -> Symbol {
        if let Some(interned) = self.strings.read().get(s) {
            return Symbol(Arc::clone(interned));
        }

        let mut write_guard = self.strings.write();
        let interned = write_guard
            .entry(Box::from(s))
            .or_insert_with(|| Arc::from(s))
            .clone();

        Symbol(interned)
    }
}
