//! Interned node keys.
//!
//! Graphs built from text name their nodes with strings. [`Id`] interns
//! those names once so that keys used in the content tree and in every
//! attribute table are `Copy`, cheap to hash, and cheap to compare.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner shared by all identifiers.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// String-interned node key.
///
/// # Examples
///
/// ```
/// use constellation_core::identifier::Id;
///
/// let alice = Id::new("Alice");
/// assert_eq!(alice, Id::new("Alice"));
/// assert_eq!(alice, "Alice");
/// assert_eq!(alice.to_string(), "Alice");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Runs `f` with the interned string, without allocating a copy.
    pub fn with_str<R>(self, f: impl FnOnce(&str) -> R) -> R {
        let interner = interner();
        let name = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        f(name)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Copy out first so the lock is not held while formatting.
        let name = self.with_str(str::to_owned);
        f.write_str(&name)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.with_str(|name| name == other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
