//! Deferred materialization of annotation content.
//!
//! Traversal only records what has to be drawn. Measuring text or views is
//! left to whoever consumes the finished [`RenderingContext`], through
//! [`PendingValue`] entries that are resolved on demand.
//!
//! [`RenderingContext`]: crate::RenderingContext

use indexmap::IndexMap;
use log::debug;

use constellation_core::draw::{MeasuredText, TextMeasurer};

/// A value that is either awaiting materialization or already materialized.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingValue<P, R> {
    Pending(P),
    Resolved(R),
}

impl<P, R> PendingValue<P, R> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn pending(&self) -> Option<&P> {
        match self {
            Self::Pending(pending) => Some(pending),
            Self::Resolved(_) => None,
        }
    }

    pub fn resolved(&self) -> Option<&R> {
        match self {
            Self::Pending(_) => None,
            Self::Resolved(resolved) => Some(resolved),
        }
    }

    /// Resolves the value with `materialize` and returns the result.
    ///
    /// Idempotent: once resolved, later calls return the stored value and
    /// never invoke `materialize` again.
    ///
    /// # Examples
    ///
    /// ```
    /// # use constellation::PendingValue;
    /// let mut value: PendingValue<&str, usize> = PendingValue::Pending("four");
    /// assert_eq!(*value.resolve(|text| text.len()), 4);
    /// assert_eq!(*value.resolve(|_| unreachable!()), 4);
    /// ```
    pub fn resolve(&mut self, materialize: impl FnOnce(&P) -> R) -> &R {
        if let Self::Pending(pending) = self {
            let resolved = materialize(pending);
            *self = Self::Resolved(resolved);
        }
        match self {
            Self::Resolved(resolved) => resolved,
            Self::Pending(_) => unreachable!("pending value was resolved above"),
        }
    }
}

/// Deduplicating table of annotation text keyed by the text content.
///
/// Two entities annotated with the same string share one entry, so each
/// distinct string is measured at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    entries: IndexMap<String, PendingValue<String, MeasuredText>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `text` as pending unless an entry for it already exists.
    ///
    /// Returns `true` when a new entry was created.
    pub fn register(&mut self, text: &str) -> bool {
        if self.entries.contains_key(text) {
            return false;
        }
        self.entries
            .insert(text.to_string(), PendingValue::Pending(text.to_string()));
        true
    }

    pub fn get(&self, text: &str) -> Option<&PendingValue<String, MeasuredText>> {
        self.entries.get(text)
    }

    /// Returns the measured text, if `text` has been resolved.
    pub fn measured(&self, text: &str) -> Option<&MeasuredText> {
        self.get(text).and_then(PendingValue::resolved)
    }

    /// Measures every pending entry with `measurer`.
    ///
    /// Already resolved entries are left untouched. Returns the number of
    /// entries resolved by this call.
    pub fn resolve_all(&mut self, measurer: &dyn TextMeasurer) -> usize {
        let mut resolved = 0;
        for value in self.entries.values_mut() {
            if value.is_pending() {
                value.resolve(|text| MeasuredText::measure(text, measurer));
                resolved += 1;
            }
        }
        debug!(resolved = resolved, total = self.entries.len(); "Symbol table resolved");
        resolved
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PendingValue<String, MeasuredText>)> {
        self.entries.iter().map(|(text, value)| (text.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use constellation_core::geometry::Size;

    use super::*;

    /// Measures 6 units per character and counts how often it is called.
    #[derive(Default)]
    struct CountingMeasurer {
        calls: Cell<usize>,
    }

    impl TextMeasurer for CountingMeasurer {
        fn measure(&self, text: &str) -> Size {
            self.calls.set(self.calls.get() + 1);
            Size::new(text.chars().count() as f32 * 6.0, 10.0)
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut value: PendingValue<u32, u32> = PendingValue::Pending(2);
        let mut calls = 0;

        for _ in 0..3 {
            let resolved = *value.resolve(|n| {
                calls += 1;
                n * 10
            });
            assert_eq!(resolved, 20);
        }
        assert_eq!(calls, 1);
        assert!(value.is_resolved());
        assert_eq!(value.pending(), None);
    }

    #[test]
    fn test_register_deduplicates() {
        let mut table = SymbolTable::new();
        assert!(table.register("hello"));
        assert!(!table.register("hello"));
        assert!(table.register("world"));

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("hello"),
            Some(&PendingValue::Pending("hello".to_string()))
        );
    }

    #[test]
    fn test_resolve_all_measures_each_text_once() {
        let measurer = CountingMeasurer::default();
        let mut table = SymbolTable::new();
        table.register("ab");
        table.register("ab");
        table.register("abc");

        assert_eq!(table.resolve_all(&measurer), 2);
        assert_eq!(table.resolve_all(&measurer), 0);
        assert_eq!(measurer.calls.get(), 2);

        let measured = table.measured("abc").unwrap();
        assert_eq!(measured.content(), "abc");
        assert_eq!(measured.size(), Size::new(18.0, 10.0));
    }

    #[test]
    fn test_register_keeps_resolved_entry() {
        let measurer = CountingMeasurer::default();
        let mut table = SymbolTable::new();
        table.register("x");
        table.resolve_all(&measurer);

        table.register("x");
        assert!(table.get("x").unwrap().is_resolved());
    }
}
