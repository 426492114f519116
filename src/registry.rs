// Copyright (c) 2026 The cliq Authors.
//
// SPDX-License-Identifier: Apache-2.0
//

//! The handler registry: maps registered keys to their bound actions.

use std::collections::HashMap;

use crate::action::Action;

/// Slot value that no positional cursor can ever reach.
///
/// Registering a variadic positional pins the next slot here, so later
/// positional registrations are accepted but never matched: a variadic
/// positional must be last.
pub(crate) const UNREACHABLE_SLOT: usize = usize::MAX;

/// A registered key: either a keyword argument in its full dashed form
/// (`-f`, `--foo`), or a positional slot index.
///
/// Storing the dashed form keeps keyword keys from ever colliding with
/// slot indices.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Key {
    Opt(String),
    Slot(usize),
}

/// One registered action together with its resolved destination key.
#[derive(Clone, Debug)]
pub(crate) struct Binding {
    pub action: Action,
    pub dest: String,
}

/// Mapping from registered keys to bindings.
///
/// A short/long key pair shares a single binding. Re-registering an
/// existing key silently overwrites the earlier entry.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    entries: HashMap<Key, usize>,
    bindings: Vec<Binding>,
    next_slot: usize,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Register a binding under a single keyword key.
    pub fn insert_opt(&mut self, key: &str, binding: Binding) {
        let index = self.push(binding);
        self.entries.insert(Key::Opt(key.into()), index);
    }

    /// Register one binding under a short and a long keyword key.
    pub fn insert_pair(&mut self, short: &str, long: &str, binding: Binding) {
        let index = self.push(binding);
        self.entries.insert(Key::Opt(short.into()), index);
        self.entries.insert(Key::Opt(long.into()), index);
    }

    /// Register a binding at the next positional slot.
    ///
    /// Exact-arity registrations advance the slot counter; a variadic
    /// registration pins it to [UNREACHABLE_SLOT].
    pub fn insert_posn(&mut self, binding: Binding, variadic: bool) {
        let index = self.push(binding);
        self.entries.insert(Key::Slot(self.next_slot), index);

        if variadic {
            self.next_slot = UNREACHABLE_SLOT;
        } else if self.next_slot != UNREACHABLE_SLOT {
            self.next_slot += 1;
        }
    }

    /// Look up a keyword key in its full dashed form.
    pub fn opt(&self, key: &str) -> Option<Binding> {
        self.get(&Key::Opt(key.into()))
    }

    /// Look up a positional slot.
    pub fn slot(&self, slot: usize) -> Option<Binding> {
        self.get(&Key::Slot(slot))
    }

    /// Number of registered keys (a short/long pair counts twice).
    ///
    /// # Note
    ///
    /// Used by the test code.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, binding: Binding) -> usize {
        self.bindings.push(binding);
        self.bindings.len() - 1
    }

    fn get(&self, key: &Key) -> Option<Binding> {
        self.entries
            .get(key)
            .map(|index| self.bindings[*index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Arity;

    fn value_binding(dest: &str) -> Binding {
        Binding {
            action: Action::Value { arity: Arity::One },
            dest: dest.into(),
        }
    }

    #[test]
    fn test_opt_lookup() {
        let mut registry = Registry::new();

        assert_eq!(registry.len(), 0);
        assert!(registry.opt("--foo").is_none());

        registry.insert_opt("--foo", value_binding("foo"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.opt("--foo").unwrap().dest, "foo");
        assert!(registry.opt("-f").is_none());
        assert!(registry.slot(0).is_none());
    }

    #[test]
    fn test_pair_shares_binding() {
        let mut registry = Registry::new();

        registry.insert_pair("-b", "--bar", value_binding("bar"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.opt("-b").unwrap().dest, "bar");
        assert_eq!(registry.opt("--bar").unwrap().dest, "bar");
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut registry = Registry::new();

        registry.insert_opt("--foo", value_binding("first"));
        registry.insert_opt("--foo", value_binding("second"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.opt("--foo").unwrap().dest, "second");
    }

    #[test]
    fn test_posn_slots_advance() {
        let mut registry = Registry::new();

        registry.insert_posn(value_binding("src"), false);
        registry.insert_posn(value_binding("dest"), false);

        assert_eq!(registry.slot(0).unwrap().dest, "src");
        assert_eq!(registry.slot(1).unwrap().dest, "dest");
        assert!(registry.slot(2).is_none());
    }

    #[test]
    fn test_variadic_posn_freezes_later_slots() {
        let mut registry = Registry::new();

        registry.insert_posn(value_binding("src"), false);
        registry.insert_posn(value_binding("rest"), true);

        // Accepted, but parked on the unreachable slot.
        registry.insert_posn(value_binding("tail"), false);

        assert_eq!(registry.slot(0).unwrap().dest, "src");
        assert_eq!(registry.slot(1).unwrap().dest, "rest");
        assert!(registry.slot(2).is_none());
        assert_eq!(
            registry.slot(UNREACHABLE_SLOT).unwrap().dest,
            "tail"
        );
    }
}
