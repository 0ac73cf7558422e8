//! Name lookup indices over the symbol tables.
//!
//! The indices are plain hash maps rebuilt from scratch by [`SymbolIndex::rebuild`]. Append
//! operations on the container never touch them; callers rebuild after mutating tables.

use std::collections::HashMap;

use crate::metadata::symbols::{Function, Structure};

/// Name to index maps for functions, structures and strings.
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    functions: HashMap<String, Vec<usize>>,
    structures: HashMap<String, usize>,
    strings: HashMap<String, usize>,
}

/// Split `name#N` into the name and overload number.
///
/// A suffix that is not a non-negative integer selects overload 0 with a warning.
fn split_overload(name: &str) -> (&str, usize) {
    let Some((base, suffix)) = name.rsplit_once('#') else {
        return (name, 0);
    };

    match suffix.parse::<usize>() {
        Ok(n) => (base, n),
        Err(_) => {
            log::warn!("invalid overload index in function name '{}'", name);
            (base, 0)
        }
    }
}

impl SymbolIndex {
    /// Empty index.
    #[must_use]
    pub fn new() -> Self {
        SymbolIndex::default()
    }

    /// Rebuild every map from the given tables.
    ///
    /// Functions sharing a name are collected into an overload list in table order.
    /// Structure and string collisions keep the last index and log a warning.
    pub fn rebuild(&mut self, functions: &[Function], structures: &[Structure], strings: &[String]) {
        self.functions.clear();
        for (index, function) in functions.iter().enumerate() {
            self.functions
                .entry(function.name.clone())
                .or_default()
                .push(index);
        }

        self.structures.clear();
        for (index, structure) in structures.iter().enumerate() {
            if let Some(previous) = self.structures.insert(structure.name.clone(), index) {
                log::warn!(
                    "duplicate structure name '{}' ({} and {})",
                    structure.name,
                    previous,
                    index
                );
            }
        }

        self.strings.clear();
        for (index, string) in strings.iter().enumerate() {
            if let Some(previous) = self.strings.insert(string.clone(), index) {
                log::warn!("duplicate string {:?} ({} and {})", string, previous, index);
            }
        }
    }

    /// Resolve a function name, optionally suffixed with `#N` to pick the Nth overload.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<usize> {
        if let Some(overloads) = self.functions.get(name) {
            return overloads.first().copied();
        }

        let (base, n) = split_overload(name);
        self.functions.get(base)?.get(n).copied()
    }

    /// All functions called `name`, in table order.
    #[must_use]
    pub fn overloads(&self, name: &str) -> &[usize] {
        self.functions.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolve a structure name.
    #[must_use]
    pub fn structure(&self, name: &str) -> Option<usize> {
        self.structures.get(name).copied()
    }

    /// Resolve a string table entry.
    #[must_use]
    pub fn string(&self, s: &str) -> Option<usize> {
        self.strings.get(s).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn functions(names: &[&str]) -> Vec<Function> {
        names.iter().map(|name| Function::new(*name)).collect()
    }

    #[test]
    fn overloads() {
        let mut index = SymbolIndex::new();
        index.rebuild(&functions(&["NULL", "f", "g", "f"]), &[], &[]);

        assert_eq!(index.function("f"), Some(1));
        assert_eq!(index.function("f#0"), Some(1));
        assert_eq!(index.function("f#1"), Some(3));
        assert_eq!(index.function("f#2"), None);
        assert_eq!(index.function("f#x"), Some(1));
        assert_eq!(index.function("h"), None);
        assert_eq!(index.overloads("f"), &[1, 3]);
        assert!(index.overloads("h").is_empty());
    }

    #[test]
    fn names_containing_hash() {
        let mut index = SymbolIndex::new();
        index.rebuild(&functions(&["a#b"]), &[], &[]);
        assert_eq!(index.function("a#b"), Some(0));
        assert_eq!(index.function("a#b#0"), Some(0));
    }

    #[test]
    fn last_write_wins() {
        let structures = vec![Structure::new("S"), Structure::new("T"), Structure::new("S")];
        let strings = vec![String::new(), "x".to_string(), "x".to_string()];

        let mut index = SymbolIndex::new();
        index.rebuild(&[], &structures, &strings);
        assert_eq!(index.structure("S"), Some(2));
        assert_eq!(index.structure("T"), Some(1));
        assert_eq!(index.string("x"), Some(2));
        assert_eq!(index.string(""), Some(0));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let funcs = functions(&["a", "b"]);
        let mut index = SymbolIndex::new();
        index.rebuild(&funcs, &[], &[]);
        index.rebuild(&funcs, &[], &[]);
        assert_eq!(index.overloads("a"), &[0]);
    }
}
