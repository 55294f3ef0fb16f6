//! Binding environment produced by one match attempt.

use scrut_ir::Name;
use smallvec::SmallVec;

use crate::Value;

/// Insertion-ordered map from binder name to value.
///
/// Lives for a single clause attempt. Most patterns bind a handful of names,
/// so entries stay inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    entries: SmallVec<[(Name, Value); 4]>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name → value`.
    pub fn bind(&mut self, name: Name, value: Value) {
        self.entries.push((name, value));
    }

    pub fn get(&self, name: Name) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were bound.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &Value)> + '_ {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Drop everything bound after the first `len` entries.
    pub fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(Name, Value)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (Name, Value)>>(iter: I) -> Self {
        Bindings {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests;
