//! Lexical scope visible to clauses at construction time.
//!
//! Uses a frame stack: `push_scope`/`pop_scope` bracket nested blocks, and
//! lookups search innermost-first. The dispatcher only reads a scope while it
//! is being built, copying out whatever values its patterns and guards need.

use rustc_hash::FxHashMap;

use scrut_patterns::{Name, Value};

/// Whether a binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// `var x = ...`
    Mutable,
    /// `val x = ...`; usable as a stable reference in patterns.
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

#[derive(Clone, Debug)]
struct Entry {
    value: Value,
    mutability: Mutability,
}

/// Stack of name → value frames.
#[derive(Clone, Debug)]
pub struct Scope {
    frames: Vec<FxHashMap<Name, Entry>>,
}

impl Scope {
    /// A scope with one (outermost) frame.
    pub fn new() -> Self {
        Scope {
            frames: vec![FxHashMap::default()],
        }
    }

    pub fn push_scope(&mut self) {
        self.frames.push(FxHashMap::default());
    }

    /// Pop the innermost frame. The outermost frame is never popped.
    pub fn pop_scope(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Number of frames, including the outermost.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Define `name` in the innermost frame, shadowing outer definitions.
    pub fn define(&mut self, name: Name, value: Value, mutability: Mutability) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name, Entry { value, mutability });
        }
    }

    /// Define an immutable binding.
    pub fn define_val(&mut self, name: Name, value: Value) {
        self.define(name, value, Mutability::Immutable);
    }

    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.lookup_entry(name).map(|(value, _)| value)
    }

    /// Innermost binding of `name` together with its mutability.
    pub fn lookup_entry(&self, name: Name) -> Option<(&Value, Mutability)> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(&name))
            .map(|entry| (&entry.value, entry.mutability))
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}
