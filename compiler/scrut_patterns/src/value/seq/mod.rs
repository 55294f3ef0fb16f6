//! Sequence views.
//!
//! A `SeqValue` is an offset and a length into a shared backing slice.
//! Head/tail and init/last decomposition produce new views over the same
//! backing, so peeling a sequence element by element is linear overall
//! instead of quadratic.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use super::{Heap, Value};

/// Read-only view of a run of values.
#[derive(Clone)]
pub struct SeqValue {
    backing: Heap<[Value]>,
    start: usize,
    len: usize,
}

impl SeqValue {
    pub(super) fn new(items: Vec<Value>) -> Self {
        let len = items.len();
        SeqValue {
            backing: Heap::from_arc(Arc::from(items)),
            start: 0,
            len,
        }
    }

    /// The elements visible through this view.
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.backing[self.start..self.start + self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<&Value> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&Value> {
        self.as_slice().last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.as_slice().iter()
    }

    /// Everything after the first element, or `None` when empty.
    pub fn tail(&self) -> Option<SeqValue> {
        if self.is_empty() {
            return None;
        }
        self.subview(1..self.len)
    }

    /// Everything before the last element, or `None` when empty.
    pub fn init(&self) -> Option<SeqValue> {
        if self.is_empty() {
            return None;
        }
        self.subview(0..self.len - 1)
    }

    /// A view of `range` (relative to this view), sharing the backing slice.
    pub fn subview(&self, range: Range<usize>) -> Option<SeqValue> {
        if range.start > range.end || range.end > self.len {
            return None;
        }
        Some(SeqValue {
            backing: self.backing.clone(),
            start: self.start + range.start,
            len: range.end - range.start,
        })
    }

    /// True when both views read from the same allocation.
    pub fn shares_backing(&self, other: &SeqValue) -> bool {
        Heap::ptr_eq(&self.backing, &other.backing)
    }

    /// Offset of this view into its backing slice.
    pub fn offset(&self) -> usize {
        self.start
    }
}

impl PartialEq for SeqValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for SeqValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests;
