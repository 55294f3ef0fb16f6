//! Class instances.

use std::sync::Arc;

use scrut_ir::Name;

use super::{Heap, Value};

/// Instance of a user class: the class name plus named fields in
/// declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct StructValue {
    pub class: Name,
    fields: Heap<[(Name, Value)]>,
}

impl StructValue {
    pub(super) fn new(class: Name, fields: Vec<(Name, Value)>) -> Self {
        StructValue {
            class,
            fields: Heap::from_arc(Arc::from(fields)),
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: Name) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> &[(Name, Value)] {
        &self.fields
    }
}

#[cfg(test)]
mod tests;
