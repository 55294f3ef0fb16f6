//! Runtime type tags and the subtype relation used by type-test patterns.
//!
//! # Erasure
//!
//! `Seq` and `Map` carry element parameters only as *declared* types. A
//! runtime sequence or mapping does not know its element type, so a run-time
//! test against `Seq(Rational)` can only check the outer `Seq`. `Array` is the
//! opposite: its element tag is stored with the value and is checked.
//!
//! `ClassTable::is_subtype` compares two tags as declared; deciding what a
//! given *value* satisfies (and reporting ignored parameters) is the
//! evaluator's job.

use std::fmt::Write as _;

use rustc_hash::FxHashMap;

use crate::{Name, StringInterner};

/// Runtime type tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Top of the lattice; every tag is a subtype of `Any`.
    Any,
    Unit,
    Bool,
    Int,
    Float,
    /// Supertype of `Int` and `Float`.
    Number,
    Char,
    Str,
    /// General sequence. The element parameter is erased at run time.
    Seq(Box<TypeTag>),
    /// Mapping from keys to values. Both parameters are erased at run time.
    Map(Box<TypeTag>, Box<TypeTag>),
    /// Fixed-layout array. The element tag is reified and checked.
    Array(Box<TypeTag>),
    /// Tuple of the given arity.
    Tuple(usize),
    /// Instance of a class declared in a `ClassTable`.
    Class(Name),
}

impl TypeTag {
    /// `Seq[elem]`.
    pub fn seq(elem: TypeTag) -> Self {
        TypeTag::Seq(Box::new(elem))
    }

    /// `Map[key, value]`.
    pub fn map(key: TypeTag, value: TypeTag) -> Self {
        TypeTag::Map(Box::new(key), Box::new(value))
    }

    /// `Array[elem]`.
    pub fn array(elem: TypeTag) -> Self {
        TypeTag::Array(Box::new(elem))
    }

    /// True for aggregates whose element parameters do not exist at run time.
    pub fn is_erased_aggregate(&self) -> bool {
        matches!(self, TypeTag::Seq(_) | TypeTag::Map(..))
    }

    /// True when a run-time test against this tag silently ignores part of it.
    ///
    /// `Seq[Any]` loses nothing; `Seq[Int]` loses the `Int`, and so does
    /// `Array[Seq[Int]]`.
    pub fn has_unchecked_parameters(&self) -> bool {
        match self {
            TypeTag::Seq(elem) => **elem != TypeTag::Any,
            TypeTag::Map(key, value) => **key != TypeTag::Any || **value != TypeTag::Any,
            TypeTag::Array(elem) => elem.has_unchecked_parameters(),
            _ => false,
        }
    }
}

/// Why a class cannot be declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClassError {
    #[error("parent class {0:?} is not declared")]
    UndeclaredParent(Name),

    #[error("class `{0}` is already declared")]
    AlreadyDeclared(&'static str),
}

/// A declared class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassInfo {
    pub name: Name,
    /// Source spelling, for diagnostics.
    pub display: &'static str,
    pub parent: Option<Name>,
}

/// Single-inheritance class hierarchy.
///
/// Parents must be declared before their children and a class is declared
/// at most once, so the parent chain is always finite.
#[derive(Clone, Debug, Default)]
pub struct ClassTable {
    classes: FxHashMap<Name, ClassInfo>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new class, optionally extending an already-declared parent.
    pub fn declare(
        &mut self,
        interner: &StringInterner,
        name: &str,
        parent: Option<Name>,
    ) -> Result<Name, ClassError> {
        let interned = interner.intern(name);
        if self.contains(interned) {
            return Err(ClassError::AlreadyDeclared(interner.lookup(interned)));
        }
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(ClassError::UndeclaredParent(parent));
            }
        }
        self.classes.insert(
            interned,
            ClassInfo {
                name: interned,
                display: interner.lookup(interned),
                parent,
            },
        );
        Ok(interned)
    }

    pub fn get(&self, name: Name) -> Option<&ClassInfo> {
        self.classes.get(&name)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.classes.contains_key(&name)
    }

    /// Walk `sub`'s parent chain looking for `sup`.
    pub fn is_subclass(&self, sub: Name, sup: Name) -> bool {
        let mut current = Some(sub);
        while let Some(name) = current {
            if name == sup {
                return true;
            }
            current = self.classes.get(&name).and_then(|info| info.parent);
        }
        false
    }

    /// Declared subtyping: `sub <: sup`.
    ///
    /// Containers are covariant in their parameters.
    pub fn is_subtype(&self, sub: &TypeTag, sup: &TypeTag) -> bool {
        match (sub, sup) {
            (_, TypeTag::Any) | (TypeTag::Int | TypeTag::Float, TypeTag::Number) => true,
            (TypeTag::Seq(a), TypeTag::Seq(b)) | (TypeTag::Array(a), TypeTag::Array(b)) => {
                self.is_subtype(a, b)
            }
            (TypeTag::Map(ka, va), TypeTag::Map(kb, vb)) => {
                self.is_subtype(ka, kb) && self.is_subtype(va, vb)
            }
            (TypeTag::Class(a), TypeTag::Class(b)) => self.is_subclass(*a, *b),
            (a, b) => a == b,
        }
    }

    /// First class mentioned in `tag` that this table does not know.
    pub fn first_undeclared(&self, tag: &TypeTag) -> Option<Name> {
        match tag {
            TypeTag::Class(name) if !self.contains(*name) => Some(*name),
            TypeTag::Seq(elem) | TypeTag::Array(elem) => self.first_undeclared(elem),
            TypeTag::Map(key, value) => self
                .first_undeclared(key)
                .or_else(|| self.first_undeclared(value)),
            _ => None,
        }
    }

    /// Human-readable rendering of a tag, e.g. `Seq[Rational]`.
    pub fn describe(&self, tag: &TypeTag) -> String {
        let mut out = String::new();
        self.describe_into(tag, &mut out);
        out
    }

    fn describe_into(&self, tag: &TypeTag, out: &mut String) {
        match tag {
            TypeTag::Any => out.push_str("Any"),
            TypeTag::Unit => out.push_str("Unit"),
            TypeTag::Bool => out.push_str("Bool"),
            TypeTag::Int => out.push_str("Int"),
            TypeTag::Float => out.push_str("Float"),
            TypeTag::Number => out.push_str("Number"),
            TypeTag::Char => out.push_str("Char"),
            TypeTag::Str => out.push_str("Str"),
            TypeTag::Seq(elem) => {
                out.push_str("Seq[");
                self.describe_into(elem, out);
                out.push(']');
            }
            TypeTag::Array(elem) => {
                out.push_str("Array[");
                self.describe_into(elem, out);
                out.push(']');
            }
            TypeTag::Map(key, value) => {
                out.push_str("Map[");
                self.describe_into(key, out);
                out.push_str(", ");
                self.describe_into(value, out);
                out.push(']');
            }
            TypeTag::Tuple(arity) => {
                let _ = write!(out, "Tuple{arity}");
            }
            TypeTag::Class(name) => match self.classes.get(name) {
                Some(info) => out.push_str(info.display),
                None => {
                    let _ = write!(out, "<class #{}>", name.raw());
                }
            },
        }
    }
}

#[cfg(test)]
mod tests;
