//! Scrut IR - shared vocabulary for the scrut dispatcher.
//!
//! This crate contains the data that both the value layer and the evaluator
//! agree on:
//! - `Name` / `StringInterner` for binder and class identifiers
//! - `TypeTag` / `ClassTable` for runtime type tests and subtyping
//!
//! Nothing here inspects runtime values; see `scrut_patterns` for those.

mod interner;
mod name;
mod tag;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use tag::{ClassError, ClassInfo, ClassTable, TypeTag};
