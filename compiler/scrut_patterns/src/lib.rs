//! Scrut Patterns - values and pattern forms for the scrut dispatcher.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`, `SeqValue`, `StructValue`)
//! - The pattern syntax callers write (`MatchPattern`)
//! - The resolved pattern form the evaluator runs (`Pattern`)
//! - Binding environments (`Bindings`)
//! - Build-time and evaluation-time error types
//!
//! # Value Types
//!
//! All heap data is behind `Heap<T>` (an `Arc`), so values are cheap to clone,
//! immutable, and `Send + Sync`. Sequences are views (`SeqValue`) over a shared
//! backing slice: taking a tail or an init never copies elements.

mod bindings;
mod errors;
mod pattern;
mod syntax;
mod value;

pub use bindings::Bindings;
pub use errors::{BuildError, ClauseFault, EvalError, MalformedClause};
pub use pattern::Pattern;
pub use syntax::MatchPattern;
pub use value::{Heap, SeqValue, StructValue, Value};

// Re-export IR types that appear in this crate's public API
pub use scrut_ir::{ClassError, ClassTable, Name, StringInterner, TypeTag};
