//! Scrut Eval - run-time structural pattern dispatch.
//!
//! Given a subject `Value` and an ordered list of clauses, the dispatcher
//! finds the first clause whose pattern accepts the subject and whose guard
//! (if any) holds, and runs that clause's producer with the extracted
//! bindings.
//!
//! # Architecture
//!
//! - `Scope`: lexical names visible where the clauses are written
//! - `resolve`: turns `MatchPattern` syntax into `Pattern`s once, deciding
//!   binder vs stable reference against the `Scope`
//! - `attempt`: pure extraction of one pattern against one subject
//! - `Dispatcher`: the ordered first-match-wins loop
//! - `MatchObserver`: instrumentation and the erasure diagnostics hook
//!
//! # Re-exports
//!
//! Value and pattern types come from `scrut_patterns` and are re-exported
//! here so most callers need a single dependency.

mod dispatch;
mod extract;
mod observer;
mod resolve;
mod scope;
mod stack;

pub use dispatch::{
    Clause, Dispatcher, DispatcherBuilder, Guard, MatchEnv, UncheckedTypeTest,
};
pub use extract::{attempt, check_tag, MatchCx, MatchOutcome, TagCheck};
pub use observer::{
    ErasureNotice, MatchEvent, MatchObserver, NoopObserver, TraceRecorder, WarnOnErasure,
};
pub use resolve::resolve_pattern;
pub use scope::{Mutability, Scope};
pub use stack::ensure_sufficient_stack;

pub use scrut_patterns::{
    Bindings, BuildError, ClassError, ClassTable, ClauseFault, EvalError, MalformedClause,
    MatchPattern, Name, Pattern, SeqValue, StringInterner, StructValue, TypeTag, Value,
};
