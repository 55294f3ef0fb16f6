//! The clause dispatcher.
//!
//! Clauses are tried in declaration order. For each clause the pattern is
//! attempted against the subject; if it accepts, the guard (if any) runs over
//! the fresh bindings; if that holds, the producer runs exactly once and its
//! result is returned. Nothing is retried after a producer starts.

mod builder;
mod clause;

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use scrut_patterns::{
    Bindings, BuildError, ClassTable, EvalError, Name, Pattern, StringInterner, Value,
};

use crate::extract::{attempt, MatchCx, MatchOutcome};
use crate::observer::MatchObserver;
use crate::Scope;

pub use builder::DispatcherBuilder;
pub use clause::{Clause, Guard, MatchEnv};

use clause::{GuardFn, ProduceFn};

/// A type test whose element parameters will be ignored at run time.
///
/// Reported once per occurrence when the dispatcher is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UncheckedTypeTest {
    pub clause_index: usize,
    /// Rendered tag, e.g. `Seq[Rational]`.
    pub tag: String,
}

struct CompiledClause<R> {
    pattern: Pattern,
    guard: Option<Arc<GuardFn>>,
    /// Scope values read by the guard, captured at build time.
    captured: Box<[(Name, Value)]>,
    produce: Arc<ProduceFn<R>>,
}

/// How a single clause fared against the subject.
enum ClauseAttempt {
    Selected(Bindings),
    PatternRejected,
    GuardRejected,
}

/// An ordered, immutable list of resolved clauses producing `R`.
///
/// `Send + Sync` for every `R`: one dispatcher can serve many threads.
pub struct Dispatcher<R> {
    clauses: Box<[CompiledClause<R>]>,
    classes: Arc<ClassTable>,
    observer: Arc<dyn MatchObserver>,
    warnings: Vec<UncheckedTypeTest>,
}

impl<R> Dispatcher<R> {
    /// Build with default settings. See `DispatcherBuilder` for the rest.
    pub fn from_clauses(
        interner: &StringInterner,
        scope: &Scope,
        clauses: impl IntoIterator<Item = Clause<R>>,
    ) -> Result<Self, BuildError> {
        DispatcherBuilder::new(interner, scope)
            .clauses(clauses)
            .build()
    }

    /// Run the first clause that accepts `subject`.
    #[tracing::instrument(level = "trace", skip_all, fields(subject = subject.type_name()))]
    pub fn evaluate(&self, subject: &Value) -> Result<R, EvalError> {
        for (index, clause) in self.clauses.iter().enumerate() {
            match self.try_clause(index, clause, subject)? {
                ClauseAttempt::Selected(bindings) => {
                    trace!(clause = index, bound = bindings.len(), "clause selected");
                    self.observer.clause_selected(index);
                    let env = MatchEnv::new(&bindings, &clause.captured);
                    return (clause.produce)(&env).map_err(|fault| EvalError::ProduceFault {
                        clause_index: index,
                        fault,
                    });
                }
                ClauseAttempt::PatternRejected => {
                    trace!(clause = index, "pattern rejected");
                    self.observer.pattern_rejected(index);
                }
                ClauseAttempt::GuardRejected => {
                    trace!(clause = index, "guard rejected");
                    self.observer.guard_rejected(index);
                }
            }
        }

        self.observer.exhausted(self.clauses.len());
        Err(EvalError::NoClauseAccepted {
            subject_tag: subject.describe_tag(&self.classes),
            clauses_tried: self.clauses.len(),
        })
    }

    fn try_clause(
        &self,
        index: usize,
        clause: &CompiledClause<R>,
        subject: &Value,
    ) -> Result<ClauseAttempt, EvalError> {
        let cx = MatchCx::new(&self.classes, self.observer.as_ref(), index);
        let MatchOutcome::Accepted(bindings) = attempt(&clause.pattern, subject, &cx) else {
            return Ok(ClauseAttempt::PatternRejected);
        };
        let Some(guard) = &clause.guard else {
            return Ok(ClauseAttempt::Selected(bindings));
        };
        match guard(&MatchEnv::new(&bindings, &clause.captured)) {
            Ok(true) => Ok(ClauseAttempt::Selected(bindings)),
            Ok(false) => Ok(ClauseAttempt::GuardRejected),
            Err(fault) => Err(EvalError::GuardFault {
                clause_index: index,
                fault,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Type tests that cannot fully check their tag at run time.
    pub fn warnings(&self) -> &[UncheckedTypeTest] {
        &self.warnings
    }

    /// Resolved patterns in declaration order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> + '_ {
        self.clauses.iter().map(|clause| &clause.pattern)
    }
}

impl<R> fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("patterns", &self.patterns().collect::<Vec<_>>())
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}
