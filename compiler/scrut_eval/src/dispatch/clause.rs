//! Clauses as the caller writes them, and the environment their callbacks see.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use scrut_patterns::{Bindings, ClauseFault, MatchPattern, Name, Value};

pub(super) type GuardFn = dyn Fn(&MatchEnv<'_>) -> Result<bool, ClauseFault> + Send + Sync;
pub(super) type ProduceFn<R> = dyn Fn(&MatchEnv<'_>) -> Result<R, ClauseFault> + Send + Sync;

/// Names visible to a guard or producer.
///
/// Pattern bindings shadow names captured from the enclosing scope.
#[derive(Clone, Copy, Debug)]
pub struct MatchEnv<'a> {
    bindings: &'a Bindings,
    captured: &'a [(Name, Value)],
}

impl<'a> MatchEnv<'a> {
    pub(super) fn new(bindings: &'a Bindings, captured: &'a [(Name, Value)]) -> Self {
        MatchEnv { bindings, captured }
    }

    pub fn get(&self, name: Name) -> Option<&'a Value> {
        self.bindings.get(name).or_else(|| {
            self.captured
                .iter()
                .find(|(captured, _)| *captured == name)
                .map(|(_, value)| value)
        })
    }

    /// Only the names bound by the pattern.
    pub fn bindings(&self) -> &'a Bindings {
        self.bindings
    }

    /// Like `get`, but a missing name is a fault.
    pub fn require(&self, name: Name) -> Result<&'a Value, ClauseFault> {
        self.get(name)
            .ok_or_else(|| ClauseFault::new(format!("{name:?} is not bound")))
    }

    /// `require` followed by an integer projection.
    pub fn require_int(&self, name: Name) -> Result<i64, ClauseFault> {
        let value = self.require(name)?;
        value.as_int().ok_or_else(|| {
            ClauseFault::new(format!("{name:?} is a {}, not an Int", value.type_name()))
        })
    }
}

/// Boolean refinement evaluated after a pattern accepts.
///
/// `reads` lists every name the predicate looks up that the pattern does not
/// bind. Those names are captured from the scope when the dispatcher is built.
#[derive(Clone)]
pub struct Guard {
    reads: SmallVec<[Name; 2]>,
    pub(super) predicate: Arc<GuardFn>,
}

impl Guard {
    pub fn new(
        reads: impl IntoIterator<Item = Name>,
        predicate: impl Fn(&MatchEnv<'_>) -> Result<bool, ClauseFault> + Send + Sync + 'static,
    ) -> Self {
        Guard {
            reads: reads.into_iter().collect(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn reads(&self) -> &[Name] {
        &self.reads
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("reads", &self.reads).finish_non_exhaustive()
    }
}

/// Pattern, optional guard, and producer.
pub struct Clause<R> {
    pub(super) pattern: MatchPattern,
    pub(super) guard: Option<Guard>,
    pub(super) produce: Arc<ProduceFn<R>>,
}

impl<R> Clause<R> {
    pub fn new(
        pattern: MatchPattern,
        produce: impl Fn(&MatchEnv<'_>) -> Result<R, ClauseFault> + Send + Sync + 'static,
    ) -> Self {
        Clause {
            pattern,
            guard: None,
            produce: Arc::new(produce),
        }
    }

    /// A clause whose result does not depend on its bindings.
    pub fn returning(pattern: MatchPattern, result: R) -> Self
    where
        R: Clone + Send + Sync + 'static,
    {
        Clause::new(pattern, move |_| Ok(result.clone()))
    }

    #[must_use]
    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Shorthand for `with_guard(Guard::new(reads, predicate))`.
    #[must_use]
    pub fn guarded(
        self,
        reads: impl IntoIterator<Item = Name>,
        predicate: impl Fn(&MatchEnv<'_>) -> Result<bool, ClauseFault> + Send + Sync + 'static,
    ) -> Self {
        self.with_guard(Guard::new(reads, predicate))
    }

    pub fn pattern(&self) -> &MatchPattern {
        &self.pattern
    }

    pub fn guard(&self) -> Option<&Guard> {
        self.guard.as_ref()
    }
}

impl<R> Clone for Clause<R> {
    fn clone(&self) -> Self {
        Clause {
            pattern: self.pattern.clone(),
            guard: self.guard.clone(),
            produce: Arc::clone(&self.produce),
        }
    }
}

impl<R> fmt::Debug for Clause<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clause")
            .field("pattern", &self.pattern)
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}
