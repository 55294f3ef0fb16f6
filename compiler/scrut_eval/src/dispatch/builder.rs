//! `DispatcherBuilder`: resolves and validates clauses into a `Dispatcher`.

use std::sync::Arc;

use tracing::{debug, warn};

use scrut_patterns::{
    BuildError, ClassTable, MalformedClause, Name, Pattern, StringInterner, Value,
};

use super::{Clause, CompiledClause, Dispatcher, Guard, UncheckedTypeTest};
use crate::observer::{is_erasure_prone, MatchObserver, NoopObserver};
use crate::{resolve_pattern, Scope};

/// Builder for `Dispatcher`.
///
/// The scope is read only during `build`: stable references and guard reads
/// are copied out of it, so later changes to the scope do not affect the
/// built dispatcher.
pub struct DispatcherBuilder<'a, R> {
    interner: &'a StringInterner,
    scope: &'a Scope,
    classes: Option<Arc<ClassTable>>,
    observer: Option<Arc<dyn MatchObserver>>,
    clauses: Vec<Clause<R>>,
}

impl<'a, R> DispatcherBuilder<'a, R> {
    /// Create a builder with an empty class table and no observer.
    pub fn new(interner: &'a StringInterner, scope: &'a Scope) -> Self {
        DispatcherBuilder {
            interner,
            scope,
            classes: None,
            observer: None,
            clauses: Vec::new(),
        }
    }

    /// Set the class table that type tests consult.
    #[must_use]
    pub fn classes(mut self, classes: Arc<ClassTable>) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Set the observer notified during evaluation.
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn MatchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Append one clause.
    #[must_use]
    pub fn clause(mut self, clause: Clause<R>) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Append clauses in order.
    #[must_use]
    pub fn clauses(mut self, clauses: impl IntoIterator<Item = Clause<R>>) -> Self {
        self.clauses.extend(clauses);
        self
    }

    /// Resolve every clause, failing on the first malformed one.
    #[tracing::instrument(level = "debug", skip_all, fields(clauses = self.clauses.len()))]
    pub fn build(self) -> Result<Dispatcher<R>, BuildError> {
        let classes = self.classes.unwrap_or_default();
        let observer = self
            .observer
            .unwrap_or_else(|| Arc::new(NoopObserver) as Arc<dyn MatchObserver>);

        let mut compiled = Vec::with_capacity(self.clauses.len());
        let mut warnings = Vec::new();
        for (clause_index, clause) in self.clauses.into_iter().enumerate() {
            let fail = |kind| BuildError { clause_index, kind };
            let pattern = resolve_pattern(&clause.pattern, self.scope, self.interner, &classes)
                .map_err(fail)?;
            let captured = match &clause.guard {
                Some(guard) => capture_guard_reads(guard, &pattern, self.scope, self.interner)
                    .map_err(fail)?,
                None => Box::default(),
            };
            collect_unchecked(&pattern, clause_index, &classes, &mut warnings);
            compiled.push(CompiledClause {
                pattern,
                guard: clause.guard.map(|guard| guard.predicate),
                captured,
                produce: clause.produce,
            });
        }

        debug!(
            clauses = compiled.len(),
            warnings = warnings.len(),
            "dispatcher built"
        );
        Ok(Dispatcher {
            clauses: compiled.into_boxed_slice(),
            classes,
            observer,
            warnings,
        })
    }
}

/// Snapshot every scope name the guard reads that its pattern does not bind.
fn capture_guard_reads(
    guard: &Guard,
    pattern: &Pattern,
    scope: &Scope,
    interner: &StringInterner,
) -> Result<Box<[(Name, Value)]>, MalformedClause> {
    let binders = pattern.binders();
    let mut captured = Vec::new();
    for &name in guard.reads() {
        if binders.contains(&name) {
            continue;
        }
        match scope.lookup(name) {
            Some(value) => captured.push((name, value.clone())),
            None => {
                return Err(MalformedClause::GuardReadsUnbound {
                    name: interner.lookup(name).to_string(),
                })
            }
        }
    }
    Ok(captured.into_boxed_slice())
}

fn collect_unchecked(
    pattern: &Pattern,
    clause_index: usize,
    classes: &ClassTable,
    warnings: &mut Vec<UncheckedTypeTest>,
) {
    pattern.walk(&mut |node| {
        if let Pattern::TypedClass(tag) = node {
            if is_erasure_prone(tag) {
                let tag = classes.describe(tag);
                warn!(
                    clause = clause_index,
                    tag = %tag,
                    "type test is unchecked: element types are not available at run time"
                );
                warnings.push(UncheckedTypeTest { clause_index, tag });
            }
        }
    });
}
