//! Match instrumentation.
//!
//! The dispatcher reports each step of an evaluation to a `MatchObserver`.
//! All methods default to no-ops, so an observer only implements what it
//! cares about. Observers are shared across threads with the dispatcher and
//! must be `Send + Sync`.

use parking_lot::Mutex;
use tracing::warn;

use scrut_patterns::TypeTag;

/// A type test that could only check the outer constructor of its tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErasureNotice {
    pub clause_index: usize,
    /// The tag the pattern asked for, e.g. `Seq[Rational]`.
    pub expected: String,
    /// The subject's runtime tag, e.g. `Seq[Any]`.
    pub subject_tag: String,
}

pub trait MatchObserver: Send + Sync {
    /// Clause `clause_index`'s pattern did not accept the subject.
    fn pattern_rejected(&self, _clause_index: usize) {}

    /// The pattern accepted but the guard returned false.
    fn guard_rejected(&self, _clause_index: usize) {}

    /// Clause `clause_index` was selected; its producer runs next.
    fn clause_selected(&self, _clause_index: usize) {}

    /// No clause accepted the subject.
    fn exhausted(&self, _clauses_tried: usize) {}

    /// A type test accepted on its outer constructor only.
    ///
    /// Delivered once the whole pattern has accepted, before the guard runs.
    fn element_type_erased(&self, _notice: &ErasureNotice) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {}

/// Emits a `tracing` warning for every erased type test.
#[derive(Clone, Copy, Debug, Default)]
pub struct WarnOnErasure;

impl MatchObserver for WarnOnErasure {
    fn element_type_erased(&self, notice: &ErasureNotice) {
        warn!(
            clause = notice.clause_index,
            expected = %notice.expected,
            actual = %notice.subject_tag,
            "type test accepted without checking element types"
        );
    }
}

/// One observed step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchEvent {
    PatternRejected(usize),
    GuardRejected(usize),
    Selected(usize),
    Exhausted(usize),
    ElementTypeErased(ErasureNotice),
}

/// Records every event in order. Used by tests and the demo CLI.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    events: Mutex<Vec<MatchEvent>>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<MatchEvent> {
        self.events.lock().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<MatchEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    fn record(&self, event: MatchEvent) {
        self.events.lock().push(event);
    }
}

impl MatchObserver for TraceRecorder {
    fn pattern_rejected(&self, clause_index: usize) {
        self.record(MatchEvent::PatternRejected(clause_index));
    }

    fn guard_rejected(&self, clause_index: usize) {
        self.record(MatchEvent::GuardRejected(clause_index));
    }

    fn clause_selected(&self, clause_index: usize) {
        self.record(MatchEvent::Selected(clause_index));
    }

    fn exhausted(&self, clauses_tried: usize) {
        self.record(MatchEvent::Exhausted(clauses_tried));
    }

    fn element_type_erased(&self, notice: &ErasureNotice) {
        self.record(MatchEvent::ElementTypeErased(notice.clone()));
    }
}

/// Does `tag` name element types that a run-time test cannot see?
pub(crate) fn is_erasure_prone(tag: &TypeTag) -> bool {
    tag.has_unchecked_parameters()
}
