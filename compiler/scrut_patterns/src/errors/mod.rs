//! Error types for building and evaluating dispatchers.
//!
//! Two phases, two types:
//! - `BuildError` / `MalformedClause`: construction time, fatal to that
//!   dispatcher. Never produced by `evaluate`.
//! - `EvalError`: evaluation time. `NoClauseAccepted` is the recoverable
//!   "nothing matched" outcome; the fault variants hand the caller's own
//!   `ClauseFault` back untouched.

use std::error::Error;
use std::fmt;

/// Why a clause cannot be built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedClause {
    #[error("guard reads `{name}`, which is bound neither by its pattern nor by the enclosing scope")]
    GuardReadsUnbound { name: String },

    #[error("`{name}` is bound more than once in the same pattern")]
    DuplicateBinder { name: String },

    #[error("{pattern} pattern has arity {arity}: {reason}")]
    InconsistentArity {
        pattern: &'static str,
        arity: usize,
        reason: &'static str,
    },

    #[error("stable reference `{name}` is not bound in the enclosing scope")]
    UndefinedStableRef { name: String },

    #[error("`{name}` refers to a mutable binding and cannot be used as a stable reference")]
    UnstableIdentifier { name: String },

    #[error("type test names undeclared class `{name}`")]
    UnknownClass { name: String },
}

/// A malformed clause, with its position in the clause list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("clause {clause_index}: {kind}")]
pub struct BuildError {
    pub clause_index: usize,
    pub kind: MalformedClause,
}

/// Failure raised by a caller-supplied guard or producer.
///
/// The dispatcher never inspects or rewrites a fault; it is carried through
/// `EvalError` as-is.
pub struct ClauseFault {
    message: String,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl ClauseFault {
    /// A fault with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        ClauseFault {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an arbitrary error, keeping it reachable through `source()`.
    pub fn wrap(error: impl Error + Send + Sync + 'static) -> Self {
        ClauseFault {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped error, if this fault was built with `wrap`.
    pub fn into_source(self) -> Option<Box<dyn Error + Send + Sync + 'static>> {
        self.source
    }
}

impl fmt::Debug for ClauseFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClauseFault")
            .field("message", &self.message)
            .field("wrapped", &self.source.is_some())
            .finish()
    }
}

impl fmt::Display for ClauseFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ClauseFault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

/// Evaluation-time failure.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// Every clause's pattern rejected the subject, or every accepting
    /// clause's guard was false.
    #[error("no clause accepted subject of type `{subject_tag}` ({clauses_tried} clauses tried)")]
    NoClauseAccepted {
        subject_tag: String,
        clauses_tried: usize,
    },

    #[error("guard of clause {clause_index} failed: {fault}")]
    GuardFault {
        clause_index: usize,
        #[source]
        fault: ClauseFault,
    },

    #[error("clause {clause_index} failed while producing its result: {fault}")]
    ProduceFault {
        clause_index: usize,
        #[source]
        fault: ClauseFault,
    },
}

impl EvalError {
    pub fn is_no_clause_accepted(&self) -> bool {
        matches!(self, EvalError::NoClauseAccepted { .. })
    }

    /// Hand back the caller's fault, if this error carries one.
    pub fn into_fault(self) -> Option<ClauseFault> {
        match self {
            EvalError::GuardFault { fault, .. } | EvalError::ProduceFault { fault, .. } => {
                Some(fault)
            }
            EvalError::NoClauseAccepted { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests;
