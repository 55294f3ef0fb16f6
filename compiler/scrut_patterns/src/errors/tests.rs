#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

#[derive(Debug, thiserror::Error)]
#[error("invalid digit in {0:?}")]
struct ParseFailure(String);

#[test]
fn test_build_error_display() {
    let err = BuildError {
        clause_index: 2,
        kind: MalformedClause::GuardReadsUnbound {
            name: "y".to_string(),
        },
    };
    assert_eq!(
        err.to_string(),
        "clause 2: guard reads `y`, which is bound neither by its pattern nor by the enclosing scope"
    );
}

#[test]
fn test_arity_display() {
    let kind = MalformedClause::InconsistentArity {
        pattern: "tuple",
        arity: 1,
        reason: "tuples have between 2 and 22 elements",
    };
    assert_eq!(
        kind.to_string(),
        "tuple pattern has arity 1: tuples have between 2 and 22 elements"
    );
}

#[test]
fn test_no_clause_accepted_display() {
    let err = EvalError::NoClauseAccepted {
        subject_tag: "Seq[Any]".to_string(),
        clauses_tried: 3,
    };
    assert!(err.is_no_clause_accepted());
    assert_eq!(
        err.to_string(),
        "no clause accepted subject of type `Seq[Any]` (3 clauses tried)"
    );
    assert!(err.into_fault().is_none());
}

#[test]
fn test_fault_survives_unmodified() {
    let err = EvalError::GuardFault {
        clause_index: 0,
        fault: ClauseFault::wrap(ParseFailure("12x".to_string())),
    };
    assert!(!err.is_no_clause_accepted());
    assert!(err.source().is_some());

    let fault = err.into_fault().unwrap();
    assert_eq!(fault.message(), "invalid digit in \"12x\"");
    let source = fault.into_source().unwrap();
    assert!(source.downcast_ref::<ParseFailure>().is_some());
}

#[test]
fn test_plain_fault_has_no_source() {
    let fault = ClauseFault::new("guard exploded");
    assert_eq!(fault.to_string(), "guard exploded");
    assert!(fault.source().is_none());
}
