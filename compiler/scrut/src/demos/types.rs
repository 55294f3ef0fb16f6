//! Type-test clauses over a small class hierarchy, with a trace recorder
//! showing erased element types.

use std::io::Write;
use std::sync::Arc;

use scrut_eval::{
    ClassTable, Clause, DispatcherBuilder, MatchEvent, MatchPattern, Scope, StringInterner,
    TraceRecorder, TypeTag, Value,
};

use super::{show, DemoError};

pub(super) fn run(interner: &StringInterner, out: &mut dyn Write) -> Result<(), DemoError> {
    let scope = Scope::new();
    let mut classes = ClassTable::new();
    let shape = classes.declare(interner, "Shape", None)?;
    let circle = classes.declare(interner, "Circle", Some(shape))?;
    let rational = classes.declare(interner, "Rational", None)?;
    let radius = interner.intern("radius");

    let typed = |tag: TypeTag, label: &str| {
        Clause::returning(MatchPattern::Typed(tag), label.to_string())
    };
    let recorder = Arc::new(TraceRecorder::new());
    let dispatcher = DispatcherBuilder::new(interner, &scope)
        .classes(Arc::new(classes))
        .observer(recorder.clone())
        .clause(typed(TypeTag::Int, "an Int"))
        .clause(typed(TypeTag::Number, "some other Number"))
        .clause(typed(TypeTag::Class(shape), "a Shape"))
        .clause(typed(TypeTag::array(TypeTag::Int), "an Array[Int]"))
        .clause(typed(TypeTag::seq(TypeTag::Class(rational)), "a Seq[Rational]?"))
        .clause(typed(TypeTag::map(TypeTag::Str, TypeTag::Int), "a Map[Str, Int]?"))
        .clause(typed(TypeTag::Any, "something else"))
        .build()?;

    for warning in dispatcher.warnings() {
        writeln!(
            out,
            "  warning: clause {} tests `{}`, element types are unchecked",
            warning.clause_index, warning.tag
        )?;
    }

    for subject in [
        Value::int(7),
        Value::Float(2.5),
        Value::instance(circle, vec![(radius, Value::Float(1.0))]),
        Value::array(TypeTag::Int, vec![Value::int(1), Value::int(2)]),
        Value::array(TypeTag::Str, vec![Value::string("no")]),
        Value::seq(vec![Value::string("1/2"), Value::string("3/4")]),
        Value::map([("k".to_string(), Value::string("v"))]),
    ] {
        let result = dispatcher.evaluate(&subject)?;
        show(out, interner, &subject, &result)?;
        for event in recorder.take() {
            if let MatchEvent::ElementTypeErased(notice) = event {
                writeln!(
                    out,
                    "    (accepted {} as {} without checking elements)",
                    notice.subject_tag, notice.expected
                )?;
            }
        }
    }
    Ok(())
}
