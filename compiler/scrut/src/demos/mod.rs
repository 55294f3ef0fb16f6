//! Demo programs.
//!
//! Each demo writes plain text to the given writer so the output can be
//! checked in tests.

mod literals;
mod sequences;
mod streams;
mod tuples;
mod types;

use std::io::{self, Write};

use scrut_eval::{BuildError, ClassError, EvalError, StringInterner, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    Literals,
    Sequences,
    Tuples,
    Types,
    Streams,
}

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("could not build dispatcher: {0}")]
    Build(#[from] BuildError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Class(#[from] ClassError),

    #[error("could not write output: {0}")]
    Io(#[from] io::Error),
}

impl Demo {
    pub const ALL: &'static [Demo] = &[
        Demo::Literals,
        Demo::Sequences,
        Demo::Tuples,
        Demo::Types,
        Demo::Streams,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Literals => "literals",
            Demo::Sequences => "sequences",
            Demo::Tuples => "tuples",
            Demo::Types => "types",
            Demo::Streams => "streams",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Demo::Literals => "literals, stable references and binders",
            Demo::Sequences => "fixed, head/tail and init/last sequence patterns",
            Demo::Tuples => "tuple patterns with literal positions",
            Demo::Types => "run-time type tests and element type erasure",
            Demo::Streams => "dispatching over generated primes and parsed input",
        }
    }

    pub fn from_name(name: &str) -> Option<Demo> {
        Demo::ALL.iter().copied().find(|demo| demo.name() == name)
    }

    #[tracing::instrument(level = "debug", skip(out), fields(demo = self.name()))]
    pub fn run(self, out: &mut dyn Write) -> Result<(), DemoError> {
        writeln!(out, "== {} ==", self.name())?;
        let interner = StringInterner::new();
        match self {
            Demo::Literals => literals::run(&interner, out),
            Demo::Sequences => sequences::run(&interner, out),
            Demo::Tuples => tuples::run(&interner, out),
            Demo::Types => types::run(&interner, out),
            Demo::Streams => streams::run(&interner, out),
        }
    }
}

/// `subject => result`, one line.
fn show(
    out: &mut dyn Write,
    interner: &StringInterner,
    subject: &Value,
    result: &str,
) -> io::Result<()> {
    writeln!(out, "  {:<24} => {result}", subject.render(interner))
}

fn ints(values: impl IntoIterator<Item = i64>) -> Value {
    Value::seq(values.into_iter().map(Value::int).collect())
}
