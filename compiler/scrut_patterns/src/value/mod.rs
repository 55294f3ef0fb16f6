//! Runtime values matched by the dispatcher.
//!
//! `Value` is a closed sum type. Its discriminant doubles as the runtime type
//! tag (`Value::tag`), so type-test patterns compare tags instead of
//! reflecting over arbitrary data.
//!
//! # Heap Enforcement
//!
//! Heap data lives behind `Heap<T>`, whose constructor is private to this
//! module. Build values through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");
//! let xs = Value::seq(vec![Value::int(1), Value::int(2)]);
//! let pair = Value::tuple(vec![Value::int(1), Value::string("12:00")]);
//! ```

mod composite;
mod heap;
mod seq;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use scrut_ir::{ClassTable, Name, StringInterner, TypeTag};

pub use composite::StructValue;
pub use heap::Heap;
pub use seq::SeqValue;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),

    // Heap types
    Str(Heap<str>),
    /// General sequence. Its element type is not recorded.
    Seq(SeqValue),
    /// Fixed-layout array with a reified element tag.
    Array { elem: TypeTag, items: SeqValue },
    /// Mapping from string keys to values. Its value type is not recorded.
    Map(Heap<BTreeMap<String, Value>>),
    Tuple(Heap<[Value]>),
    /// Instance of a class declared in a `ClassTable`.
    Struct(StructValue),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        let s: String = s.into();
        Value::Str(Heap::from_arc(Arc::from(s)))
    }

    #[inline]
    pub fn seq(items: Vec<Value>) -> Self {
        Value::Seq(SeqValue::new(items))
    }

    /// Create an array whose elements all carry `elem` as their declared tag.
    #[inline]
    pub fn array(elem: TypeTag, items: Vec<Value>) -> Self {
        Value::Array {
            elem,
            items: SeqValue::new(items),
        }
    }

    pub fn map(entries: impl IntoIterator<Item = (String, Value)>) -> Self {
        Value::Map(Heap::new(entries.into_iter().collect()))
    }

    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::from_arc(Arc::from(items)))
    }

    /// Create a class instance.
    #[inline]
    pub fn instance(class: Name, fields: Vec<(Name, Value)>) -> Self {
        Value::Struct(StructValue::new(class, fields))
    }
}

// Value Methods

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Sequence view of a `Seq` or an `Array`.
    pub fn as_seq(&self) -> Option<&SeqValue> {
        match self {
            Value::Seq(items) | Value::Array { items, .. } => Some(items),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Wrap `view` in the same kind of sequence as `self`.
    ///
    /// Sub-views of an array stay arrays with the same element tag. Returns
    /// `None` when `self` is not a sequence.
    pub fn with_seq_view(&self, view: SeqValue) -> Option<Value> {
        match self {
            Value::Seq(_) => Some(Value::Seq(view)),
            Value::Array { elem, .. } => Some(Value::Array {
                elem: elem.clone(),
                items: view,
            }),
            _ => None,
        }
    }

    /// The runtime type tag.
    ///
    /// Erased aggregates report `Any` for their parameters; arrays report
    /// their stored element tag.
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Unit => TypeTag::Unit,
            Value::Bool(_) => TypeTag::Bool,
            Value::Int(_) => TypeTag::Int,
            Value::Float(_) => TypeTag::Float,
            Value::Char(_) => TypeTag::Char,
            Value::Str(_) => TypeTag::Str,
            Value::Seq(_) => TypeTag::seq(TypeTag::Any),
            Value::Array { elem, .. } => TypeTag::array(elem.clone()),
            Value::Map(_) => TypeTag::map(TypeTag::Str, TypeTag::Any),
            Value::Tuple(items) => TypeTag::Tuple(items.len()),
            Value::Struct(s) => TypeTag::Class(s.class),
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "Unit",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Char(_) => "Char",
            Value::Str(_) => "Str",
            Value::Seq(_) => "Seq",
            Value::Array { .. } => "Array",
            Value::Map(_) => "Map",
            Value::Tuple(_) => "Tuple",
            Value::Struct(_) => "Struct",
        }
    }

    /// Describe this value's runtime tag, resolving class names.
    pub fn describe_tag(&self, classes: &ClassTable) -> String {
        classes.describe(&self.tag())
    }

    /// Check structural equality with another value.
    ///
    /// Composite values compare element by element; sequence views compare
    /// their visible elements regardless of offset.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (
                Value::Array {
                    elem: ea,
                    items: a,
                },
                Value::Array {
                    elem: eb,
                    items: b,
                },
            ) => ea == eb && a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Struct(a), Value::Struct(b)) => a == b,
            _ => false,
        }
    }

    /// Render for user output, resolving class and field names.
    pub fn render(&self, interner: &StringInterner) -> String {
        match self {
            Value::Seq(items) => format!("[{}]", render_all(items.as_slice(), interner)),
            Value::Array { items, .. } => {
                format!("Array({})", render_all(items.as_slice(), interner))
            }
            Value::Tuple(items) => format!("({})", render_all(items, interner)),
            Value::Map(map) => {
                let inner: Vec<_> = map
                    .iter()
                    .map(|(k, v)| format!("\"{k}\": {}", v.render(interner)))
                    .collect();
                format!("{{{}}}", inner.join(", "))
            }
            Value::Struct(s) => {
                let inner: Vec<_> = s
                    .fields()
                    .iter()
                    .map(|(name, v)| format!("{} = {}", interner.lookup(*name), v.render(interner)))
                    .collect();
                format!("{}({})", interner.lookup(s.class), inner.join(", "))
            }
            _ => self.to_string(),
        }
    }
}

fn render_all(items: &[Value], interner: &StringInterner) -> String {
    let inner: Vec<_> = items.iter().map(|v| v.render(interner)).collect();
    inner.join(", ")
}

// Trait Implementations

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "Unit"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n})"),
            Value::Char(c) => write!(f, "Char({c:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Seq(items) => write!(f, "Seq({items:?})"),
            Value::Array { elem, items } => write!(f, "Array({elem:?}, {items:?})"),
            Value::Map(map) => write!(f, "Map({:?})", &**map),
            Value::Tuple(items) => write!(f, "Tuple({:?})", &**items),
            Value::Struct(s) => write!(f, "Struct({:?}, {:?})", s.class, s.fields()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::Seq(items) => {
                write!(f, "[")?;
                write_joined(f, items.as_slice())?;
                write!(f, "]")
            }
            Value::Array { items, .. } => {
                write!(f, "Array(")?;
                write_joined(f, items.as_slice())?;
                write!(f, ")")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{k}\": {v}")?;
                }
                write!(f, "}}")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_joined(f, items)?;
                write!(f, ")")
            }
            Value::Struct(s) => write!(f, "<instance #{}>", s.class.raw()),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
