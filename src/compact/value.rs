use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use derive_more::{From, IsVariant};

use super::IsZero;
use crate::util::fmt::DebugRaw;

/// A shared, buffered channel of values. Emptiness is the number of buffered items.
pub type Channel = Rc<RefCell<VecDeque<Value>>>;

/// A shared callable taking and returning [`Value`]s.
pub type Func = Rc<dyn Fn(&Value) -> Value>;

/// A dynamically typed value, for sequences whose elements differ in kind at runtime.
///
/// Every kind has an explicit rule for [`IsZero`]:
///
/// | Variant | Zero when |
/// |-|-|
/// | `Nil` | always |
/// | `Bool`, `Int`, `Uint`, `Float`, `Str` | the scalar is zero (`false`, `0`, `0.0`, `""`) |
/// | `List`, `Map` | no elements |
/// | `Record` | every field is zero (so a record with no fields is zero) |
/// | `Ref`, `Func` | null |
/// | `Chan` | null, or nothing buffered |
///
/// `Ref(Some(_))` is never zero, even if it points at `Nil` or another zero value: only one layer
/// of indirection is looked at.
///
/// # Examples
/// ```
/// # use std::rc::Rc;
/// # use collection_utils::compact::{compact, Value};
/// let items = [
///     Value::Int(0),
///     Value::Int(1),
///     Value::Str(String::new()),
///     Value::Nil,
///     Value::Ref(Some(Rc::new(Value::Int(0)))),
///     Value::Ref(None),
/// ];
/// let kept = compact(&items);
/// assert_eq!(kept.len(), 2);
/// assert!(kept[0].is_int());
/// assert!(kept[1].is_ref());
/// ```
#[derive(Clone, Default, From, IsVariant)]
pub enum Value {
    #[default]
    #[from(ignore)]
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    #[from(ignore)]
    Record(Vec<(String, Value)>),
    #[from(ignore)]
    Ref(Option<Rc<Value>>),
    #[from(ignore)]
    Func(Option<Func>),
    #[from(ignore)]
    Chan(Option<Channel>),
}

impl Value {
    /// Creates a non-null reference to `value`.
    pub fn reference(value: Value) -> Value {
        Value::Ref(Some(Rc::new(value)))
    }

    /// Creates a non-null callable.
    pub fn func(f: impl Fn(&Value) -> Value + 'static) -> Value {
        Value::Func(Some(Rc::new(f)))
    }

    /// Creates a non-null channel with the provided items already buffered.
    pub fn chan(buffered: impl IntoIterator<Item = Value>) -> Value {
        Value::Chan(Some(Rc::new(RefCell::new(buffered.into_iter().collect()))))
    }

    /// Creates a record from named fields, keeping their order.
    pub fn record<S: Into<String>>(fields: impl IntoIterator<Item = (S, Value)>) -> Value {
        Value::Record(fields.into_iter().map(|(name, value)| (name.into(), value)).collect())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl IsZero for Value {
    fn is_zero(&self) -> bool {
        match self {
            Value::Nil => true,
            Value::Bool(b) => b.is_zero(),
            Value::Int(i) => i.is_zero(),
            Value::Uint(u) => u.is_zero(),
            Value::Float(f) => f.is_zero(),
            Value::Str(s) => s.is_zero(),
            Value::List(items) => items.is_zero(),
            Value::Map(entries) => entries.is_zero(),
            Value::Record(fields) => fields.iter().all(|(_, value)| value.is_zero()),
            Value::Ref(target) => target.is_zero(),
            Value::Func(f) => f.is_none(),
            Value::Chan(chan) => match chan {
                Some(buffer) => buffer.borrow().is_empty(),
                None => true,
            },
        }
    }
}

impl PartialEq for Value {
    /// Structural equality for data. References compare their targets; callables and channels
    /// compare by identity, and two nulls of the same kind are equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Ref(a), Value::Ref(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            },
            (Value::Chan(a), Value::Chan(b)) => match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            },
            _ => false,
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Uint(u) => f.debug_tuple("Uint").field(u).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Value::Record(fields) => {
                let mut record = f.debug_struct("Record");
                for (name, value) in fields {
                    record.field(name, value);
                }
                record.finish()
            }
            Value::Ref(target) => f.debug_tuple("Ref").field(target).finish(),
            Value::Func(func) => f
                .debug_tuple("Func")
                .field(&func.as_ref().map(|_| DebugRaw("<fn>")))
                .finish(),
            Value::Chan(chan) => f
                .debug_tuple("Chan")
                .field(&chan.as_ref().map(|buffer| buffer.borrow().len()))
                .finish(),
        }
    }
}
