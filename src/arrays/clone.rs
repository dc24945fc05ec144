// src/arrays/clone.rs

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use serde_json::Value;

/// A symbol: a description plus an identity. Two symbols are the same only if they
/// share the identity, whatever their descriptions.
#[derive(Debug, Clone)]
pub struct Symbol {
    identity: Rc<Option<String>>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Symbol { identity: Rc::new(description.map(str::to_string)) }
    }

    pub fn description(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn same_as(&self, other: &Symbol) -> bool {
        Rc::ptr_eq(&self.identity, &other.identity)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

/// Every kind of data `clone_datum` knows how to copy.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    /// Scalars, arrays and objects.
    Json(Value),
    Set(BTreeSet<String>),
    Map(BTreeMap<String, Value>),
    Symbol(Symbol),
}

/// Structural copy of `datum`, one rule per kind. The copy never shares storage with
/// the input; a symbol copy keeps the description but gets a new identity.
pub fn clone_datum(datum: &Datum) -> Datum {
    match datum {
        Datum::Json(value) => Datum::Json(copy_value(value)),
        Datum::Set(items) => Datum::Set(items.iter().cloned().collect()),
        Datum::Map(entries) => Datum::Map(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), copy_value(value)))
                .collect(),
        ),
        Datum::Symbol(symbol) => Datum::Symbol(Symbol::new(symbol.description())),
    }
}

fn copy_value(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(copy_value).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), copy_value(field)))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}
