// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Scalar values and the shared cells that checkable menu entries bind to.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

/// A scalar stored in a [`Variable`] or carried by a checkable menu item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// The kind of a [`Value`], fixed for the lifetime of a [`Variable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Str,
    Int,
    Float,
    Bool,
}

impl ValueKind {
    /// Whether a value of kind `other` can be stored in a cell of this kind.
    ///
    /// Kinds must match exactly, except that integers widen into float cells.
    pub fn accepts(self, other: ValueKind) -> bool {
        self == other || (self == ValueKind::Float && other == ValueKind::Int)
    }

    /// The value a fresh cell of this kind starts with.
    pub fn default_value(self) -> Value {
        match self {
            ValueKind::Str => Value::Str(String::new()),
            ValueKind::Int => Value::Int(0),
            ValueKind::Float => Value::Float(0.0),
            ValueKind::Bool => Value::Bool(false),
        }
    }

    fn coerce(self, value: Value) -> Value {
        match (self, value) {
            (ValueKind::Float, Value::Int(i)) => Value::Float(i as f64),
            (_, value) => value,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Str => "string",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "boolean",
        })
    }
}

type Listener = dyn Fn(&Value);

struct VariableInner {
    kind: ValueKind,
    value: RefCell<Value>,
    listeners: RefCell<Vec<Weak<Listener>>>,
}

/// A shared mutable cell that checkbuttons and radiobuttons read their
/// checked state from and write to when toggled.
///
/// Cloning a [`Variable`] yields another handle to the same cell. Two handles
/// compare equal only if they point to the same cell.
#[derive(Clone)]
pub struct Variable(Rc<VariableInner>);

impl Variable {
    /// Creates a new cell holding `initial`. The cell's kind is the kind of `initial`.
    pub fn new<V: Into<Value>>(initial: V) -> Self {
        let value = initial.into();
        Self(Rc::new(VariableInner {
            kind: value.kind(),
            value: RefCell::new(value),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    /// Creates a new cell of `kind` holding that kind's default value.
    pub fn with_kind(kind: ValueKind) -> Self {
        Self::new(kind.default_value())
    }

    pub fn string<S: Into<String>>(initial: S) -> Self {
        Self::new(Value::Str(initial.into()))
    }

    pub fn int(initial: i64) -> Self {
        Self::new(Value::Int(initial))
    }

    pub fn double(initial: f64) -> Self {
        Self::new(Value::Float(initial))
    }

    pub fn boolean(initial: bool) -> Self {
        Self::new(Value::Bool(initial))
    }

    pub fn kind(&self) -> ValueKind {
        self.0.kind
    }

    pub fn get(&self) -> Value {
        self.0.value.borrow().clone()
    }

    /// Writes a new value to the cell and notifies every live binding.
    ///
    /// Fails with [`Error::TypeMismatch`](crate::Error::TypeMismatch) if the value's
    /// kind is not accepted by this cell.
    pub fn set<V: Into<Value>>(&self, value: V) -> crate::Result<()> {
        let value = self.check("variable", value.into())?;
        *self.0.value.borrow_mut() = value.clone();
        self.notify(&value);
        Ok(())
    }

    /// Writes a value already known to be of this cell's kind.
    pub(crate) fn store(&self, value: Value) {
        debug_assert!(self.0.kind.accepts(value.kind()));
        *self.0.value.borrow_mut() = value.clone();
        self.notify(&value);
    }

    pub(crate) fn check(&self, field: &'static str, value: Value) -> crate::Result<Value> {
        if self.0.kind.accepts(value.kind()) {
            Ok(self.0.kind.coerce(value))
        } else {
            Err(crate::Error::TypeMismatch {
                field,
                expected: self.0.kind,
                found: value.kind(),
            })
        }
    }

    /// Registers a listener that lives as long as the caller keeps the `Rc` alive.
    pub(crate) fn subscribe(&self, listener: &Rc<Listener>) {
        let mut listeners = self.0.listeners.borrow_mut();
        listeners.retain(|l| l.strong_count() > 0);
        listeners.push(Rc::downgrade(listener));
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.0
            .listeners
            .borrow()
            .iter()
            .filter(|l| l.strong_count() > 0)
            .count()
    }

    fn notify(&self, value: &Value) {
        // listeners may write to native widgets that call back into this cell,
        // so no borrow may be held while they run
        let live = {
            let mut listeners = self.0.listeners.borrow_mut();
            listeners.retain(|l| l.strong_count() > 0);
            listeners.iter().filter_map(Weak::upgrade).collect::<Vec<_>>()
        };
        for listener in live {
            listener(value);
        }
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("kind", &self.0.kind)
            .field("value", &*self.0.value.borrow())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn rejects_values_of_another_kind() {
        let var = Variable::string("eng");
        let err = var.set(1).unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(var.get(), Value::from("eng"));
    }

    #[test]
    fn widens_integers_into_float_cells() {
        let var = Variable::double(0.5);
        var.set(2).unwrap();
        assert_eq!(var.get(), Value::Float(2.0));
    }

    #[test]
    fn equality_is_identity() {
        let a = Variable::boolean(true);
        let b = Variable::boolean(true);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn dropped_listeners_are_not_called() {
        let var = Variable::int(0);
        let hits = Rc::new(Cell::new(0));
        let hits_c = hits.clone();
        let listener: Rc<Listener> = Rc::new(move |_: &Value| hits_c.set(hits_c.get() + 1));
        var.subscribe(&listener);

        var.set(1).unwrap();
        assert_eq!(hits.get(), 1);
        assert_eq!(var.listener_count(), 1);

        drop(listener);
        var.set(2).unwrap();
        assert_eq!(hits.get(), 1);
        assert_eq!(var.listener_count(), 0);
    }
}
