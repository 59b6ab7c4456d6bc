// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use super::{impl_action_accessors, Action};
use crate::{Value, Variable};

/// An entry with a check mark that mirrors a [`Variable`].
///
/// The entry is checked while the variable holds `on_value`. Toggling it writes
/// `on_value` or `off_value` to the variable. `on_value` and `off_value` always
/// share one kind, and a bound variable must accept that kind.
///
/// Values are scalars, variables are [`Variable`]s and `enabled` is a `bool`;
/// anything else does not compile:
/// ```compile_fail
/// # use menutree::MenuCheckbutton;
/// let mut check = MenuCheckbutton::new("Wrap");
/// check.set_on_value(|| ());
/// ```
/// ```compile_fail
/// # use menutree::MenuCheckbutton;
/// let mut check = MenuCheckbutton::new("Wrap");
/// check.set_off_value(vec![0]);
/// ```
/// ```compile_fail
/// # use menutree::MenuCheckbutton;
/// let mut check = MenuCheckbutton::new("Wrap");
/// check.set_variable(Some("wrap"));
/// ```
/// ```compile_fail
/// # use menutree::MenuCheckbutton;
/// let mut check = MenuCheckbutton::new("Wrap");
/// check.set_enabled(1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MenuCheckbutton {
    pub(crate) action: Action,
    pub(crate) variable: Option<Variable>,
    pub(crate) on_value: Value,
    pub(crate) off_value: Value,
}

impl MenuCheckbutton {
    /// Create a new enabled checkbutton toggling between `true` and `false`.
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            action: Action::new(label.into()),
            variable: None,
            on_value: Value::Bool(true),
            off_value: Value::Bool(false),
        }
    }

    pub fn variable(&self) -> Option<&Variable> {
        self.variable.as_ref()
    }

    /// Bind this checkbutton to `variable`, or unbind it with `None`.
    ///
    /// Fails if the variable cannot hold this checkbutton's on and off values.
    pub fn set_variable(&mut self, variable: Option<Variable>) -> crate::Result<()> {
        let (on_value, off_value) =
            checked_values(self.on_value.clone(), self.off_value.clone(), variable.as_ref())?;
        self.on_value = on_value;
        self.off_value = off_value;
        self.variable = variable;
        Ok(())
    }

    pub fn on_value(&self) -> &Value {
        &self.on_value
    }

    pub fn set_on_value<V: Into<Value>>(&mut self, on_value: V) -> crate::Result<()> {
        self.set_values(on_value, self.off_value.clone())
    }

    pub fn off_value(&self) -> &Value {
        &self.off_value
    }

    pub fn set_off_value<V: Into<Value>>(&mut self, off_value: V) -> crate::Result<()> {
        self.set_values(self.on_value.clone(), off_value)
    }

    /// Replace both values at once, which is the only way to change their kind.
    pub fn set_values<V: Into<Value>, W: Into<Value>>(
        &mut self,
        on_value: V,
        off_value: W,
    ) -> crate::Result<()> {
        let (on_value, off_value) =
            checked_values(on_value.into(), off_value.into(), self.variable.as_ref())?;
        self.on_value = on_value;
        self.off_value = off_value;
        Ok(())
    }

    /// Whether the bound variable currently holds `on_value`.
    ///
    /// Unbound checkbuttons report `None` since their state only exists on the native side.
    pub fn is_checked(&self) -> Option<bool> {
        self.variable.as_ref().map(|v| v.get() == self.on_value)
    }

    pub(crate) fn check(&self) -> crate::Result<()> {
        checked_values(
            self.on_value.clone(),
            self.off_value.clone(),
            self.variable.as_ref(),
        )
        .map(|_| ())
    }
}

impl_action_accessors!(MenuCheckbutton);

fn checked_values(
    on_value: Value,
    off_value: Value,
    variable: Option<&Variable>,
) -> crate::Result<(Value, Value)> {
    match variable {
        Some(variable) => Ok((
            variable.check("on_value", on_value)?,
            variable.check("off_value", off_value)?,
        )),
        None if on_value.kind() != off_value.kind() => Err(crate::Error::TypeMismatch {
            field: "off_value",
            expected: on_value.kind(),
            found: off_value.kind(),
        }),
        None => Ok((on_value, off_value)),
    }
}
