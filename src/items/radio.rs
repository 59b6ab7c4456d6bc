// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use super::{impl_action_accessors, Action};
use crate::{Value, Variable};

/// One choice of a group of entries sharing a [`Variable`].
///
/// The entry is selected while the variable holds `value`, and selecting it
/// writes `value` to the variable.
///
/// ```compile_fail
/// # use menutree::MenuRadiobutton;
/// let radio = MenuRadiobutton::new(|| (), "English");
/// ```
/// ```compile_fail
/// # use menutree::MenuRadiobutton;
/// let mut radio = MenuRadiobutton::new("eng", "English");
/// radio.set_value(std::rc::Rc::new(|| ()));
/// ```
/// ```compile_fail
/// # use menutree::MenuRadiobutton;
/// let mut radio = MenuRadiobutton::new("eng", "English");
/// radio.set_variable(Some("language"));
/// ```
/// ```compile_fail
/// # use menutree::MenuRadiobutton;
/// let mut radio = MenuRadiobutton::new("eng", "English");
/// radio.set_enabled("yes");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MenuRadiobutton {
    pub(crate) action: Action,
    pub(crate) value: Value,
    pub(crate) variable: Option<Variable>,
}

impl MenuRadiobutton {
    pub fn new<V: Into<Value>, S: Into<String>>(value: V, label: S) -> Self {
        Self {
            action: Action::new(label.into()),
            value: value.into(),
            variable: None,
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Fails if a bound variable cannot hold `value`.
    pub fn set_value<V: Into<Value>>(&mut self, value: V) -> crate::Result<()> {
        let value = value.into();
        self.value = match &self.variable {
            Some(variable) => variable.check("value", value)?,
            None => value,
        };
        Ok(())
    }

    pub fn variable(&self) -> Option<&Variable> {
        self.variable.as_ref()
    }

    /// Bind this radiobutton to `variable`, or unbind it with `None`.
    pub fn set_variable(&mut self, variable: Option<Variable>) -> crate::Result<()> {
        if let Some(variable) = &variable {
            self.value = variable.check("value", self.value.clone())?;
        }
        self.variable = variable;
        Ok(())
    }

    /// Whether the bound variable currently holds this radiobutton's value.
    pub fn is_selected(&self) -> Option<bool> {
        self.variable.as_ref().map(|v| v.get() == self.value)
    }

    pub(crate) fn check(&self) -> crate::Result<()> {
        match &self.variable {
            Some(variable) => variable.check("value", self.value.clone()).map(|_| ()),
            None => Ok(()),
        }
    }
}

impl_action_accessors!(MenuRadiobutton);
