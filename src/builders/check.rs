// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use crate::{accelerator::Accelerator, Callback, MenuCheckbutton, MenuId, Value, Variable};

/// A builder type for [`MenuCheckbutton`]
///
/// Values and variable are only checked against each other in [`build`](Self::build),
/// so they can be given in any order.
#[derive(Clone, Debug)]
pub struct MenuCheckbuttonBuilder {
    item: MenuCheckbutton,
}

impl Default for MenuCheckbuttonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuCheckbuttonBuilder {
    pub fn new() -> Self {
        Self {
            item: MenuCheckbutton::new(""),
        }
    }

    /// Set the id sent with menu events when this checkbutton is toggled.
    pub fn id<I: Into<MenuId>>(mut self, id: I) -> Self {
        self.item.action.id = Some(id.into());
        self
    }

    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.item.action.label = label.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.item.action.enabled = enabled;
        self
    }

    pub fn command<F: Fn() + 'static>(mut self, command: F) -> Self {
        self.item.action.command = Some(Callback::new(command));
        self
    }

    pub fn variable(mut self, variable: Variable) -> Self {
        self.item.variable = Some(variable);
        self
    }

    pub fn on_value<V: Into<Value>>(mut self, on_value: V) -> Self {
        self.item.on_value = on_value.into();
        self
    }

    pub fn off_value<V: Into<Value>>(mut self, off_value: V) -> Self {
        self.item.off_value = off_value.into();
        self
    }

    /// Set this checkbutton's accelerator.
    pub fn accelerator<A: TryInto<Accelerator>>(mut self, accelerator: Option<A>) -> crate::Result<Self>
    where
        crate::Error: From<<A as TryInto<Accelerator>>::Error>,
    {
        self.item.action.accelerator = accelerator.map(|a| a.try_into()).transpose()?;
        Ok(self)
    }

    /// Build this checkbutton, failing if its values and variable disagree on a kind.
    pub fn build(self) -> crate::Result<MenuCheckbutton> {
        let mut item = self.item;
        let variable = item.variable.take();
        item.set_variable(variable)?;
        item.check()?;
        Ok(item)
    }
}
