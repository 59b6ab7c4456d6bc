// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use crate::{accelerator::Accelerator, Callback, MenuCommand, MenuId};

/// A builder type for [`MenuCommand`]
#[derive(Clone, Debug)]
pub struct MenuCommandBuilder {
    item: MenuCommand,
}

impl Default for MenuCommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuCommandBuilder {
    pub fn new() -> Self {
        Self {
            item: MenuCommand::new(""),
        }
    }

    /// Set the id sent with menu events when this command is activated.
    pub fn id<I: Into<MenuId>>(mut self, id: I) -> Self {
        self.item.action.id = Some(id.into());
        self
    }

    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.item.action.label = label.into();
        self
    }

    /// Enable or disable this command.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.item.action.enabled = enabled;
        self
    }

    pub fn command<F: Fn() + 'static>(mut self, command: F) -> Self {
        self.item.action.command = Some(Callback::new(command));
        self
    }

    /// Set this command's accelerator.
    pub fn accelerator<A: TryInto<Accelerator>>(mut self, accelerator: Option<A>) -> crate::Result<Self>
    where
        crate::Error: From<<A as TryInto<Accelerator>>::Error>,
    {
        self.item.action.accelerator = accelerator.map(|a| a.try_into()).transpose()?;
        Ok(self)
    }

    pub fn build(self) -> MenuCommand {
        self.item
    }
}
