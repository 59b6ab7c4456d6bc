// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use super::{impl_action_accessors, Action};
use crate::Callback;

/// A plain entry that runs a [`Callback`] when activated.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuCommand {
    pub(crate) action: Action,
}

impl MenuCommand {
    /// Create a new enabled command without a callback.
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            action: Action::new(label.into()),
        }
    }

    /// Create a new enabled command that runs `command` when activated.
    pub fn with_command<S, F>(label: S, command: F) -> Self
    where
        S: Into<String>,
        F: Fn() + 'static,
    {
        let mut item = Self::new(label);
        item.action.command = Some(Callback::new(command));
        item
    }
}

impl_action_accessors!(MenuCommand);
