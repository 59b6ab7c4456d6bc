// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use crate::MenuItem;

/// An entry that opens a nested menu of further [`MenuItem`]s.
///
/// Cascades may nest to any depth and may be empty. They are the only items
/// allowed at the top level of a menu bar.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuCascade {
    pub(crate) label: String,
    pub(crate) enabled: bool,
    pub(crate) items: Vec<MenuItem>,
}

impl MenuCascade {
    pub fn new<S: Into<String>>(label: S, items: Vec<MenuItem>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            items,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label<S: Into<String>>(&mut self, label: S) {
        self.label = label.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<MenuItem>) {
        self.items = items;
    }

    /// Add an item to the end of this cascade.
    pub fn push<I: Into<MenuItem>>(&mut self, item: I) {
        self.items.push(item.into());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
