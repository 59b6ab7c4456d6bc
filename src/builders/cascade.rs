// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use crate::{MenuCascade, MenuItem};

/// A builder type for [`MenuCascade`]
#[derive(Clone, Debug)]
pub struct MenuCascadeBuilder {
    item: MenuCascade,
}

impl Default for MenuCascadeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuCascadeBuilder {
    pub fn new() -> Self {
        Self {
            item: MenuCascade::new("", Vec::new()),
        }
    }

    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.item.label = label.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.item.enabled = enabled;
        self
    }

    /// Add an item to the end of the cascade.
    pub fn item<I: Into<MenuItem>>(mut self, item: I) -> Self {
        self.item.items.push(item.into());
        self
    }

    pub fn items(mut self, items: Vec<MenuItem>) -> Self {
        self.item.items.extend(items);
        self
    }

    pub fn build(self) -> MenuCascade {
        self.item
    }
}
