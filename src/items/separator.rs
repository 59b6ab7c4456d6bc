// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

/// A horizontal line between entries of a [`MenuCascade`](crate::MenuCascade).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuSeparator;

impl MenuSeparator {
    pub fn new() -> Self {
        Self
    }
}
