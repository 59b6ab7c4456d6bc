// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Structural validation of menu trees.
//!
//! The walk is recursive with no depth limit of its own; a tree nested deeply
//! enough to exhaust the thread's stack will overflow it.

use crate::{MenuItem, MenuItemType};

/// Validates `items` and, recursively, the items of every cascade among them.
///
/// When `top_level` is `true` only cascades are accepted directly in `items`;
/// anything else fails with [`Error::NotAllowedAtTopLevel`](crate::Error::NotAllowedAtTopLevel).
/// Nested items are always validated with `top_level` set to `false`.
/// An empty sequence is always valid.
pub fn validate(items: &[MenuItem], top_level: bool) -> crate::Result<()> {
    for (position, item) in items.iter().enumerate() {
        match item {
            MenuItem::Cascade(cascade) => validate(cascade.items(), false)?,
            _ if top_level && !allowed_at_top_level(item.item_type()) => {
                return Err(crate::Error::NotAllowedAtTopLevel {
                    position,
                    item: item.item_type(),
                })
            }
            MenuItem::Separator(_)
            | MenuItem::Command(_)
            | MenuItem::Checkbutton(_)
            | MenuItem::Radiobutton(_) => item.check()?,
        }
    }

    Ok(())
}

/// Validates the top-level items of a menu, which must all be cascades on a menu bar.
pub fn validate_menu(items: &[MenuItem], is_menubar: bool) -> crate::Result<()> {
    validate(items, is_menubar)
}

/// Counts every item of the tree, cascades included.
pub(crate) fn count_items(items: &[MenuItem]) -> usize {
    items
        .iter()
        .map(|item| match item {
            MenuItem::Cascade(cascade) => 1 + count_items(cascade.items()),
            _ => 1,
        })
        .sum()
}

/// Whether `item_type` may appear directly in a menu bar.
pub fn allowed_at_top_level(item_type: MenuItemType) -> bool {
    item_type == MenuItemType::Cascade
}
