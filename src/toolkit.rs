// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The primitive calls menutree issues against a native toolkit.
//!
//! A backend implements [`Toolkit`] for the window side and [`NativeMenu`] for
//! each native menu widget. Everything here runs on the UI thread.

use std::{any::Any, rc::Rc};

use crate::accelerator::Accelerator;

/// Called when a command entry is activated.
pub type ActivateHandler = Rc<dyn Fn()>;

/// Called with the new checked state when the user toggles a checkable entry.
pub type ToggleHandler = Rc<dyn Fn(bool)>;

/// What a native menu widget is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativeMenuKind {
    /// The bar at the top of a window.
    MenuBar,
    /// A free-standing menu, e.g. a context menu.
    Popup,
    /// The menu opened by a cascade entry.
    Submenu,
}

/// A command entry as handed to [`NativeMenu::add_command`].
pub struct CommandEntry {
    pub label: String,
    pub enabled: bool,
    pub accelerator: Option<Accelerator>,
    pub on_activate: ActivateHandler,
}

/// How a checkable entry draws its indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStyle {
    Check,
    Radio,
}

/// A checkbutton or radiobutton entry as handed to [`NativeMenu::add_checkable`].
pub struct CheckableEntry {
    pub label: String,
    pub enabled: bool,
    pub accelerator: Option<Accelerator>,
    pub style: CheckStyle,
    pub checked: bool,
    pub on_toggle: ToggleHandler,
}

/// A live checkable entry whose indicator follows a bound variable.
pub trait NativeCheckable {
    /// Updates the indicator without calling the entry's toggle handler.
    fn set_checked(&self, checked: bool);

    fn is_checked(&self) -> bool;
}

/// A native menu widget.
pub trait NativeMenu {
    fn kind(&self) -> NativeMenuKind;

    /// Deletes every entry of this menu.
    fn delete_all(&self);

    fn entry_count(&self) -> usize;

    fn add_separator(&self);

    fn add_command(&self, entry: CommandEntry);

    fn add_checkable(&self, entry: CheckableEntry) -> Rc<dyn NativeCheckable>;

    /// Creates an empty menu to be filled and then attached with [`NativeMenu::add_cascade`].
    fn create_submenu(&self) -> Rc<dyn NativeMenu>;

    /// Attaches `submenu`, which must come from [`NativeMenu::create_submenu`] of the same backend.
    fn add_cascade(&self, label: &str, enabled: bool, submenu: Rc<dyn NativeMenu>);

    /// Shows this menu as a popup at the pointer. Only called for [`NativeMenuKind::Popup`] menus.
    fn popup(&self);

    fn as_any(self: Rc<Self>) -> Rc<dyn Any>;
}

/// The window side of a native toolkit.
pub trait Toolkit {
    fn create_menu(&self, kind: NativeMenuKind) -> Rc<dyn NativeMenu>;

    /// Shows `menu` as the window's menu bar, or removes the menu bar with `None`.
    fn attach_menubar(&self, menu: Option<Rc<dyn NativeMenu>>);

    fn set_title(&self, title: &str);
}
