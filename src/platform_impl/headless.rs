// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! An in-memory toolkit with no display.
//!
//! Menus built here can be inspected with [`HeadlessMenu::snapshot`] and
//! clicked with [`HeadlessMenu::invoke`], which makes this backend suitable
//! for tests and for running menu logic on machines without a display.

use std::{
    any::Any,
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::toolkit::{
    ActivateHandler, CheckStyle, CheckableEntry, CommandEntry, NativeCheckable, NativeMenu,
    NativeMenuKind, Toolkit,
};

/// A [`Toolkit`] that keeps its menus in memory.
#[derive(Default)]
pub struct HeadlessToolkit {
    menubar: RefCell<Option<Rc<HeadlessMenu>>>,
    title: RefCell<String>,
}

impl HeadlessToolkit {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// The menu currently attached as the menu bar.
    pub fn menubar(&self) -> Option<Rc<HeadlessMenu>> {
        self.menubar.borrow().clone()
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }
}

impl Toolkit for HeadlessToolkit {
    fn create_menu(&self, kind: NativeMenuKind) -> Rc<dyn NativeMenu> {
        Rc::new(HeadlessMenu::new(kind))
    }

    fn attach_menubar(&self, menu: Option<Rc<dyn NativeMenu>>) {
        let menu = menu.and_then(|m| m.as_any().downcast::<HeadlessMenu>().ok());
        *self.menubar.borrow_mut() = menu;
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }
}

enum Entry {
    Separator,
    Command(CommandEntry),
    Checkable(Rc<HeadlessCheckable>),
    Cascade {
        label: String,
        enabled: bool,
        menu: Rc<HeadlessMenu>,
    },
}

/// A checkbutton or radiobutton entry of a [`HeadlessMenu`].
pub struct HeadlessCheckable {
    entry: CheckableEntry,
    checked: Cell<bool>,
}

impl NativeCheckable for HeadlessCheckable {
    fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
    }

    fn is_checked(&self) -> bool {
        self.checked.get()
    }
}

/// What a [`HeadlessMenu`] entry looked like when [`HeadlessMenu::snapshot`] was taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntrySnapshot {
    Separator,
    Command {
        label: String,
        enabled: bool,
        accelerator: Option<String>,
    },
    Checkable {
        label: String,
        enabled: bool,
        accelerator: Option<String>,
        style: CheckStyle,
        checked: bool,
    },
    Cascade {
        label: String,
        enabled: bool,
        entries: Vec<EntrySnapshot>,
    },
}

/// A [`NativeMenu`] that keeps its entries in memory.
pub struct HeadlessMenu {
    kind: NativeMenuKind,
    entries: RefCell<Vec<Entry>>,
    clears: Cell<usize>,
    popups: Cell<usize>,
}

enum Target {
    Submenu(Rc<HeadlessMenu>),
    Activate(ActivateHandler),
    Toggle(Rc<HeadlessCheckable>),
}

impl HeadlessMenu {
    fn new(kind: NativeMenuKind) -> Self {
        Self {
            kind,
            entries: RefCell::new(Vec::new()),
            clears: Cell::new(0),
            popups: Cell::new(0),
        }
    }

    /// How many times every entry of this menu has been deleted.
    pub fn clear_count(&self) -> usize {
        self.clears.get()
    }

    /// How many times this menu has been popped up.
    pub fn popup_count(&self) -> usize {
        self.popups.get()
    }

    pub fn snapshot(&self) -> Vec<EntrySnapshot> {
        self.entries
            .borrow()
            .iter()
            .map(|entry| match entry {
                Entry::Separator => EntrySnapshot::Separator,
                Entry::Command(c) => EntrySnapshot::Command {
                    label: c.label.clone(),
                    enabled: c.enabled,
                    accelerator: c.accelerator.map(|a| a.label()),
                },
                Entry::Checkable(c) => EntrySnapshot::Checkable {
                    label: c.entry.label.clone(),
                    enabled: c.entry.enabled,
                    accelerator: c.entry.accelerator.map(|a| a.label()),
                    style: c.entry.style,
                    checked: c.checked.get(),
                },
                Entry::Cascade {
                    label,
                    enabled,
                    menu,
                } => EntrySnapshot::Cascade {
                    label: label.clone(),
                    enabled: *enabled,
                    entries: menu.snapshot(),
                },
            })
            .collect()
    }

    /// The submenu opened by the cascade entry at `index`.
    pub fn submenu(&self, index: usize) -> Option<Rc<HeadlessMenu>> {
        match self.entries.borrow().get(index) {
            Some(Entry::Cascade { menu, .. }) => Some(menu.clone()),
            _ => None,
        }
    }

    /// Clicks the entry found by following `path` through cascades, the way a user would.
    ///
    /// Checkbuttons flip their indicator and radiobuttons become selected before
    /// their handler runs. Returns `false` if the path does not lead to an
    /// enabled command, checkbutton or radiobutton.
    pub fn invoke(&self, path: &[usize]) -> bool {
        let Some((&index, rest)) = path.split_first() else {
            return false;
        };

        // handlers may rebuild this very menu, so the entries must not stay borrowed
        let target = match (self.entries.borrow().get(index), rest.is_empty()) {
            (Some(Entry::Cascade { enabled: true, menu, .. }), false) => {
                Target::Submenu(menu.clone())
            }
            (Some(Entry::Command(c)), true) if c.enabled => {
                Target::Activate(c.on_activate.clone())
            }
            (Some(Entry::Checkable(c)), true) if c.entry.enabled => Target::Toggle(c.clone()),
            _ => return false,
        };

        match target {
            Target::Submenu(menu) => menu.invoke(rest),
            Target::Activate(on_activate) => {
                on_activate();
                true
            }
            Target::Toggle(checkable) => {
                let checked = match checkable.entry.style {
                    CheckStyle::Check => !checkable.checked.get(),
                    CheckStyle::Radio => true,
                };
                checkable.checked.set(checked);
                let on_toggle = checkable.entry.on_toggle.clone();
                on_toggle(checked);
                true
            }
        }
    }
}

impl NativeMenu for HeadlessMenu {
    fn kind(&self) -> NativeMenuKind {
        self.kind
    }

    fn delete_all(&self) {
        self.entries.borrow_mut().clear();
        self.clears.set(self.clears.get() + 1);
    }

    fn entry_count(&self) -> usize {
        self.entries.borrow().len()
    }

    fn add_separator(&self) {
        self.entries.borrow_mut().push(Entry::Separator);
    }

    fn add_command(&self, entry: CommandEntry) {
        self.entries.borrow_mut().push(Entry::Command(entry));
    }

    fn add_checkable(&self, entry: CheckableEntry) -> Rc<dyn NativeCheckable> {
        let checkable = Rc::new(HeadlessCheckable {
            checked: Cell::new(entry.checked),
            entry,
        });
        self.entries
            .borrow_mut()
            .push(Entry::Checkable(checkable.clone()));
        checkable
    }

    fn create_submenu(&self) -> Rc<dyn NativeMenu> {
        Rc::new(HeadlessMenu::new(NativeMenuKind::Submenu))
    }

    fn add_cascade(&self, label: &str, enabled: bool, submenu: Rc<dyn NativeMenu>) {
        // a submenu from another backend cannot be shown here
        if let Ok(menu) = submenu.as_any().downcast::<HeadlessMenu>() {
            self.entries.borrow_mut().push(Entry::Cascade {
                label: label.to_string(),
                enabled,
                menu,
            });
        }
    }

    fn popup(&self) {
        self.popups.set(self.popups.get() + 1);
    }

    fn as_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}
