// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! A [`Toolkit`] drawing menus with gtk.

mod accelerator;

use std::{
    any::Any,
    cell::{Cell, RefCell},
    rc::Rc,
};

use gtk::prelude::*;

use crate::toolkit::{
    CheckStyle, CheckableEntry, CommandEntry, NativeCheckable, NativeMenu, NativeMenuKind,
    Toolkit,
};

use self::accelerator::register_accelerator;

/// Shows menus in a gtk window.
///
/// The window's child is moved into a vertical box so the menu bar can sit above it.
pub struct GtkToolkit {
    window: gtk::Window,
    container: gtk::Box,
    menubar: RefCell<Option<gtk::MenuBar>>,
    accel_group: gtk::AccelGroup,
}

impl GtkToolkit {
    pub fn new<W>(window: &W) -> Rc<Self>
    where
        W: IsA<gtk::Window> + IsA<gtk::Container>,
    {
        let window: gtk::Window = window.clone().upcast();
        let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
        if let Some(child) = window.child() {
            window.remove(&child);
            container.pack_start(&child, true, true, 0);
        }
        window.add(&container);

        let accel_group = gtk::AccelGroup::new();
        window.add_accel_group(&accel_group);
        container.show_all();

        Rc::new(Self {
            window,
            container,
            menubar: RefCell::new(None),
            accel_group,
        })
    }

    /// The box holding the menu bar and the window's content.
    pub fn container(&self) -> &gtk::Box {
        &self.container
    }
}

impl Toolkit for GtkToolkit {
    fn create_menu(&self, kind: NativeMenuKind) -> Rc<dyn NativeMenu> {
        let shell: gtk::MenuShell = match kind {
            NativeMenuKind::MenuBar => gtk::MenuBar::new().upcast(),
            NativeMenuKind::Popup | NativeMenuKind::Submenu => gtk::Menu::new().upcast(),
        };
        Rc::new(GtkMenu {
            kind,
            shell,
            accel_group: self.accel_group.clone(),
        })
    }

    fn attach_menubar(&self, menu: Option<Rc<dyn NativeMenu>>) {
        if let Some(old) = self.menubar.borrow_mut().take() {
            self.container.remove(&old);
        }

        let menubar = menu
            .and_then(|m| m.as_any().downcast::<GtkMenu>().ok())
            .and_then(|m| m.shell.clone().downcast::<gtk::MenuBar>().ok());
        if let Some(menubar) = menubar {
            self.container.pack_start(&menubar, false, false, 0);
            self.container.reorder_child(&menubar, 0);
            menubar.show_all();
            *self.menubar.borrow_mut() = Some(menubar);
        }
    }

    fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

/// A gtk menu bar or menu.
pub struct GtkMenu {
    kind: NativeMenuKind,
    shell: gtk::MenuShell,
    accel_group: gtk::AccelGroup,
}

struct GtkCheckable {
    item: gtk::CheckMenuItem,
    // set while the indicator is updated from a variable
    syncing: Rc<Cell<bool>>,
}

impl NativeCheckable for GtkCheckable {
    fn set_checked(&self, checked: bool) {
        self.syncing.set(true);
        self.item.set_active(checked);
        self.syncing.set(false);
    }

    fn is_checked(&self) -> bool {
        self.item.is_active()
    }
}

impl NativeMenu for GtkMenu {
    fn kind(&self) -> NativeMenuKind {
        self.kind
    }

    fn delete_all(&self) {
        for child in self.shell.children() {
            self.shell.remove(&child);
        }
    }

    fn entry_count(&self) -> usize {
        self.shell.children().len()
    }

    fn add_separator(&self) {
        let separator = gtk::SeparatorMenuItem::new();
        self.shell.append(&separator);
        separator.show();
    }

    fn add_command(&self, entry: CommandEntry) {
        let item = gtk::MenuItem::with_label(&entry.label);
        item.set_sensitive(entry.enabled);
        let on_activate = entry.on_activate;
        item.connect_activate(move |_| on_activate());
        if let Some(accelerator) = &entry.accelerator {
            register_accelerator(&item, &self.accel_group, accelerator);
        }
        self.shell.append(&item);
        item.show();
    }

    fn add_checkable(&self, entry: CheckableEntry) -> Rc<dyn NativeCheckable> {
        let item = gtk::CheckMenuItem::with_label(&entry.label);
        item.set_sensitive(entry.enabled);
        item.set_draw_as_radio(entry.style == CheckStyle::Radio);
        item.set_active(entry.checked);

        let syncing = Rc::new(Cell::new(false));
        let syncing_c = syncing.clone();
        let on_toggle = entry.on_toggle;
        item.connect_toggled(move |item| {
            if !syncing_c.get() {
                on_toggle(item.is_active());
            }
        });
        if let Some(accelerator) = &entry.accelerator {
            register_accelerator(&item, &self.accel_group, accelerator);
        }
        self.shell.append(&item);
        item.show();

        Rc::new(GtkCheckable { item, syncing })
    }

    fn create_submenu(&self) -> Rc<dyn NativeMenu> {
        Rc::new(GtkMenu {
            kind: NativeMenuKind::Submenu,
            shell: gtk::Menu::new().upcast(),
            accel_group: self.accel_group.clone(),
        })
    }

    fn add_cascade(&self, label: &str, enabled: bool, submenu: Rc<dyn NativeMenu>) {
        // submenus always come from `create_submenu` on this backend
        let Ok(submenu) = submenu.as_any().downcast::<GtkMenu>() else {
            return;
        };
        let Some(menu) = submenu.shell.downcast_ref::<gtk::Menu>() else {
            return;
        };

        let item = gtk::MenuItem::with_label(label);
        item.set_sensitive(enabled);
        item.set_submenu(Some(menu));
        self.shell.append(&item);
        item.show_all();
    }

    fn popup(&self) {
        if let Some(menu) = self.shell.downcast_ref::<gtk::Menu>() {
            menu.show_all();
            menu.popup_at_pointer(None);
        }
    }

    fn as_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}
