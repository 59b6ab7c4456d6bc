// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    thread::{self, ThreadId},
};

use crate::{
    reconcile::{rebuild, NativeTree},
    toolkit::{NativeMenu, NativeMenuKind},
    validate::{count_items, validate_menu},
    window::WindowInner,
    MenuId, MenuItem, Window,
};

struct MenuInner {
    id: MenuId,
    parent: Weak<WindowInner>,
    is_menubar: bool,
    items: Vec<MenuItem>,
    native: Rc<dyn NativeMenu>,
    tree: NativeTree,
    ui_thread: ThreadId,
}

/// A menu owned by a [`Window`], either its menu bar or a free-standing menu.
///
/// Assigning [`Menu::set_items`] validates the whole tree and then rebuilds
/// the native menu from scratch. Cloning a [`Menu`] yields another handle to the same menu.
#[derive(Clone)]
pub struct Menu {
    inner: Rc<RefCell<MenuInner>>,
}

impl Menu {
    /// Creates an empty menu for `parent`.
    ///
    /// A menu bar only accepts [`MenuCascade`](crate::MenuCascade)s at its top level and
    /// can be attached with [`Window::set_menu_bar`].
    pub fn new(parent: &Window, is_menubar: bool) -> Self {
        let kind = if is_menubar {
            NativeMenuKind::MenuBar
        } else {
            NativeMenuKind::Popup
        };
        let native = parent.toolkit().create_menu(kind);
        Self {
            inner: Rc::new(RefCell::new(MenuInner {
                id: MenuId::next(),
                parent: Rc::downgrade(&parent.inner),
                is_menubar,
                items: Vec::new(),
                native,
                tree: NativeTree::default(),
                ui_thread: parent.inner.ui_thread,
            })),
        }
    }

    /// Creates a menu for `parent` and assigns `items` to it.
    pub fn with_items(parent: &Window, is_menubar: bool, items: Vec<MenuItem>) -> crate::Result<Self> {
        let menu = Self::new(parent, is_menubar);
        menu.set_items(items)?;
        Ok(menu)
    }

    /// Returns a unique identifier associated with this menu.
    pub fn id(&self) -> MenuId {
        self.inner.borrow().id.clone()
    }

    pub fn is_menubar(&self) -> bool {
        self.inner.borrow().is_menubar
    }

    /// The window this menu was created for, if it is still alive.
    pub fn parent(&self) -> Option<Window> {
        self.inner.borrow().parent.upgrade().map(|inner| Window { inner })
    }

    /// Returns the current top-level items.
    pub fn items(&self) -> Vec<MenuItem> {
        self.inner.borrow().items.clone()
    }

    /// Replaces every item of this menu.
    ///
    /// The new tree is validated first. If validation fails nothing changes,
    /// neither [`Menu::items`] nor the native menu. Otherwise all native entries
    /// are deleted and rebuilt from `items`.
    ///
    /// Only a `Vec<MenuItem>` is accepted; tuples and foreign elements do not compile:
    /// ```compile_fail
    /// # use menutree::{Menu, MenuCascade, MenuItem, Window};
    /// let menu = Menu::new(&Window::headless(), true);
    /// let file: MenuItem = MenuCascade::new("File", vec![]).into();
    /// menu.set_items((file,));
    /// ```
    /// ```compile_fail
    /// # use menutree::{Menu, Window};
    /// let menu = Menu::new(&Window::headless(), true);
    /// menu.set_items(vec![1, 2, 3]);
    /// ```
    ///
    /// ## Panics:
    ///
    /// In debug builds, panics if called from another thread than the one that created the window.
    pub fn set_items(&self, items: Vec<MenuItem>) -> crate::Result<()> {
        let mut inner = self.inner.borrow_mut();
        debug_assert_eq!(
            thread::current().id(),
            inner.ui_thread,
            "menus must be modified on the thread that created their window"
        );

        if inner.parent.strong_count() == 0 {
            return Err(crate::Error::ParentDestroyed);
        }
        validate_menu(&items, inner.is_menubar)?;

        let tree = rebuild(&inner.native, &items);
        log::debug!(
            "menu {} now holds {} items ({} top-level)",
            inner.id,
            count_items(&items),
            items.len()
        );
        inner.tree = tree;
        inner.items = items;
        Ok(())
    }

    /// Shows this menu at the pointer, e.g. as a context menu.
    ///
    /// Fails for menu bars and for menus whose window has been destroyed.
    pub fn popup(&self) -> crate::Result<()> {
        let inner = self.inner.borrow();
        if inner.is_menubar {
            return Err(crate::Error::MenuBarPopup);
        }
        if inner.parent.strong_count() == 0 {
            return Err(crate::Error::ParentDestroyed);
        }
        let native = inner.native.clone();
        // the toolkit may run a nested loop that activates entries of this menu
        drop(inner);
        native.popup();
        Ok(())
    }

    /// The number of entries currently shown by the native menu.
    pub fn native_entry_count(&self) -> usize {
        self.inner.borrow().native.entry_count()
    }

    pub(crate) fn native(&self) -> Rc<dyn NativeMenu> {
        self.inner.borrow().native.clone()
    }

    pub(crate) fn belongs_to(&self, window: &Window) -> bool {
        Weak::ptr_eq(&self.inner.borrow().parent, &Rc::downgrade(&window.inner))
    }
}

impl std::fmt::Debug for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Menu")
            .field("id", &inner.id)
            .field("is_menubar", &inner.is_menubar)
            .field("items", &inner.items)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        headless::{EntrySnapshot, HeadlessMenu, HeadlessToolkit},
        Error, MenuCascade, MenuCheckbutton, MenuCommand, MenuRadiobutton, MenuSeparator,
        Variable,
    };

    fn file_menu() -> Vec<MenuItem> {
        vec![MenuCascade::new(
            "File",
            vec![
                MenuCommand::new("New").into(),
                MenuCommand::new("Open...").into(),
                MenuCommand::new("Save").into(),
                MenuSeparator::new().into(),
                MenuCommand::new("Exit").into(),
            ],
        )
        .into()]
    }

    #[test]
    fn good_params() {
        let root = Window::headless();
        let menu = Menu::new(&root, true);
        assert!(menu.is_menubar());
        assert!(menu.items().is_empty());
        assert!(menu.parent().is_some());
        assert!(!Menu::new(&root, false).is_menubar());
    }

    #[test]
    fn items_round_trip() {
        let root = Window::headless();
        let menu = Menu::new(&root, true);
        menu.set_items(file_menu()).unwrap();
        assert_eq!(menu.items(), file_menu());
        assert_eq!(menu.native_entry_count(), 1);
    }

    #[test]
    fn commands() {
        let root = Window::headless();
        let menu = Menu::new(&root, true);
        menu.set_items(vec![MenuCascade::new(
            "File",
            vec![MenuCommand::new("New").into()],
        )
        .into()])
        .unwrap();

        let err = menu
            .set_items(vec![MenuCommand::new("Fail").into()])
            .unwrap_err();
        assert!(err.is_value_error());
    }

    #[test]
    fn separator() {
        let root = Window::headless();
        let menu = Menu::new(&root, true);
        menu.set_items(vec![MenuCascade::new(
            "File",
            vec![MenuSeparator::new().into()],
        )
        .into()])
        .unwrap();

        let err = menu
            .set_items(vec![MenuSeparator::new().into()])
            .unwrap_err();
        assert_eq!(
            err,
            Error::NotAllowedAtTopLevel {
                position: 0,
                item: crate::MenuItemType::Separator,
            }
        );
    }

    #[test]
    fn checkbutton_and_radiobutton_at_top_level() {
        let root = Window::headless();
        let menu = Menu::new(&root, true);
        assert!(menu
            .set_items(vec![MenuCheckbutton::new("Fail").into()])
            .unwrap_err()
            .is_value_error());
        assert!(menu
            .set_items(vec![MenuRadiobutton::new("eng", "Fail").into()])
            .unwrap_err()
            .is_value_error());
    }

    #[test]
    fn cascades_nest() {
        let root = Window::headless();
        let menu = Menu::new(&root, true);
        let items: Vec<MenuItem> = vec![MenuCascade::new(
            "File",
            vec![MenuCascade::new("Recently opened", vec![]).into()],
        )
        .into()];
        menu.set_items(items.clone()).unwrap();
        assert_eq!(menu.items(), items);
    }

    #[test]
    fn failed_assignment_changes_nothing() {
        let toolkit = HeadlessToolkit::new();
        let root = Window::new(toolkit.clone());
        let menu = Menu::new(&root, true);
        root.set_menu_bar(&menu).unwrap();
        menu.set_items(file_menu()).unwrap();

        let bar = toolkit.menubar().unwrap();
        let before = bar.snapshot();
        let clears = bar.clear_count();

        let mut bad = file_menu();
        bad.push(MenuCommand::new("Break").into());
        assert!(menu.set_items(bad).is_err());

        assert_eq!(menu.items(), file_menu());
        assert_eq!(bar.snapshot(), before);
        assert_eq!(bar.clear_count(), clears);
    }

    #[test]
    fn popup_menus_take_any_item() {
        let root = Window::headless();
        let menu = Menu::new(&root, false);
        menu.set_items(vec![
            MenuCommand::new("Copy").into(),
            MenuSeparator::new().into(),
            MenuCheckbutton::new("Wrap").into(),
        ])
        .unwrap();
        assert_eq!(menu.native_entry_count(), 3);
    }

    #[test]
    fn popup() {
        let root = Window::headless();
        let context = Menu::with_items(&root, false, vec![MenuCommand::new("Copy").into()]).unwrap();
        context.popup().unwrap();
        context.popup().unwrap();
        let native = context.native().as_any().downcast::<HeadlessMenu>().ok().unwrap();
        assert_eq!(native.popup_count(), 2);

        let bar = Menu::new(&root, true);
        let err = bar.popup().unwrap_err();
        assert_eq!(err, Error::MenuBarPopup);
        assert!(err.is_value_error());

        drop(root);
        assert_eq!(context.popup().unwrap_err(), Error::ParentDestroyed);
        assert_eq!(native.popup_count(), 2);
    }

    #[test]
    fn rebuild_releases_old_bindings() {
        let root = Window::headless();
        let menu = Menu::new(&root, true);
        let var = Variable::boolean(true);
        let mut check = MenuCheckbutton::new("Wrap");
        check.set_variable(Some(var.clone())).unwrap();
        let items: Vec<MenuItem> = vec![MenuCascade::new("View", vec![check.into()]).into()];

        menu.set_items(items.clone()).unwrap();
        menu.set_items(items).unwrap();
        assert_eq!(var.listener_count(), 1);

        menu.set_items(vec![]).unwrap();
        assert_eq!(var.listener_count(), 0);
        assert_eq!(menu.native_entry_count(), 0);
    }

    #[test]
    fn destroyed_parent() {
        let root = Window::headless();
        let menu = Menu::new(&root, true);
        drop(root);
        assert!(menu.parent().is_none());
        assert_eq!(
            menu.set_items(file_menu()).unwrap_err(),
            Error::ParentDestroyed
        );
    }

    #[test]
    fn callbacks_may_replace_the_menu() {
        let toolkit = HeadlessToolkit::new();
        let root = Window::new(toolkit.clone());
        let menu = Menu::new(&root, true);
        root.set_menu_bar(&menu).unwrap();

        let menu_c = menu.clone();
        let reset = MenuCommand::with_command("Reset", move || {
            menu_c
                .set_items(vec![MenuCascade::new("Empty", vec![]).into()])
                .unwrap();
        });
        menu.set_items(vec![MenuCascade::new("File", vec![reset.into()]).into()])
            .unwrap();

        let bar = toolkit.menubar().unwrap();
        assert!(bar.invoke(&[0, 0]));
        assert_eq!(
            bar.snapshot(),
            vec![EntrySnapshot::Cascade {
                label: "Empty".to_string(),
                enabled: true,
                entries: vec![],
            }]
        );
    }
}
