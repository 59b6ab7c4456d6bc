// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use std::{
    cell::RefCell,
    rc::Rc,
    thread::{self, ThreadId},
};

use crate::{headless::HeadlessToolkit, toolkit::Toolkit, Menu};

const DEFAULT_TITLE: &str = "Main Window";

pub(crate) struct WindowInner {
    toolkit: Rc<dyn Toolkit>,
    title: RefCell<String>,
    menubar: RefCell<Option<Menu>>,
    pub(crate) ui_thread: ThreadId,
}

/// A top-level window with a slot for one menu bar.
///
/// The thread creating a window becomes the UI thread for it and for every
/// [`Menu`] created for it.
#[derive(Clone)]
pub struct Window {
    pub(crate) inner: Rc<WindowInner>,
}

impl Window {
    /// Creates a window backed by `toolkit`.
    pub fn new(toolkit: Rc<dyn Toolkit>) -> Self {
        toolkit.set_title(DEFAULT_TITLE);
        Self {
            inner: Rc::new(WindowInner {
                toolkit,
                title: RefCell::new(DEFAULT_TITLE.to_string()),
                menubar: RefCell::new(None),
                ui_thread: thread::current().id(),
            }),
        }
    }

    /// Creates a window backed by a fresh [`HeadlessToolkit`].
    pub fn headless() -> Self {
        Self::new(HeadlessToolkit::new())
    }

    pub fn toolkit(&self) -> Rc<dyn Toolkit> {
        self.inner.toolkit.clone()
    }

    pub fn title(&self) -> String {
        self.inner.title.borrow().clone()
    }

    pub fn set_title<S: Into<String>>(&self, title: S) {
        let title = title.into();
        self.inner.toolkit.set_title(&title);
        *self.inner.title.borrow_mut() = title;
    }

    /// Shows `menu` as this window's menu bar, replacing the previous one.
    ///
    /// Fails if `menu` was not created as a menu bar or was created for another window.
    pub fn set_menu_bar(&self, menu: &Menu) -> crate::Result<()> {
        if !menu.is_menubar() {
            return Err(crate::Error::NotAMenuBar);
        }
        if !menu.belongs_to(self) {
            return Err(crate::Error::ForeignMenu);
        }

        self.inner.toolkit.attach_menubar(Some(menu.native()));
        log::debug!("attached menu {} as menu bar", menu.id());
        *self.inner.menubar.borrow_mut() = Some(menu.clone());
        Ok(())
    }

    pub fn menu_bar(&self) -> Option<Menu> {
        self.inner.menubar.borrow().clone()
    }

    /// Removes the menu bar from this window and returns it.
    pub fn remove_menu_bar(&self) -> Option<Menu> {
        let menu = self.inner.menubar.borrow_mut().take();
        if menu.is_some() {
            self.inner.toolkit.attach_menubar(None);
        }
        menu
    }
}
