// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! menutree builds validated menu trees and keeps a native menu in sync with them.
//!
//! # Describing a menu
//!
//! A menu is a `Vec` of [`MenuItem`]s. Only [`MenuCascade`]s may appear at
//! the top level of a menu bar; everything else lives inside a cascade.
//! ```
//! use menutree::{MenuCascade, MenuCommand, MenuItem, MenuSeparator};
//!
//! let items: Vec<MenuItem> = vec![MenuCascade::new(
//!     "File",
//!     vec![
//!         MenuCommand::new("New").into(),
//!         MenuCommand::new("Open...").into(),
//!         MenuSeparator::new().into(),
//!         MenuCommand::new("Exit").into(),
//!     ],
//! )
//! .into()];
//! ```
//!
//! # Showing it in a window
//!
//! Assigning the items to a [`Menu`] validates them and rebuilds the native
//! menu. A failed assignment leaves both the menu and the native widgets untouched.
//! ```
//! use menutree::{Menu, MenuCascade, MenuCommand, Window};
//!
//! let window = Window::headless();
//! let menubar = Menu::new(&window, true);
//! window.set_menu_bar(&menubar).unwrap();
//!
//! menubar
//!     .set_items(vec![MenuCascade::new("File", vec![]).into()])
//!     .unwrap();
//!
//! let err = menubar
//!     .set_items(vec![MenuCommand::new("Exit").into()])
//!     .unwrap_err();
//! assert!(err.is_value_error());
//! assert_eq!(menubar.items().len(), 1);
//! ```
//!
//! # Processing menu events
//!
//! Items given an id report their activation on a global channel,
//! reachable through [`MenuEvent::receiver`].
//! ```no_run
//! # use menutree::MenuEvent;
//! if let Ok(event) = MenuEvent::receiver().try_recv() {
//!     match event.id {
//!         id if id == "save" => println!("Save menu item activated"),
//!         _ => {}
//!     }
//! }
//! ```
//!
//! # Backends
//!
//! [`headless`] keeps menus in memory and is always available. With the `gtk`
//! feature on Linux, `gtk_toolkit::GtkToolkit` draws them in a gtk window.

use crossbeam_channel::{unbounded, Receiver, Sender};
use once_cell::sync::Lazy;

mod error;
mod items;
mod menu;
mod menu_id;
mod platform_impl;
mod reconcile;
mod util;
mod value;
mod window;

pub mod accelerator;
pub mod builders;
pub mod toolkit;
pub mod validate;

pub use error::*;
pub use items::*;
pub use menu::Menu;
pub use menu_id::MenuId;
pub use platform_impl::headless;
#[cfg(all(target_os = "linux", feature = "gtk"))]
pub use platform_impl::gtk_toolkit;
pub use value::{Value, ValueKind, Variable};
pub use window::Window;

static MENU_CHANNEL: Lazy<(Sender<MenuEvent>, Receiver<MenuEvent>)> = Lazy::new(unbounded);

/// A receiver that can be used to listen to menu events.
pub type MenuEventReceiver = Receiver<MenuEvent>;

/// Describes a menu event emitted when a menu item with an id is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuEvent {
    /// Id of the menu item which triggered this event
    pub id: MenuId,
}

impl MenuEvent {
    /// Returns the id of the menu item which triggered this event
    pub fn id(&self) -> &MenuId {
        &self.id
    }

    /// Gets a reference to the event channel's [`MenuEventReceiver`]
    /// which can be used to listen for menu events.
    pub fn receiver<'a>() -> &'a MenuEventReceiver {
        &MENU_CHANNEL.1
    }

    pub(crate) fn send(event: MenuEvent) {
        log::trace!("menu event {}", event.id);
        // the receiver lives in a static, so sending cannot fail
        let _ = MENU_CHANNEL.0.send(event);
    }
}
