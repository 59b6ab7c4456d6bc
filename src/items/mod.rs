// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

mod cascade;
mod check;
mod command;
mod radio;
mod separator;

pub use cascade::*;
pub use check::*;
pub use command::*;
pub use radio::*;
pub use separator::*;

use std::{fmt, rc::Rc};

use crate::{accelerator::Accelerator, MenuId};

/// A zero-argument callback attached to a menu entry.
///
/// Callbacks run on the UI thread when the user activates the entry.
/// Two callbacks are equal only if they are clones of each other.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    pub fn new<F: Fn() + 'static>(f: F) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl<F: Fn() + 'static> From<F> for Callback {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.0) as *const u8,
            Rc::as_ptr(&other.0) as *const u8,
        )
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// The variant of a [`MenuItem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MenuItemType {
    Separator,
    Command,
    Checkbutton,
    Radiobutton,
    Cascade,
}

impl fmt::Display for MenuItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuItemType::Separator => "a separator",
            MenuItemType::Command => "a command",
            MenuItemType::Checkbutton => "a checkbutton",
            MenuItemType::Radiobutton => "a radiobutton",
            MenuItemType::Cascade => "a cascade",
        })
    }
}

/// One entry of a menu tree.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuItem {
    Separator(MenuSeparator),
    Command(MenuCommand),
    Checkbutton(MenuCheckbutton),
    Radiobutton(MenuRadiobutton),
    Cascade(MenuCascade),
}

impl MenuItem {
    pub fn item_type(&self) -> MenuItemType {
        match self {
            MenuItem::Separator(_) => MenuItemType::Separator,
            MenuItem::Command(_) => MenuItemType::Command,
            MenuItem::Checkbutton(_) => MenuItemType::Checkbutton,
            MenuItem::Radiobutton(_) => MenuItemType::Radiobutton,
            MenuItem::Cascade(_) => MenuItemType::Cascade,
        }
    }

    /// The label of this item, `None` for separators.
    pub fn label(&self) -> Option<&str> {
        match self {
            MenuItem::Separator(_) => None,
            MenuItem::Command(i) => Some(i.label()),
            MenuItem::Checkbutton(i) => Some(i.label()),
            MenuItem::Radiobutton(i) => Some(i.label()),
            MenuItem::Cascade(i) => Some(i.label()),
        }
    }

    pub fn as_cascade(&self) -> Option<&MenuCascade> {
        match self {
            MenuItem::Cascade(c) => Some(c),
            _ => None,
        }
    }

    /// Re-checks the invariants this item's setters enforce.
    pub(crate) fn check(&self) -> crate::Result<()> {
        match self {
            MenuItem::Checkbutton(i) => i.check(),
            MenuItem::Radiobutton(i) => i.check(),
            MenuItem::Separator(_) | MenuItem::Command(_) | MenuItem::Cascade(_) => Ok(()),
        }
    }
}

impl From<MenuSeparator> for MenuItem {
    fn from(item: MenuSeparator) -> Self {
        Self::Separator(item)
    }
}

impl From<MenuCommand> for MenuItem {
    fn from(item: MenuCommand) -> Self {
        Self::Command(item)
    }
}

impl From<MenuCheckbutton> for MenuItem {
    fn from(item: MenuCheckbutton) -> Self {
        Self::Checkbutton(item)
    }
}

impl From<MenuRadiobutton> for MenuItem {
    fn from(item: MenuRadiobutton) -> Self {
        Self::Radiobutton(item)
    }
}

impl From<MenuCascade> for MenuItem {
    fn from(item: MenuCascade) -> Self {
        Self::Cascade(item)
    }
}

/// Fields shared by every entry the user can activate.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Action {
    pub(crate) label: String,
    pub(crate) enabled: bool,
    pub(crate) command: Option<Callback>,
    pub(crate) accelerator: Option<Accelerator>,
    pub(crate) id: Option<MenuId>,
}

impl Action {
    pub(crate) fn new(label: String) -> Self {
        Self {
            label,
            enabled: true,
            command: None,
            accelerator: None,
            id: None,
        }
    }
}

macro_rules! impl_action_accessors {
    ($ty:ty) => {
        impl $ty {
            pub fn label(&self) -> &str {
                &self.action.label
            }

            pub fn set_label<S: Into<String>>(&mut self, label: S) {
                self.action.label = label.into();
            }

            pub fn is_enabled(&self) -> bool {
                self.action.enabled
            }

            pub fn set_enabled(&mut self, enabled: bool) {
                self.action.enabled = enabled;
            }

            pub fn command(&self) -> Option<&$crate::Callback> {
                self.action.command.as_ref()
            }

            pub fn set_command(&mut self, command: Option<$crate::Callback>) {
                self.action.command = command;
            }

            pub fn accelerator(&self) -> Option<&$crate::accelerator::Accelerator> {
                self.action.accelerator.as_ref()
            }

            pub fn set_accelerator(
                &mut self,
                accelerator: Option<$crate::accelerator::Accelerator>,
            ) {
                self.action.accelerator = accelerator;
            }

            /// The id sent with [`MenuEvent`](crate::MenuEvent)s when this item is activated.
            pub fn id(&self) -> Option<&$crate::MenuId> {
                self.action.id.as_ref()
            }

            pub fn set_id(&mut self, id: Option<$crate::MenuId>) {
                self.action.id = id;
            }
        }
    };
}

pub(crate) use impl_action_accessors;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn callbacks_compare_by_identity() {
        let a = Callback::new(|| {});
        let b = Callback::new(|| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn equality_is_structural() {
        let make = || {
            MenuItem::from(MenuCascade::new(
                "File",
                vec![
                    MenuCommand::new("New").into(),
                    MenuSeparator::new().into(),
                    MenuCheckbutton::new("Autosave").into(),
                ],
            ))
        };
        assert_eq!(make(), make());

        let mut other = make();
        if let MenuItem::Cascade(c) = &mut other {
            c.push(MenuCommand::new("Exit"));
        }
        assert_ne!(make(), other);
    }

    #[test]
    fn reports_item_types() {
        assert_eq!(
            MenuItem::from(MenuSeparator::new()).item_type(),
            MenuItemType::Separator
        );
        assert_eq!(
            MenuItem::from(MenuRadiobutton::new("eng", "English")).item_type(),
            MenuItemType::Radiobutton
        );
        assert_eq!(MenuItem::from(MenuSeparator::new()).label(), None);
        assert_eq!(
            MenuItem::from(MenuCommand::new("Open...")).label(),
            Some("Open...")
        );
    }
}
