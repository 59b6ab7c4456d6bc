// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::{MenuItemType, ValueKind};

/// Errors returned by menutree.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("`{field}` expects a {expected} value but got a {found} value")]
    TypeMismatch {
        field: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("{item} at position {position} is not allowed at the top level of a menu bar, only cascades are")]
    NotAllowedAtTopLevel { position: usize, item: MenuItemType },
    #[error("This menu was not created as a menu bar")]
    NotAMenuBar,
    #[error("A menu bar cannot be shown as a popup")]
    MenuBarPopup,
    #[error("This menu belongs to another window")]
    ForeignMenu,
    #[error("The parent window of this menu has been destroyed")]
    ParentDestroyed,
    #[error("Couldn't recognize \"{0}\" as a valid accelerator key")]
    UnrecognizedAcceleratorCode(String),
    #[error("Unexpected empty token while parsing accelerator: \"{0}\"")]
    EmptyAcceleratorToken(String),
    #[error("Unexpected accelerator string format: \"{0}\", a accelerator should have the modifiers first and only contain one main key")]
    UnexpectedAcceleratorFormat(String),
}

/// The two families of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field or argument has the wrong shape.
    Type,
    /// The shape is right but the value is illegal where it was placed.
    Value,
}

impl Error {
    /// Returns whether this is a type error or a value error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TypeMismatch { .. }
            | Error::UnrecognizedAcceleratorCode(_)
            | Error::EmptyAcceleratorToken(_)
            | Error::UnexpectedAcceleratorFormat(_) => ErrorKind::Type,
            Error::NotAllowedAtTopLevel { .. }
            | Error::NotAMenuBar
            | Error::MenuBarPopup
            | Error::ForeignMenu
            | Error::ParentDestroyed => ErrorKind::Value,
        }
    }

    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    pub fn is_value_error(&self) -> bool {
        self.kind() == ErrorKind::Value
    }
}

/// Convenient type alias of Result type for menutree.
pub type Result<T> = std::result::Result<T, Error>;
