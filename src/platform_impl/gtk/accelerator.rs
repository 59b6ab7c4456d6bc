// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use gtk::prelude::*;
use keyboard_types::{Code, Modifiers};

use crate::accelerator::Accelerator;

/// Converts an [`Accelerator`] into the `<Control>s` notation gtk parses.
///
/// Returns `None` for codes gtk has no keysym name for, such as `Code::Fn`.
pub fn to_gtk_accelerator(accelerator: &Accelerator) -> Option<String> {
    let key = match accelerator.key {
        Code::Backquote => "grave",
        Code::Backslash => "backslash",
        Code::BracketLeft => "bracketleft",
        Code::BracketRight => "bracketright",
        Code::Comma => "comma",
        Code::Equal => "equal",
        Code::Minus => "minus",
        Code::Period => "period",
        Code::Quote => "apostrophe",
        Code::Semicolon => "semicolon",
        Code::Slash => "slash",
        Code::Backspace => "BackSpace",
        Code::Tab => "Tab",
        Code::Enter => "Return",
        Code::Space => "space",
        Code::Escape => "Escape",
        Code::Delete => "Delete",
        Code::Insert => "Insert",
        Code::Home => "Home",
        Code::End => "End",
        Code::PageUp => "Page_Up",
        Code::PageDown => "Page_Down",
        Code::ArrowUp => "Up",
        Code::ArrowDown => "Down",
        Code::ArrowLeft => "Left",
        Code::ArrowRight => "Right",
        Code::PrintScreen => "Print",
        Code::Numpad0 => "KP_0",
        Code::Numpad1 => "KP_1",
        Code::Numpad2 => "KP_2",
        Code::Numpad3 => "KP_3",
        Code::Numpad4 => "KP_4",
        Code::Numpad5 => "KP_5",
        Code::Numpad6 => "KP_6",
        Code::Numpad7 => "KP_7",
        Code::Numpad8 => "KP_8",
        Code::Numpad9 => "KP_9",
        Code::NumpadAdd => "KP_Add",
        Code::NumpadSubtract => "KP_Subtract",
        Code::NumpadMultiply => "KP_Multiply",
        Code::NumpadDivide => "KP_Divide",
        Code::NumpadDecimal => "KP_Decimal",
        Code::NumpadEnter => "KP_Enter",
        _ => "",
    };

    let mut gtk_accelerator = String::new();
    if accelerator.mods.contains(Modifiers::CONTROL) {
        gtk_accelerator.push_str("<Control>");
    }
    if accelerator.mods.contains(Modifiers::ALT) {
        gtk_accelerator.push_str("<Alt>");
    }
    if accelerator.mods.contains(Modifiers::SHIFT) {
        gtk_accelerator.push_str("<Shift>");
    }
    if accelerator.mods.contains(Modifiers::SUPER) {
        gtk_accelerator.push_str("<Super>");
    }

    if key.is_empty() {
        // letters, digits and function keys share their names with gdk
        let name = accelerator.key.to_string();
        let name = name
            .strip_prefix("Key")
            .map(str::to_lowercase)
            .or_else(|| name.strip_prefix("Digit").map(str::to_string))
            .or_else(|| {
                let is_function_key = name.len() > 1
                    && name.starts_with('F')
                    && name[1..].chars().all(|c| c.is_ascii_digit());
                is_function_key.then(|| name.clone())
            })?;
        gtk_accelerator.push_str(&name);
    } else {
        gtk_accelerator.push_str(key);
    }

    Some(gtk_accelerator)
}

/// Shows `accelerator` next to `item` and lets it activate the item.
///
/// Every accelerator parsed from a string maps to a gtk key. One built with
/// [`Accelerator::new`] from a code gtk cannot name leaves the item without a
/// shortcut; the item itself still works.
pub fn register_accelerator<M: IsA<gtk::Widget>>(
    item: &M,
    accel_group: &gtk::AccelGroup,
    accelerator: &Accelerator,
) {
    let Some(gtk_accelerator) = to_gtk_accelerator(accelerator) else {
        return;
    };
    let (key, modifiers): (u32, gdk::ModifierType) = gtk::accelerator_parse(&gtk_accelerator);
    if key == 0 {
        return;
    }
    item.add_accelerator(
        "activate",
        accel_group,
        key,
        modifiers,
        gtk::AccelFlags::VISIBLE,
    );
}
