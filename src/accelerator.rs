// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Accelerators describe the keyboard shortcut shown next to a menu entry.
//!
//! An [`Accelerator`] is an optional combination of [`Modifiers`] and exactly one [`Code`].
//! It can be built directly or parsed from a string where the modifiers come first:
//! ```
//! # use menutree::accelerator::{Accelerator, Code, Modifiers};
//! let save: Accelerator = "CmdOrCtrl+S".parse().unwrap();
//! let quit = Accelerator::new(Some(Modifiers::CONTROL), Code::KeyQ);
//! # assert!("S+Shift".parse::<Accelerator>().is_err());
//! ```

pub use keyboard_types::{Code, Modifiers};
use std::{fmt, str::FromStr};

#[cfg(target_os = "macos")]
pub const CMD_OR_CTRL: Modifiers = Modifiers::SUPER;
#[cfg(not(target_os = "macos"))]
pub const CMD_OR_CTRL: Modifiers = Modifiers::CONTROL;

/// A keyboard shortcut made of optional [`Modifiers`] and one key [`Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accelerator {
    pub(crate) mods: Modifiers,
    pub(crate) key: Code,
}

impl Accelerator {
    /// Creates a new accelerator. `META` is folded into `SUPER`.
    pub fn new(mods: Option<Modifiers>, key: Code) -> Self {
        let mut mods = mods.unwrap_or_else(Modifiers::empty);
        if mods.contains(Modifiers::META) {
            mods.remove(Modifiers::META);
            mods.insert(Modifiers::SUPER);
        }
        Self { mods, key }
    }

    pub fn modifiers(&self) -> Modifiers {
        self.mods
    }

    pub fn key(&self) -> Code {
        self.key
    }

    /// The human readable text toolkits display next to the entry label, e.g. `Ctrl+Shift+S`.
    pub fn label(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(Modifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(Modifiers::ALT) {
            parts.push("Alt".to_string());
        }
        if self.mods.contains(Modifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(Modifiers::SUPER) {
            parts.push("Super".to_string());
        }
        parts.push(key_label(self.key));
        parts.join("+")
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Accelerator {
    type Err = crate::Error;
    fn from_str(accelerator: &str) -> Result<Self, Self::Err> {
        parse_accelerator(accelerator)
    }
}

impl TryFrom<&str> for Accelerator {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_accelerator(value)
    }
}

impl TryFrom<String> for Accelerator {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_accelerator(&value)
    }
}

fn parse_accelerator(accelerator: &str) -> crate::Result<Accelerator> {
    let mut mods = Modifiers::empty();
    let mut key = None;

    for raw in accelerator.split('+') {
        let token = raw.trim();
        if token.is_empty() {
            return Err(crate::Error::EmptyAcceleratorToken(accelerator.to_string()));
        }

        // anything after the main key means a second key or a misplaced modifier
        if key.is_some() {
            return Err(crate::Error::UnexpectedAcceleratorFormat(
                accelerator.to_string(),
            ));
        }

        match token.to_uppercase().as_str() {
            "OPTION" | "ALT" => mods.insert(Modifiers::ALT),
            "CONTROL" | "CTRL" => mods.insert(Modifiers::CONTROL),
            "COMMAND" | "CMD" | "SUPER" => mods.insert(Modifiers::SUPER),
            "SHIFT" => mods.insert(Modifiers::SHIFT),
            "COMMANDORCONTROL" | "COMMANDORCTRL" | "CMDORCTRL" | "CMDORCONTROL" => {
                mods.insert(CMD_OR_CTRL)
            }
            _ => key = Some(parse_key(token)?),
        }
    }

    match key {
        Some(key) => Ok(Accelerator::new(Some(mods), key)),
        None => Err(crate::Error::UnexpectedAcceleratorFormat(
            accelerator.to_string(),
        )),
    }
}

fn parse_key(key: &str) -> crate::Result<Code> {
    use Code::*;

    let upper = key.to_uppercase();
    let bare = upper
        .strip_prefix("KEY")
        .or_else(|| upper.strip_prefix("DIGIT"))
        .filter(|rest| rest.len() == 1)
        .unwrap_or(upper.as_str());

    let mut chars = bare.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(code) = char_to_code(c) {
            return Ok(code);
        }
    }

    match bare {
        "BACKSPACE" => Ok(Backspace),
        "TAB" => Ok(Tab),
        "ENTER" | "RETURN" => Ok(Enter),
        "SPACE" => Ok(Space),
        "ESC" | "ESCAPE" => Ok(Escape),
        "DELETE" | "DEL" => Ok(Delete),
        "INSERT" => Ok(Insert),
        "HOME" => Ok(Home),
        "END" => Ok(End),
        "PAGEUP" => Ok(PageUp),
        "PAGEDOWN" => Ok(PageDown),
        "UP" | "ARROWUP" => Ok(ArrowUp),
        "DOWN" | "ARROWDOWN" => Ok(ArrowDown),
        "LEFT" | "ARROWLEFT" => Ok(ArrowLeft),
        "RIGHT" | "ARROWRIGHT" => Ok(ArrowRight),
        "PRINTSCREEN" => Ok(PrintScreen),
        "F1" => Ok(F1),
        "F2" => Ok(F2),
        "F3" => Ok(F3),
        "F4" => Ok(F4),
        "F5" => Ok(F5),
        "F6" => Ok(F6),
        "F7" => Ok(F7),
        "F8" => Ok(F8),
        "F9" => Ok(F9),
        "F10" => Ok(F10),
        "F11" => Ok(F11),
        "F12" => Ok(F12),
        "PLUS" => Ok(Equal),
        _ => Err(crate::Error::UnrecognizedAcceleratorCode(key.to_string())),
    }
}

fn char_to_code(c: char) -> Option<Code> {
    use Code::*;
    const LETTERS: [Code; 26] = [
        KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO,
        KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
    ];
    const DIGITS: [Code; 10] = [
        Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9,
    ];

    match c {
        'A'..='Z' => Some(LETTERS[(c as u8 - b'A') as usize]),
        '0'..='9' => Some(DIGITS[(c as u8 - b'0') as usize]),
        '`' => Some(Backquote),
        '\\' => Some(Backslash),
        '[' => Some(BracketLeft),
        ']' => Some(BracketRight),
        ',' => Some(Comma),
        '=' => Some(Equal),
        '-' => Some(Minus),
        '.' => Some(Period),
        '\'' => Some(Quote),
        ';' => Some(Semicolon),
        '/' => Some(Slash),
        _ => None,
    }
}

fn key_label(key: Code) -> String {
    let name = key.to_string();
    if let Some(rest) = name.strip_prefix("Key").or_else(|| name.strip_prefix("Digit")) {
        return rest.to_string();
    }
    match key {
        Code::Backquote => "`".into(),
        Code::Backslash => "\\".into(),
        Code::BracketLeft => "[".into(),
        Code::BracketRight => "]".into(),
        Code::Comma => ",".into(),
        Code::Equal => "=".into(),
        Code::Minus => "-".into(),
        Code::Period => ".".into(),
        Code::Quote => "'".into(),
        Code::Semicolon => ";".into(),
        Code::Slash => "/".into(),
        Code::Escape => "Esc".into(),
        Code::ArrowUp => "Up".into(),
        Code::ArrowDown => "Down".into(),
        Code::ArrowLeft => "Left".into(),
        Code::ArrowRight => "Right".into(),
        _ => name,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_modifiers_and_key() {
        let accel: Accelerator = "Ctrl+Shift+S".parse().unwrap();
        assert_eq!(
            accel,
            Accelerator::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyS)
        );
        assert_eq!(accel.label(), "Ctrl+Shift+S");
    }

    #[test]
    fn parses_single_keys() {
        assert_eq!("F5".parse::<Accelerator>().unwrap().key(), Code::F5);
        assert_eq!("KeyQ".parse::<Accelerator>().unwrap().key(), Code::KeyQ);
        assert_eq!("digit3".parse::<Accelerator>().unwrap().key(), Code::Digit3);
        assert_eq!("/".parse::<Accelerator>().unwrap().key(), Code::Slash);
    }

    #[test]
    fn cmd_or_ctrl_follows_platform() {
        let accel: Accelerator = "CmdOrCtrl+N".parse().unwrap();
        assert_eq!(accel.modifiers(), CMD_OR_CTRL);
    }

    #[test]
    fn meta_is_folded_into_super() {
        let accel = Accelerator::new(Some(Modifiers::META), Code::KeyK);
        assert_eq!(accel.modifiers(), Modifiers::SUPER);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(matches!(
            "Ctrl++S".parse::<Accelerator>(),
            Err(crate::Error::EmptyAcceleratorToken(_))
        ));
        assert!(matches!(
            "Ctrl+S+Shift".parse::<Accelerator>(),
            Err(crate::Error::UnexpectedAcceleratorFormat(_))
        ));
        assert!(matches!(
            "Ctrl+Shift".parse::<Accelerator>(),
            Err(crate::Error::UnexpectedAcceleratorFormat(_))
        ));
        assert!(matches!(
            "Ctrl+Hyper".parse::<Accelerator>(),
            Err(crate::Error::UnrecognizedAcceleratorCode(_))
        ));
        assert!("Ctrl+Hyper".parse::<Accelerator>().unwrap_err().is_type_error());
    }
}
