// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! A module containing builder types

mod cascade;
mod check;
mod command;
mod radio;

pub use cascade::*;
pub use check::*;
pub use command::*;
pub use radio::*;
