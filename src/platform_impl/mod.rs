// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

pub mod headless;

#[cfg(all(target_os = "linux", feature = "gtk"))]
#[path = "gtk/mod.rs"]
pub mod gtk_toolkit;
