// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use menutree::{
    builders::{MenuCheckbuttonBuilder, MenuCommandBuilder},
    headless::HeadlessToolkit,
    Menu, MenuCascade, MenuCommand, MenuEvent, MenuId, Window,
};

// the event channel is global, so everything touching it lives in this one test
#[test]
fn activations_are_reported_by_id() {
    let toolkit = HeadlessToolkit::new();
    let root = Window::new(toolkit.clone());
    let menu = Menu::new(&root, true);
    root.set_menu_bar(&menu).unwrap();

    let save = MenuCommandBuilder::new()
        .label("Save")
        .id("events-save")
        .accelerator(Some("CmdOrCtrl+S"))
        .unwrap()
        .build();
    let wrap = MenuCheckbuttonBuilder::new()
        .label("Word wrap")
        .id("events-wrap")
        .build()
        .unwrap();
    let quiet = MenuCommand::new("No id");

    menu.set_items(vec![MenuCascade::new(
        "File",
        vec![save.into(), wrap.into(), quiet.into()],
    )
    .into()])
    .unwrap();

    while MenuEvent::receiver().try_recv().is_ok() {}

    let bar = toolkit.menubar().unwrap();
    assert!(bar.invoke(&[0, 0]));
    assert!(bar.invoke(&[0, 1]));
    assert!(bar.invoke(&[0, 2]));

    let ids: Vec<MenuId> = MenuEvent::receiver()
        .try_iter()
        .map(|event| event.id().clone())
        .collect();
    assert_eq!(
        ids,
        vec![MenuId::new("events-save"), MenuId::new("events-wrap")]
    );
}
