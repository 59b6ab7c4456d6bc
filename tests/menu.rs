// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use menutree::{
    headless::{EntrySnapshot, HeadlessToolkit},
    toolkit::CheckStyle,
    Menu, MenuCascade, MenuCheckbutton, MenuCommand, MenuItem, MenuItemType, MenuRadiobutton,
    MenuSeparator, Value, Variable, Window,
};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,7}( [a-z]{1,5})?"
}

fn leaf() -> impl Strategy<Value = MenuItem> {
    prop_oneof![
        Just(MenuSeparator::new().into()),
        (label(), any::<bool>()).prop_map(|(label, enabled)| {
            let mut command = MenuCommand::new(label);
            command.set_enabled(enabled);
            command.into()
        }),
        label().prop_map(|label| MenuCheckbutton::new(label).into()),
        (any::<i64>(), label()).prop_map(|(value, label)| MenuRadiobutton::new(value, label).into()),
    ]
}

fn nested() -> impl Strategy<Value = MenuItem> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        (label(), prop::collection::vec(inner, 0..6))
            .prop_map(|(label, items)| MenuCascade::new(label, items).into())
    })
}

fn cascade() -> impl Strategy<Value = MenuItem> {
    (label(), prop::collection::vec(nested(), 0..6))
        .prop_map(|(label, items)| MenuCascade::new(label, items).into())
}

fn menubar_items() -> impl Strategy<Value = Vec<MenuItem>> {
    prop::collection::vec(cascade(), 0..5)
}

/// What the native menu should show right after `items` are assigned.
///
/// Checkables without a variable start unchecked.
fn expected(items: &[MenuItem]) -> Vec<EntrySnapshot> {
    items
        .iter()
        .map(|item| match item {
            MenuItem::Separator(_) => EntrySnapshot::Separator,
            MenuItem::Command(command) => EntrySnapshot::Command {
                label: command.label().to_string(),
                enabled: command.is_enabled(),
                accelerator: command.accelerator().map(|a| a.label()),
            },
            MenuItem::Checkbutton(check) => EntrySnapshot::Checkable {
                label: check.label().to_string(),
                enabled: check.is_enabled(),
                accelerator: None,
                style: CheckStyle::Check,
                checked: false,
            },
            MenuItem::Radiobutton(radio) => EntrySnapshot::Checkable {
                label: radio.label().to_string(),
                enabled: radio.is_enabled(),
                accelerator: None,
                style: CheckStyle::Radio,
                checked: false,
            },
            MenuItem::Cascade(cascade) => EntrySnapshot::Cascade {
                label: cascade.label().to_string(),
                enabled: cascade.is_enabled(),
                entries: expected(cascade.items()),
            },
        })
        .collect()
}

fn menubar() -> (Menu, std::rc::Rc<HeadlessToolkit>, Window) {
    let toolkit = HeadlessToolkit::new();
    let root = Window::new(toolkit.clone());
    let menu = Menu::new(&root, true);
    root.set_menu_bar(&menu).unwrap();
    (menu, toolkit, root)
}

proptest! {
    #[test]
    fn prop_items_round_trip(items in menubar_items()) {
        let (menu, toolkit, _root) = menubar();
        menu.set_items(items.clone()).unwrap();
        prop_assert_eq!(menu.items(), items.clone());

        let snapshot = toolkit.menubar().unwrap().snapshot();
        prop_assert_eq!(snapshot, expected(&items));
    }

    #[test]
    fn prop_non_cascades_rejected_at_top_level(
        items in menubar_items(),
        intruder in leaf(),
        position in any::<prop::sample::Index>(),
    ) {
        let (menu, toolkit, _root) = menubar();
        menu.set_items(items.clone()).unwrap();
        let before = toolkit.menubar().unwrap().snapshot();

        let position = position.index(items.len() + 1);
        let item_type = intruder.item_type();
        let mut bad = items.clone();
        bad.insert(position, intruder);

        let err = menu.set_items(bad).unwrap_err();
        prop_assert!(err.is_value_error());
        prop_assert_eq!(
            err,
            menutree::Error::NotAllowedAtTopLevel { position, item: item_type }
        );
        prop_assert_eq!(menu.items(), items);
        prop_assert_eq!(toolkit.menubar().unwrap().snapshot(), before);
    }

    #[test]
    fn prop_mismatched_values_are_type_errors(text in "[a-z]{1,8}", number in any::<i64>()) {
        let variable = Variable::int(number);
        prop_assert!(variable.set(text.as_str()).unwrap_err().is_type_error());
        prop_assert_eq!(variable.get(), Value::Int(number));

        let mut radio = MenuRadiobutton::new(text.as_str(), "Item");
        prop_assert!(radio.set_variable(Some(variable.clone())).unwrap_err().is_type_error());
        prop_assert!(radio.variable().is_none());

        let mut check = MenuCheckbutton::new("Item");
        check.set_variable(Some(Variable::string(text.as_str()))).unwrap_err();
        prop_assert!(check
            .set_values(number, text.as_str())
            .unwrap_err()
            .is_type_error());
    }
}

#[test]
fn file_menu_scenario() {
    let (menu, toolkit, _root) = menubar();
    let items: Vec<MenuItem> = vec![MenuCascade::new(
        "File",
        vec![
            MenuCommand::new("New").into(),
            MenuSeparator::new().into(),
            MenuCommand::new("Exit").into(),
        ],
    )
    .into()];

    menu.set_items(items.clone()).unwrap();
    assert_eq!(menu.items(), items);
    assert_eq!(toolkit.menubar().unwrap().snapshot(), expected(&items));
}

#[test]
fn bare_command_scenario() {
    let (menu, _toolkit, _root) = menubar();
    let err = menu
        .set_items(vec![MenuCommand::new("Fail").into()])
        .unwrap_err();
    assert!(err.is_value_error());
    assert_eq!(
        err,
        menutree::Error::NotAllowedAtTopLevel {
            position: 0,
            item: MenuItemType::Command,
        }
    );
}

#[test]
fn nested_empty_cascade_scenario() {
    let (menu, _toolkit, _root) = menubar();
    let items: Vec<MenuItem> = vec![MenuCascade::new(
        "X",
        vec![MenuCascade::new("Y", vec![]).into()],
    )
    .into()];
    menu.set_items(items.clone()).unwrap();
    assert_eq!(menu.items(), items);
}

#[test]
fn checkbutton_follows_its_variable_across_rebuilds() {
    let (menu, toolkit, _root) = menubar();
    let wrap = Variable::boolean(false);
    let mut check = MenuCheckbutton::new("Word wrap");
    check.set_variable(Some(wrap.clone())).unwrap();
    let items: Vec<MenuItem> = vec![MenuCascade::new("View", vec![check.into()]).into()];

    menu.set_items(items.clone()).unwrap();
    let bar = toolkit.menubar().unwrap();
    assert!(bar.invoke(&[0, 0]));
    assert_eq!(wrap.get(), Value::Bool(true));

    menu.set_items(items).unwrap();
    assert!(matches!(
        bar.submenu(0).unwrap().snapshot()[0],
        EntrySnapshot::Checkable { checked: true, .. }
    ));

    wrap.set(false).unwrap();
    assert!(matches!(
        bar.submenu(0).unwrap().snapshot()[0],
        EntrySnapshot::Checkable { checked: false, .. }
    ));
}
