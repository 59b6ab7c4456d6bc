// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use std::{collections::HashMap, rc::Rc};

use crate::{
    items::Action,
    toolkit::{
        ActivateHandler, CheckStyle, CheckableEntry, CommandEntry, NativeMenu, ToggleHandler,
    },
    MenuEvent, MenuItem, Value, ValueKind, Variable,
};

type Binding = Rc<dyn Fn(&Value)>;

/// Everything a rebuild created that must outlive the call to [`rebuild`].
///
/// Dropping it releases the variable bindings of the previous native entries.
#[derive(Default)]
pub(crate) struct NativeTree {
    bindings: Vec<Binding>,
    submenus: Vec<Rc<dyn NativeMenu>>,
    implicit_variables: Vec<Variable>,
}

impl NativeTree {
    pub(crate) fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub(crate) fn submenu_count(&self) -> usize {
        self.submenus.len()
    }

    fn build(&mut self, native: &Rc<dyn NativeMenu>, items: &[MenuItem]) {
        // radiobuttons without a variable share one per value kind within a menu
        let mut radio_groups: HashMap<ValueKind, Variable> = HashMap::new();

        for item in items {
            match item {
                MenuItem::Separator(_) => native.add_separator(),
                MenuItem::Command(command) => native.add_command(CommandEntry {
                    label: command.action.label.clone(),
                    enabled: command.action.enabled,
                    accelerator: command.action.accelerator,
                    on_activate: activate_handler(&command.action),
                }),
                MenuItem::Checkbutton(check) => {
                    let variable = match &check.variable {
                        Some(variable) => variable.clone(),
                        None => {
                            let variable = Variable::new(check.off_value.clone());
                            self.implicit_variables.push(variable.clone());
                            variable
                        }
                    };
                    let checked = variable.get() == check.on_value;
                    self.bind_checkable(
                        native,
                        &check.action,
                        variable,
                        check.on_value.clone(),
                        Some(check.off_value.clone()),
                        checked,
                    );
                }
                MenuItem::Radiobutton(radio) => {
                    // an implicit group starts with nothing selected, whatever the
                    // default of its variable happens to equal
                    let (variable, checked) = match &radio.variable {
                        Some(variable) => (variable.clone(), variable.get() == radio.value),
                        None => {
                            let kind = radio.value.kind();
                            let implicit = &mut self.implicit_variables;
                            let variable = radio_groups
                                .entry(kind)
                                .or_insert_with(|| {
                                    let variable = Variable::with_kind(kind);
                                    implicit.push(variable.clone());
                                    variable
                                })
                                .clone();
                            (variable, false)
                        }
                    };
                    self.bind_checkable(
                        native,
                        &radio.action,
                        variable,
                        radio.value.clone(),
                        None,
                        checked,
                    );
                }
                MenuItem::Cascade(cascade) => {
                    let submenu = native.create_submenu();
                    self.build(&submenu, &cascade.items);
                    native.add_cascade(&cascade.label, cascade.enabled, submenu.clone());
                    self.submenus.push(submenu);
                }
            }
        }
    }

    /// Adds a checkable entry, initially `checked`, that afterwards is checked
    /// while `variable` holds `on_value`.
    ///
    /// `off_value` is `None` for radiobuttons, which write `on_value` even when
    /// the toolkit reports them as unchecked.
    fn bind_checkable(
        &mut self,
        native: &Rc<dyn NativeMenu>,
        action: &Action,
        variable: Variable,
        on_value: Value,
        off_value: Option<Value>,
        checked: bool,
    ) {
        let style = match off_value {
            Some(_) => CheckStyle::Check,
            None => CheckStyle::Radio,
        };

        let on_toggle: ToggleHandler = {
            let variable = variable.clone();
            let on_value = on_value.clone();
            let after = activate_handler(action);
            Rc::new(move |checked: bool| {
                let value = match (&off_value, checked) {
                    (Some(off_value), false) => off_value.clone(),
                    _ => on_value.clone(),
                };
                variable.store(value);
                after();
            })
        };

        let checkable = native.add_checkable(CheckableEntry {
            label: action.label.clone(),
            enabled: action.enabled,
            accelerator: action.accelerator,
            style,
            checked,
            on_toggle,
        });

        let binding: Binding = Rc::new(move |value: &Value| checkable.set_checked(*value == on_value));
        variable.subscribe(&binding);
        self.bindings.push(binding);
    }
}

/// Runs the item's callback, then reports the activation on the menu event channel.
fn activate_handler(action: &Action) -> ActivateHandler {
    let command = action.command.clone();
    let id = action.id.clone();
    Rc::new(move || {
        if let Some(command) = &command {
            command.call();
        }
        if let Some(id) = &id {
            MenuEvent::send(MenuEvent { id: id.clone() });
        }
    })
}

/// Deletes every entry of `native` and materializes `items` into it in order.
///
/// `items` must already be validated.
pub(crate) fn rebuild(native: &Rc<dyn NativeMenu>, items: &[MenuItem]) -> NativeTree {
    native.delete_all();
    let mut tree = NativeTree::default();
    tree.build(native, items);
    log::trace!(
        "rebuilt {:?} menu: {} entries, {} submenus, {} bindings, {} implicit variables",
        native.kind(),
        native.entry_count(),
        tree.submenu_count(),
        tree.binding_count(),
        tree.implicit_variables.len()
    );
    tree
}
