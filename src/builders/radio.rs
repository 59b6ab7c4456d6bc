// Copyright 2022-2022 Tauri Programme within The Commons Conservancy
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use crate::{accelerator::Accelerator, Callback, MenuId, MenuRadiobutton, Value, Variable};

/// A builder type for [`MenuRadiobutton`]
#[derive(Clone, Debug)]
pub struct MenuRadiobuttonBuilder {
    item: MenuRadiobutton,
}

impl MenuRadiobuttonBuilder {
    /// Radiobuttons always need a value, so there is no `Default` for this builder.
    pub fn new<V: Into<Value>>(value: V) -> Self {
        Self {
            item: MenuRadiobutton::new(value, ""),
        }
    }

    pub fn id<I: Into<MenuId>>(mut self, id: I) -> Self {
        self.item.action.id = Some(id.into());
        self
    }

    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.item.action.label = label.into();
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.item.action.enabled = enabled;
        self
    }

    pub fn command<F: Fn() + 'static>(mut self, command: F) -> Self {
        self.item.action.command = Some(Callback::new(command));
        self
    }

    pub fn variable(mut self, variable: Variable) -> Self {
        self.item.variable = Some(variable);
        self
    }

    pub fn accelerator<A: TryInto<Accelerator>>(mut self, accelerator: Option<A>) -> crate::Result<Self>
    where
        crate::Error: From<<A as TryInto<Accelerator>>::Error>,
    {
        self.item.action.accelerator = accelerator.map(|a| a.try_into()).transpose()?;
        Ok(self)
    }

    /// Build this radiobutton, failing if the variable cannot hold its value.
    pub fn build(self) -> crate::Result<MenuRadiobutton> {
        let mut item = self.item;
        let variable = item.variable.take();
        item.set_variable(variable)?;
        Ok(item)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Error, ValueKind};

    #[test]
    fn builds_bound_radiobutton() {
        let lang = Variable::string("deu");
        let item = MenuRadiobuttonBuilder::new("deu")
            .label("Deutsch")
            .id("lang-deu")
            .variable(lang.clone())
            .build()
            .unwrap();

        assert_eq!(item.label(), "Deutsch");
        assert_eq!(item.variable(), Some(&lang));
        assert_eq!(item.is_selected(), Some(true));
        assert_eq!(item.id(), Some(&MenuId::new("lang-deu")));
    }

    #[test]
    fn rejects_variable_of_another_kind() {
        let err = MenuRadiobuttonBuilder::new("eng")
            .label("English")
            .variable(Variable::int(0))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                field: "value",
                expected: ValueKind::Int,
                found: ValueKind::Str,
            }
        );
        assert!(err.is_type_error());
    }

    #[test]
    fn widens_int_value_for_float_variable() {
        let scale = Variable::double(1.0);
        let item = MenuRadiobuttonBuilder::new(2)
            .variable(scale)
            .build()
            .unwrap();
        assert_eq!(item.value(), &Value::Float(2.0));
    }
}
