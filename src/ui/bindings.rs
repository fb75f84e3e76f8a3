//! Declarative widget ↔ store bindings.
//!
//! Every form field is described once as a [`FieldBinding`] naming its
//! widget, config group, key and default. A single generic pass moves
//! values in either direction, so there is no hand-written per-field
//! transfer code.

use gtk4::prelude::*;
use gtk4::{CheckButton, DropDown, Entry, TextView};

use crate::config::{SettingValue, SettingsStore};
use crate::core::Color;
use crate::ui::color_button::ColorButton;

/// One form field bound to a (group, key) slot.
pub enum FieldBinding {
    /// Single-line text entry.
    Text {
        entry: Entry,
        group: &'static str,
        key: &'static str,
        default: &'static str,
    },
    /// Multi-line text view.
    Multiline {
        view: TextView,
        group: &'static str,
        key: &'static str,
        default: &'static str,
    },
    /// Check button.
    Flag {
        check: CheckButton,
        group: &'static str,
        key: &'static str,
        default: bool,
    },
    /// Exclusive pair stored as a single flag: `on` checked ⇔ true.
    Toggle {
        on: CheckButton,
        off: CheckButton,
        group: &'static str,
        key: &'static str,
        default: bool,
    },
    /// Color swatch; the stored form is `#rrggbb` text.
    Color {
        button: ColorButton,
        group: &'static str,
        key: &'static str,
        default: Color,
    },
    /// Dropdown over a fixed set of choices, stored by name.
    Choice {
        dropdown: DropDown,
        choices: &'static [&'static str],
        group: &'static str,
        key: &'static str,
        default: &'static str,
    },
}

impl FieldBinding {
    pub fn group(&self) -> &'static str {
        match self {
            FieldBinding::Text { group, .. }
            | FieldBinding::Multiline { group, .. }
            | FieldBinding::Flag { group, .. }
            | FieldBinding::Toggle { group, .. }
            | FieldBinding::Color { group, .. }
            | FieldBinding::Choice { group, .. } => group,
        }
    }

    /// Move the stored value (or the default) into the widget. The
    /// store cursor must already be on this binding's group.
    fn populate(&self, store: &dyn SettingsStore) {
        match self {
            FieldBinding::Text {
                entry,
                key,
                default,
                ..
            } => {
                entry.set_text(&store.text_value(key, default));
            }
            FieldBinding::Multiline {
                view,
                key,
                default,
                ..
            } => {
                view.buffer().set_text(&store.text_value(key, default));
            }
            FieldBinding::Flag {
                check,
                key,
                default,
                ..
            } => {
                check.set_active(store.bool_value(key, *default));
            }
            FieldBinding::Toggle {
                on,
                off,
                key,
                default,
                ..
            } => {
                let value = store.bool_value(key, *default);
                on.set_active(value);
                off.set_active(!value);
            }
            FieldBinding::Color {
                button,
                key,
                default,
                ..
            } => {
                button.set_color(store.color_value(key, *default));
            }
            FieldBinding::Choice {
                dropdown,
                choices,
                key,
                default,
                ..
            } => {
                let stored = store.text_value(key, default);
                let position = choices
                    .iter()
                    .position(|&c| c == stored)
                    .or_else(|| choices.iter().position(|c| c == default))
                    .unwrap_or(0);
                dropdown.set_selected(position as u32);
            }
        }
    }

    /// Move the widget state into the store. The cursor must already be
    /// on this binding's group.
    fn apply(&self, store: &mut dyn SettingsStore) {
        match self {
            FieldBinding::Text { entry, key, .. } => {
                store.set_value(key, SettingValue::text(entry.text().as_str()));
            }
            FieldBinding::Multiline { view, key, .. } => {
                let buffer = view.buffer();
                let text = buffer.text(&buffer.start_iter(), &buffer.end_iter(), true);
                store.set_value(key, SettingValue::text(text.as_str()));
            }
            FieldBinding::Flag { check, key, .. } => {
                store.set_value(key, SettingValue::Bool(check.is_active()));
            }
            FieldBinding::Toggle { on, key, .. } => {
                store.set_value(key, SettingValue::Bool(on.is_active()));
            }
            FieldBinding::Color { button, key, .. } => {
                store.set_value(key, SettingValue::from(button.color()));
            }
            FieldBinding::Choice {
                dropdown,
                choices,
                key,
                default,
                ..
            } => {
                let selected = choices
                    .get(dropdown.selected() as usize)
                    .copied()
                    .unwrap_or(*default);
                store.set_value(key, SettingValue::text(selected));
            }
        }
    }
}

/// Populate every widget from the store, opening each group once.
/// Bindings are expected in group order.
pub fn populate_all(bindings: &[FieldBinding], store: &mut dyn SettingsStore) {
    for_each_group(bindings, store, |binding, store| binding.populate(store));
}

/// Write every widget back to the store, grouped identically to
/// [`populate_all`].
pub fn apply_all(bindings: &[FieldBinding], store: &mut dyn SettingsStore) {
    for_each_group(bindings, store, |binding, store| binding.apply(store));
}

fn for_each_group<F>(bindings: &[FieldBinding], store: &mut dyn SettingsStore, mut visit: F)
where
    F: FnMut(&FieldBinding, &mut dyn SettingsStore),
{
    let mut open_group: Option<&str> = None;
    for binding in bindings {
        if open_group != Some(binding.group()) {
            if open_group.is_some() {
                store.end_group();
            }
            store.begin_group(binding.group());
            open_group = Some(binding.group());
        }
        visit(binding, store);
    }
    if open_group.is_some() {
        store.end_group();
    }
}
