//! UI components

mod bindings;
mod color_button;
mod color_picker;
mod demo_label;
mod image_picker;
mod settings_dialog;

pub use bindings::{apply_all, populate_all, FieldBinding};
pub use color_button::ColorButton;
pub use color_picker::ColorPickerDialog;
pub use demo_label::DemoLabel;
pub use image_picker::ImagePicker;
pub use settings_dialog::SettingsDialog;
