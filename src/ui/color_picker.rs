//! Modal color chooser for the config color fields

use gtk4::prelude::*;
use gtk4::{ColorDialog, Window};

use crate::core::Color;

/// Color picker dialog
pub struct ColorPickerDialog;

impl ColorPickerDialog {
    /// Show the chooser seeded with `initial_color` and return the
    /// selection, or `None` when the user cancels.
    pub async fn pick_color(parent: Option<&Window>, initial_color: Color) -> Option<Color> {
        let dialog = ColorDialog::builder()
            .title("Please select a color")
            .modal(true)
            .with_alpha(false)
            .build();

        let initial_rgba = initial_color.to_gdk_rgba();

        match dialog.choose_rgba_future(parent, Some(&initial_rgba)).await {
            Ok(rgba) => Some(Color::from_gdk_rgba(&rgba)),
            Err(_) => None,
        }
    }

    /// Like [`pick_color`](Self::pick_color), but a cancelled dialog
    /// keeps the current color.
    pub async fn pick_color_or_keep(parent: Option<&Window>, current: Color) -> Color {
        Self::pick_color(parent, current).await.unwrap_or(current)
    }
}
