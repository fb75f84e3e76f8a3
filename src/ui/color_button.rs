//! Color swatch button.
//!
//! A button showing the current color that opens the modal chooser on
//! click. Cancelling the chooser leaves the color untouched.

use gtk4::prelude::*;
use gtk4::{Button, DrawingArea};
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::Color;
use crate::ui::color_picker::ColorPickerDialog;

#[derive(Clone)]
pub struct ColorButton {
    button: Button,
    drawing_area: DrawingArea,
    color: Rc<RefCell<Color>>,
    on_change: Rc<RefCell<Option<Box<dyn Fn(Color)>>>>,
}

impl ColorButton {
    pub fn new(initial_color: Color) -> Self {
        let color = Rc::new(RefCell::new(initial_color));
        let on_change: Rc<RefCell<Option<Box<dyn Fn(Color)>>>> = Rc::new(RefCell::new(None));

        let button = Button::new();
        button.set_tooltip_text(Some("Click to change color"));

        let drawing_area = DrawingArea::new();
        drawing_area.set_size_request(40, 24);

        let color_for_draw = color.clone();
        drawing_area.set_draw_func(move |_, cr, width, height| {
            let current = *color_for_draw.borrow();
            current.apply_to_cairo(cr);
            cr.rectangle(0.0, 0.0, width as f64, height as f64);
            let _ = cr.fill();
        });

        button.set_child(Some(&drawing_area));

        let color_clone = color.clone();
        let on_change_clone = on_change.clone();
        let drawing_area_clone = drawing_area.clone();
        button.connect_clicked(move |btn| {
            let current_color = *color_clone.borrow();
            let window = btn
                .root()
                .and_then(|root| root.downcast::<gtk4::Window>().ok());

            let color_clone2 = color_clone.clone();
            let on_change_clone2 = on_change_clone.clone();
            let drawing_area_clone2 = drawing_area_clone.clone();

            gtk4::glib::MainContext::default().spawn_local(async move {
                if let Some(new_color) =
                    ColorPickerDialog::pick_color(window.as_ref(), current_color).await
                {
                    *color_clone2.borrow_mut() = new_color;
                    drawing_area_clone2.queue_draw();

                    if let Some(ref callback) = *on_change_clone2.borrow() {
                        callback(new_color);
                    }
                }
            });
        });

        Self {
            button,
            drawing_area,
            color,
            on_change,
        }
    }

    /// Get the button widget (for adding to layouts).
    pub fn widget(&self) -> &Button {
        &self.button
    }

    pub fn color(&self) -> Color {
        *self.color.borrow()
    }

    /// Set the color (updates the swatch, does not fire the callback).
    pub fn set_color(&self, color: Color) {
        *self.color.borrow_mut() = color;
        self.drawing_area.queue_draw();
    }

    /// Set a callback to be called when the user picks a new color.
    pub fn set_on_change<F: Fn(Color) + 'static>(&self, callback: F) {
        *self.on_change.borrow_mut() = Some(Box::new(callback));
    }
}
