//! Preview of a display element in its configured colors.
//!
//! Shows the caption text centered on a filled background, so LED and
//! station colors can be judged before hitting Apply. Purely visual;
//! nothing is written anywhere until the form applies.

use gtk4::prelude::*;
use gtk4::DrawingArea;
use pango::FontDescription;
use pangocairo::functions::{create_layout, show_layout};
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::Color;

struct DemoState {
    text: String,
    foreground: Color,
    background: Color,
}

#[derive(Clone)]
pub struct DemoLabel {
    area: DrawingArea,
    state: Rc<RefCell<DemoState>>,
}

impl DemoLabel {
    pub fn new(text: impl Into<String>, foreground: Color, background: Color) -> Self {
        let state = Rc::new(RefCell::new(DemoState {
            text: text.into(),
            foreground,
            background,
        }));

        let area = DrawingArea::new();
        area.set_content_width(160);
        area.set_content_height(48);
        area.set_hexpand(true);

        let state_for_draw = state.clone();
        area.set_draw_func(move |_, cr, width, height| {
            let state = state_for_draw.borrow();

            state.background.apply_to_cairo(cr);
            cr.rectangle(0.0, 0.0, width as f64, height as f64);
            let _ = cr.fill();

            // Centered caption via pango (cairo's toy text API leaks).
            let layout = create_layout(cr);
            layout.set_font_description(Some(&FontDescription::from_string("Sans Bold 16")));
            layout.set_text(&state.text);
            let (text_width, text_height) = layout.pixel_size();

            state.foreground.apply_to_cairo(cr);
            cr.move_to(
                (width as f64 - text_width as f64) / 2.0,
                (height as f64 - text_height as f64) / 2.0,
            );
            show_layout(cr, &layout);
        });

        Self { area, state }
    }

    pub fn widget(&self) -> &DrawingArea {
        &self.area
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.state.borrow_mut().text = text.into();
        self.area.queue_draw();
    }

    pub fn set_foreground(&self, color: Color) {
        self.state.borrow_mut().foreground = color;
        self.area.queue_draw();
    }

    pub fn set_background(&self, color: Color) {
        self.state.borrow_mut().background = color;
        self.area.queue_draw();
    }
}
