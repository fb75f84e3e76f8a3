//! Logo file selection.
//!
//! Opens a native file dialog filtered to image files. Only the chosen
//! path is handed back; nothing is loaded or validated here.

use gtk4::prelude::*;
use std::path::PathBuf;

pub struct ImagePicker {
    title: String,
}

impl ImagePicker {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Show the picker and call `callback` with the selected file path,
    /// or `None` when the dialog is cancelled.
    pub fn pick<F>(&self, parent: Option<&gtk4::Window>, callback: F)
    where
        F: Fn(Option<PathBuf>) + 'static,
    {
        use gtk4::FileDialog;

        let dialog = FileDialog::builder()
            .title(&self.title)
            .modal(true)
            .build();

        let filter = gtk4::FileFilter::new();
        filter.set_name(Some("Image Files"));
        filter.add_mime_type("image/png");
        filter.add_mime_type("image/jpeg");
        filter.add_mime_type("image/svg+xml");
        filter.add_pattern("*.png");
        filter.add_pattern("*.jpg");
        filter.add_pattern("*.jpeg");
        filter.add_pattern("*.svg");

        let filters = gtk4::gio::ListStore::new::<gtk4::FileFilter>();
        filters.append(&filter);

        let all_filter = gtk4::FileFilter::new();
        all_filter.set_name(Some("All Files"));
        all_filter.add_pattern("*");
        filters.append(&all_filter);

        dialog.set_filters(Some(&filters));
        dialog.set_default_filter(Some(&filter));

        dialog.open(parent, gtk4::gio::Cancellable::NONE, move |result| {
            let path = result.ok().and_then(|file| file.path());
            callback(path);
        });
    }
}
