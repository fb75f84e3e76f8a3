//! The settings window.
//!
//! Every option of the on-air display in one tabbed form, backed either
//! by the local persisted store or by an in-memory store whose contents
//! are exchanged as JSON with a remote screen. Fields are described by
//! a declarative binding table; populate and apply are single generic
//! passes over it.

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{
    Box as GtkBox, Button, CheckButton, DropDown, Entry, Frame, Label, Notebook, Orientation,
    ScrolledWindow, StringList, TextView, Window,
};
use log::{info, warn};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::{defaults, LocalStore, MemoryStore, SettingsBackend};
use crate::core::{format_date, Color, SettingsEvent};
use crate::ui::bindings::{apply_all, populate_all, FieldBinding};
use crate::ui::color_button::ColorButton;
use crate::ui::demo_label::DemoLabel;
use crate::ui::image_picker::ImagePicker;

type EventSlot = Rc<RefCell<Option<Box<dyn Fn(&SettingsEvent)>>>>;
type Refreshers = Rc<Vec<Box<dyn Fn()>>>;

const LED_GROUPS: [&str; 4] = ["LED1", "LED2", "LED3", "LED4"];

/// Backdrop behind the station name / slogan previews.
const DEMO_BACKDROP: Color = Color::rgb(0x1e, 0x1e, 0x1e);

pub struct SettingsDialog {
    window: Window,
    backend: Rc<RefCell<SettingsBackend>>,
    bindings: Rc<Vec<FieldBinding>>,
    refreshers: Refreshers,
    row: Rc<Cell<i32>>,
    on_event: EventSlot,
}

impl SettingsDialog {
    /// Editor for this machine's persisted settings.
    pub fn local(store: LocalStore) -> Self {
        Self::build(SettingsBackend::Local(store))
    }

    /// Editor for one row of a remote-screens table. Configuration
    /// arrives later via [`load_remote_config`](Self::load_remote_config).
    pub fn remote() -> Self {
        Self::build(SettingsBackend::Remote(MemoryStore::new()))
    }

    fn build(backend: SettingsBackend) -> Self {
        let remote_mode = backend.is_remote();
        let backend = Rc::new(RefCell::new(backend));
        let row = Rc::new(Cell::new(-1));
        let on_event: EventSlot = Rc::new(RefCell::new(None));

        let window = Window::builder()
            .title("Cuelight Settings")
            .default_width(580)
            .default_height(640)
            .hide_on_close(true)
            .build();

        let vbox = GtkBox::new(Orientation::Vertical, 12);
        vbox.set_margin_start(12);
        vbox.set_margin_end(12);
        vbox.set_margin_top(12);
        vbox.set_margin_bottom(12);

        let notebook = Notebook::new();
        notebook.set_vexpand(true);

        let mut bindings = Vec::new();
        let mut refreshers: Vec<Box<dyn Fn()>> = Vec::new();

        let general_page = create_general_tab(&mut bindings, &mut refreshers);
        notebook.append_page(&general_page, Some(&Label::new(Some("General"))));

        let leds_page = create_leds_tab(&mut bindings, &mut refreshers);
        notebook.append_page(&leds_page, Some(&Label::new(Some("LEDs"))));

        let clock_page = create_clock_tab(&mut bindings);
        notebook.append_page(&clock_page, Some(&Label::new(Some("Clock"))));

        let network_page = create_network_tab(&mut bindings);
        notebook.append_page(&network_page, Some(&Label::new(Some("Network"))));

        let formatting_page = create_formatting_tab(&mut bindings);
        notebook.append_page(&formatting_page, Some(&Label::new(Some("Formatting"))));

        let weather_page = create_weather_tab(&mut bindings);
        notebook.append_page(&weather_page, Some(&Label::new(Some("Weather"))));

        vbox.append(&notebook);

        let bindings = Rc::new(bindings);
        let refreshers: Refreshers = Rc::new(refreshers);

        // Host action row
        let host_box = GtkBox::new(Orientation::Horizontal, 6);
        let version_label = Label::new(Some(&format!("Version {}", env!("CARGO_PKG_VERSION"))));
        version_label.add_css_class("dim-label");
        version_label.set_hexpand(true);
        version_label.set_halign(gtk4::Align::Start);
        host_box.append(&version_label);

        let exit_button = Button::with_label("Exit Display");
        let reboot_button = Button::with_label("Reboot Host");
        let shutdown_button = Button::with_label("Shutdown Host");
        host_box.append(&exit_button);
        host_box.append(&reboot_button);
        host_box.append(&shutdown_button);
        vbox.append(&host_box);

        // Dialog button row
        let button_box = GtkBox::new(Orientation::Horizontal, 6);
        button_box.set_halign(gtk4::Align::End);

        let reset_button = Button::with_label("Reset Settings");
        // A remote peer has no local store to wipe.
        reset_button.set_visible(!remote_mode);
        let close_button = Button::with_label("Close");
        let apply_button = Button::with_label("Apply");
        apply_button.add_css_class("suggested-action");
        button_box.append(&reset_button);
        button_box.append(&close_button);
        button_box.append(&apply_button);
        vbox.append(&button_box);

        window.set_child(Some(&vbox));

        // Wire buttons. Everything behavioral captures the shared state
        // directly, so the dialog keeps working even if this handle is
        // dropped after `open`.
        {
            let backend = backend.clone();
            let bindings = bindings.clone();
            let row = row.clone();
            let on_event = on_event.clone();
            apply_button.connect_clicked(move |_| {
                apply_to_store(&backend, &bindings, &row, &on_event);
                emit(&on_event, SettingsEvent::ConfigFinished);
            });
        }

        {
            let backend = backend.clone();
            let bindings = bindings.clone();
            let refreshers = refreshers.clone();
            let on_event = on_event.clone();
            let window_clone = window.clone();
            close_button.connect_clicked(move |_| {
                populate_from_store(&backend, &bindings, &refreshers);
                window_clone.set_visible(false);
                emit(&on_event, SettingsEvent::ConfigFinished);
                emit(&on_event, SettingsEvent::ConfigClosed);
            });
        }

        {
            let backend = backend.clone();
            let bindings = bindings.clone();
            let refreshers = refreshers.clone();
            let on_event = on_event.clone();
            let window_clone = window.clone();
            reset_button.connect_clicked(move |_| {
                match &mut *backend.borrow_mut() {
                    SettingsBackend::Local(store) => {
                        store.clear();
                        info!("Persisted settings cleared");
                    }
                    SettingsBackend::Remote(_) => {
                        warn!("Reset is only available for local settings");
                        return;
                    }
                }
                populate_from_store(&backend, &bindings, &refreshers);
                window_clone.set_visible(false);
                emit(&on_event, SettingsEvent::ConfigFinished);
                emit(&on_event, SettingsEvent::ConfigClosed);
            });
        }

        {
            let row = row.clone();
            let on_event = on_event.clone();
            exit_button.connect_clicked(move |_| {
                let event = if remote_mode {
                    SettingsEvent::ExitRemoteDisplay { row: row.get() }
                } else {
                    SettingsEvent::ExitDisplay
                };
                emit(&on_event, event);
            });
        }

        {
            let row = row.clone();
            let on_event = on_event.clone();
            reboot_button.connect_clicked(move |_| {
                let event = if remote_mode {
                    SettingsEvent::RebootRemoteHost { row: row.get() }
                } else {
                    SettingsEvent::RebootHost
                };
                emit(&on_event, event);
            });
        }

        {
            let row = row.clone();
            let on_event = on_event.clone();
            shutdown_button.connect_clicked(move |_| {
                let event = if remote_mode {
                    SettingsEvent::ShutdownRemoteHost { row: row.get() }
                } else {
                    SettingsEvent::ShutdownHost
                };
                emit(&on_event, event);
            });
        }

        // Closing via the window manager discards edits like the Close
        // button does; hide_on_close keeps the widget tree alive.
        {
            let backend = backend.clone();
            let bindings = bindings.clone();
            let refreshers = refreshers.clone();
            let on_event = on_event.clone();
            window.connect_close_request(move |_| {
                populate_from_store(&backend, &bindings, &refreshers);
                emit(&on_event, SettingsEvent::ConfigFinished);
                emit(&on_event, SettingsEvent::ConfigClosed);
                glib::Propagation::Proceed
            });
        }

        // The form is pre-populated before it can ever be shown.
        populate_from_store(&backend, &bindings, &refreshers);

        Self {
            window,
            backend,
            bindings,
            refreshers,
            row,
            on_event,
        }
    }

    /// Show the form; fields already reflect the store contents.
    pub fn open(&self) {
        self.window.present();
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The remote-screens table row this editor is attached to
    /// (-1 in local mode).
    pub fn row(&self) -> i32 {
        self.row.get()
    }

    /// Register the single event callback.
    pub fn set_on_event<F: Fn(&SettingsEvent) + 'static>(&self, callback: F) {
        *self.on_event.borrow_mut() = Some(Box::new(callback));
    }

    /// Re-read every field from the backing store.
    pub fn populate_from_store(&self) {
        populate_from_store(&self.backend, &self.bindings, &self.refreshers);
    }

    /// Write every field back to the backing store. In remote mode this
    /// also raises [`SettingsEvent::ConfigChanged`] with the serialized
    /// payload; in local mode the store is synced to disk.
    pub fn apply_to_store(&self) {
        apply_to_store(&self.backend, &self.bindings, &self.row, &self.on_event);
    }

    /// Apply button behavior: write back, then notify.
    pub fn apply_settings(&self) {
        self.apply_to_store();
        emit(&self.on_event, SettingsEvent::ConfigFinished);
    }

    /// Close button behavior: discard edits, hide, notify.
    pub fn close_settings(&self) {
        self.populate_from_store();
        self.window.set_visible(false);
        emit(&self.on_event, SettingsEvent::ConfigFinished);
        emit(&self.on_event, SettingsEvent::ConfigClosed);
    }

    /// Reset button behavior: wipe the persisted store, show the
    /// defaults, hide. Local mode only; a remote peer has no store here
    /// to wipe.
    pub fn reset_settings(&self) {
        match &mut *self.backend.borrow_mut() {
            SettingsBackend::Local(store) => {
                store.clear();
                info!("Persisted settings cleared");
            }
            SettingsBackend::Remote(_) => {
                warn!("Reset is only available for local settings");
                return;
            }
        }
        self.populate_from_store();
        self.window.set_visible(false);
        emit(&self.on_event, SettingsEvent::ConfigFinished);
        emit(&self.on_event, SettingsEvent::ConfigClosed);
    }

    /// Ask the surrounding application to quit the display; routed to
    /// the row's peer in remote mode.
    pub fn request_exit(&self) {
        let event = if self.backend.borrow().is_remote() {
            SettingsEvent::ExitRemoteDisplay { row: self.row.get() }
        } else {
            SettingsEvent::ExitDisplay
        };
        emit(&self.on_event, event);
    }

    pub fn request_reboot(&self) {
        let event = if self.backend.borrow().is_remote() {
            SettingsEvent::RebootRemoteHost { row: self.row.get() }
        } else {
            SettingsEvent::RebootHost
        };
        emit(&self.on_event, event);
    }

    pub fn request_shutdown(&self) {
        let event = if self.backend.borrow().is_remote() {
            SettingsEvent::ShutdownRemoteHost { row: self.row.get() }
        } else {
            SettingsEvent::ShutdownHost
        };
        emit(&self.on_event, event);
    }

    /// Remote mode: remember the row, merge the peer's configuration
    /// and refresh the whole form from it.
    pub fn load_remote_config(&self, row: i32, json: &str) {
        self.row.set(row);
        if let Err(e) = self.backend.borrow_mut().import_json(json) {
            warn!("Ignoring remote configuration for row {}: {}", row, e);
            return;
        }
        self.populate_from_store();
    }

    /// The backing store serialized as the transport payload.
    pub fn config_json(&self) -> String {
        export_json(&self.backend)
    }
}

fn emit(on_event: &EventSlot, event: SettingsEvent) {
    if let Some(callback) = on_event.borrow().as_ref() {
        callback(&event);
    }
}

fn populate_from_store(
    backend: &Rc<RefCell<SettingsBackend>>,
    bindings: &Rc<Vec<FieldBinding>>,
    refreshers: &Refreshers,
) {
    populate_all(bindings, &mut *backend.borrow_mut());
    for refresh in refreshers.iter() {
        refresh();
    }
}

fn apply_to_store(
    backend: &Rc<RefCell<SettingsBackend>>,
    bindings: &Rc<Vec<FieldBinding>>,
    row: &Rc<Cell<i32>>,
    on_event: &EventSlot,
) {
    let remote = {
        let mut backend = backend.borrow_mut();
        apply_all(bindings, &mut *backend);
        if backend.is_remote() {
            true
        } else {
            match backend.sync() {
                Ok(()) => info!("Settings saved"),
                Err(e) => warn!("Failed to save settings: {}", e),
            }
            false
        }
    };

    if remote {
        let payload = export_json(backend);
        emit(
            on_event,
            SettingsEvent::ConfigChanged {
                row: row.get(),
                payload,
            },
        );
    }
}

fn export_json(backend: &Rc<RefCell<SettingsBackend>>) -> String {
    match backend.borrow().export_json() {
        Ok(json) => json,
        Err(e) => {
            warn!("Could not serialize settings: {}", e);
            "{}".to_string()
        }
    }
}

fn default_color(hex: &str) -> Color {
    hex.parse().unwrap_or_default()
}

fn labeled_row(label: &str, widget: &impl IsA<gtk4::Widget>) -> GtkBox {
    let row = GtkBox::new(Orientation::Horizontal, 12);
    let label = Label::new(Some(label));
    label.set_width_chars(14);
    label.set_xalign(0.0);
    row.append(&label);
    widget.set_hexpand(true);
    row.append(widget);
    row
}

fn tab_page() -> GtkBox {
    let page = GtkBox::new(Orientation::Vertical, 12);
    page.set_margin_start(12);
    page.set_margin_end(12);
    page.set_margin_top(12);
    page.set_margin_bottom(12);
    page
}

fn create_general_tab(
    bindings: &mut Vec<FieldBinding>,
    refreshers: &mut Vec<Box<dyn Fn()>>,
) -> GtkBox {
    let page = tab_page();

    // Station name with a color preview on a dark backdrop
    let station_entry = Entry::new();
    page.append(&labeled_row("Station Name:", &station_entry));

    let station_color = ColorButton::new(default_color(defaults::STATION_COLOR));
    let station_demo = DemoLabel::new(
        defaults::STATION_NAME,
        station_color.color(),
        DEMO_BACKDROP,
    );
    let station_row = GtkBox::new(Orientation::Horizontal, 12);
    station_row.append(station_demo.widget());
    station_row.append(station_color.widget());
    page.append(&labeled_row("Name Color:", &station_row));

    let slogan_entry = Entry::new();
    page.append(&labeled_row("Slogan:", &slogan_entry));

    let slogan_color = ColorButton::new(default_color(defaults::SLOGAN_COLOR));
    let slogan_demo = DemoLabel::new(defaults::SLOGAN, slogan_color.color(), DEMO_BACKDROP);
    let slogan_row = GtkBox::new(Orientation::Horizontal, 12);
    slogan_row.append(slogan_demo.widget());
    slogan_row.append(slogan_color.widget());
    page.append(&labeled_row("Slogan Color:", &slogan_row));

    // Previews follow the fields live and after every populate pass
    wire_text_preview(&station_entry, &station_demo);
    wire_fg_preview(&station_color, &station_demo, refreshers);
    wire_text_preview(&slogan_entry, &slogan_demo);
    wire_fg_preview(&slogan_color, &slogan_demo, refreshers);

    bindings.push(FieldBinding::Text {
        entry: station_entry,
        group: "General",
        key: "stationname",
        default: defaults::STATION_NAME,
    });
    bindings.push(FieldBinding::Text {
        entry: slogan_entry,
        group: "General",
        key: "slogan",
        default: defaults::SLOGAN,
    });
    bindings.push(FieldBinding::Color {
        button: station_color,
        group: "General",
        key: "stationcolor",
        default: default_color(defaults::STATION_COLOR),
    });
    bindings.push(FieldBinding::Color {
        button: slogan_color,
        group: "General",
        key: "slogancolor",
        default: default_color(defaults::SLOGAN_COLOR),
    });

    page
}

fn wire_text_preview(entry: &Entry, demo: &DemoLabel) {
    let demo = demo.clone();
    entry.connect_changed(move |entry| {
        demo.set_text(entry.text().as_str());
    });
}

fn wire_fg_preview(button: &ColorButton, demo: &DemoLabel, refreshers: &mut Vec<Box<dyn Fn()>>) {
    {
        let demo = demo.clone();
        button.set_on_change(move |color| demo.set_foreground(color));
    }
    let demo = demo.clone();
    let button = button.clone();
    refreshers.push(Box::new(move || demo.set_foreground(button.color())));
}

fn wire_bg_preview(button: &ColorButton, demo: &DemoLabel, refreshers: &mut Vec<Box<dyn Fn()>>) {
    {
        let demo = demo.clone();
        button.set_on_change(move |color| demo.set_background(color));
    }
    let demo = demo.clone();
    let button = button.clone();
    refreshers.push(Box::new(move || demo.set_background(button.color())));
}

fn create_leds_tab(
    bindings: &mut Vec<FieldBinding>,
    refreshers: &mut Vec<Box<dyn Fn()>>,
) -> GtkBox {
    let page = tab_page();

    // Shared inactive colors
    let inactive_frame = Frame::new(Some("Inactive LEDs"));
    let inactive_box = tab_page();

    let inactive_bg = ColorButton::new(default_color(defaults::LED_INACTIVE_BG_COLOR));
    let inactive_fg = ColorButton::new(default_color(defaults::LED_INACTIVE_TEXT_COLOR));
    let inactive_demo = DemoLabel::new("INACTIVE", inactive_fg.color(), inactive_bg.color());

    let inactive_row = GtkBox::new(Orientation::Horizontal, 12);
    inactive_row.append(inactive_demo.widget());
    inactive_row.append(&Label::new(Some("Background:")));
    inactive_row.append(inactive_bg.widget());
    inactive_row.append(&Label::new(Some("Text:")));
    inactive_row.append(inactive_fg.widget());
    inactive_box.append(&inactive_row);
    inactive_frame.set_child(Some(&inactive_box));
    page.append(&inactive_frame);

    wire_bg_preview(&inactive_bg, &inactive_demo, refreshers);
    wire_fg_preview(&inactive_fg, &inactive_demo, refreshers);

    bindings.push(FieldBinding::Color {
        button: inactive_bg,
        group: "LEDS",
        key: "inactivebgcolor",
        default: default_color(defaults::LED_INACTIVE_BG_COLOR),
    });
    bindings.push(FieldBinding::Color {
        button: inactive_fg,
        group: "LEDS",
        key: "inactivetextcolor",
        default: default_color(defaults::LED_INACTIVE_TEXT_COLOR),
    });

    let scroll = ScrolledWindow::new();
    scroll.set_policy(gtk4::PolicyType::Never, gtk4::PolicyType::Automatic);
    scroll.set_vexpand(true);
    let led_list = GtkBox::new(Orientation::Vertical, 12);
    for (index, led) in defaults::LEDS.iter().enumerate() {
        led_list.append(&create_led_frame(index, led, bindings, refreshers));
    }
    scroll.set_child(Some(&led_list));
    page.append(&scroll);

    page
}

fn create_led_frame(
    index: usize,
    led: &defaults::LedDefaults,
    bindings: &mut Vec<FieldBinding>,
    refreshers: &mut Vec<Box<dyn Fn()>>,
) -> Frame {
    let group = LED_GROUPS[index];
    let frame = Frame::new(Some(group));
    let content = tab_page();

    let used_check = CheckButton::with_label("Used");
    content.append(&used_check);

    let text_entry = Entry::new();
    content.append(&labeled_row("Caption:", &text_entry));

    let bg_color = ColorButton::new(default_color(led.active_bg_color));
    let fg_color = ColorButton::new(default_color(defaults::LED_ACTIVE_TEXT_COLOR));
    let demo = DemoLabel::new(led.text, fg_color.color(), bg_color.color());

    let color_row = GtkBox::new(Orientation::Horizontal, 12);
    color_row.append(demo.widget());
    color_row.append(&Label::new(Some("Background:")));
    color_row.append(bg_color.widget());
    color_row.append(&Label::new(Some("Text:")));
    color_row.append(fg_color.widget());
    content.append(&color_row);

    let autoflash_check = CheckButton::with_label("Autoflash");
    let timedflash_check = CheckButton::with_label("Timed flash");
    let flash_row = GtkBox::new(Orientation::Horizontal, 12);
    flash_row.append(&autoflash_check);
    flash_row.append(&timedflash_check);
    content.append(&flash_row);

    wire_text_preview(&text_entry, &demo);
    wire_bg_preview(&bg_color, &demo, refreshers);
    wire_fg_preview(&fg_color, &demo, refreshers);

    bindings.push(FieldBinding::Flag {
        check: used_check,
        group,
        key: "used",
        default: defaults::LED_USED,
    });
    bindings.push(FieldBinding::Text {
        entry: text_entry,
        group,
        key: "text",
        default: led.text,
    });
    bindings.push(FieldBinding::Color {
        button: bg_color,
        group,
        key: "activebgcolor",
        default: default_color(led.active_bg_color),
    });
    bindings.push(FieldBinding::Color {
        button: fg_color,
        group,
        key: "activetextcolor",
        default: default_color(defaults::LED_ACTIVE_TEXT_COLOR),
    });
    bindings.push(FieldBinding::Flag {
        check: autoflash_check,
        group,
        key: "autoflash",
        default: defaults::LED_AUTOFLASH,
    });
    bindings.push(FieldBinding::Flag {
        check: timedflash_check,
        group,
        key: "timedflash",
        default: defaults::LED_TIMEDFLASH,
    });

    frame.set_child(Some(&content));
    frame
}

fn create_clock_tab(bindings: &mut Vec<FieldBinding>) -> GtkBox {
    let page = tab_page();

    let digital_check = CheckButton::with_label("Digital");
    let analog_check = CheckButton::with_label("Analog");
    analog_check.set_group(Some(&digital_check));
    let mode_row = GtkBox::new(Orientation::Horizontal, 12);
    mode_row.append(&digital_check);
    mode_row.append(&analog_check);
    page.append(&labeled_row("Clock Mode:", &mode_row));

    let seconds_check = CheckButton::with_label("Show seconds in digital clock");
    page.append(&seconds_check);

    let hour_color = ColorButton::new(default_color(defaults::CLOCK_HOUR_COLOR));
    page.append(&labeled_row("Hour Marks:", hour_color.widget()));
    let second_color = ColorButton::new(default_color(defaults::CLOCK_SECOND_COLOR));
    page.append(&labeled_row("Second Marks:", second_color.widget()));
    let digit_color = ColorButton::new(default_color(defaults::CLOCK_DIGIT_COLOR));
    page.append(&labeled_row("Digits:", digit_color.widget()));

    // Logo path with file picker; nothing is loaded here
    let logo_entry = Entry::new();
    let browse_button = Button::with_label("Browse…");
    let reset_logo_button = Button::with_label("Reset Logo");
    let logo_row = GtkBox::new(Orientation::Horizontal, 6);
    logo_entry.set_hexpand(true);
    logo_row.append(&logo_entry);
    logo_row.append(&browse_button);
    logo_row.append(&reset_logo_button);
    page.append(&labeled_row("Logo File:", &logo_row));

    {
        let logo_entry = logo_entry.clone();
        browse_button.connect_clicked(move |btn| {
            let window = btn
                .root()
                .and_then(|root| root.downcast::<gtk4::Window>().ok());
            let logo_entry = logo_entry.clone();
            ImagePicker::new("Select Logo Image").pick(window.as_ref(), move |path| {
                if let Some(path) = path {
                    logo_entry.set_text(&path.to_string_lossy());
                }
            });
        });
    }

    {
        let logo_entry = logo_entry.clone();
        reset_logo_button.connect_clicked(move |_| {
            logo_entry.set_text(defaults::LOGO_PATH);
        });
    }

    bindings.push(FieldBinding::Toggle {
        on: digital_check,
        off: analog_check,
        group: "Clock",
        key: "digital",
        default: defaults::CLOCK_DIGITAL,
    });
    bindings.push(FieldBinding::Flag {
        check: seconds_check,
        group: "Clock",
        key: "showSeconds",
        default: defaults::CLOCK_SHOW_SECONDS,
    });
    bindings.push(FieldBinding::Color {
        button: hour_color,
        group: "Clock",
        key: "digitalhourcolor",
        default: default_color(defaults::CLOCK_HOUR_COLOR),
    });
    bindings.push(FieldBinding::Color {
        button: second_color,
        group: "Clock",
        key: "digitalsecondcolor",
        default: default_color(defaults::CLOCK_SECOND_COLOR),
    });
    bindings.push(FieldBinding::Color {
        button: digit_color,
        group: "Clock",
        key: "digitaldigitcolor",
        default: default_color(defaults::CLOCK_DIGIT_COLOR),
    });
    bindings.push(FieldBinding::Text {
        entry: logo_entry,
        group: "Clock",
        key: "logopath",
        default: defaults::LOGO_PATH,
    });

    page
}

fn create_network_tab(bindings: &mut Vec<FieldBinding>) -> GtkBox {
    let page = tab_page();

    let udp_entry = Entry::new();
    page.append(&labeled_row("UDP Port:", &udp_entry));
    let http_entry = Entry::new();
    page.append(&labeled_row("HTTP Port:", &http_entry));

    let ntp_frame = Frame::new(Some("Time Synchronization"));
    let ntp_box = tab_page();
    let ntp_check = CheckButton::with_label("Warn when clock is not NTP-synchronized");
    ntp_box.append(&ntp_check);
    let ntp_server_entry = Entry::new();
    ntp_box.append(&labeled_row("NTP Server:", &ntp_server_entry));
    ntp_frame.set_child(Some(&ntp_box));
    page.append(&ntp_frame);

    bindings.push(FieldBinding::Text {
        entry: udp_entry,
        group: "Network",
        key: "udpport",
        default: defaults::UDP_PORT,
    });
    bindings.push(FieldBinding::Text {
        entry: http_entry,
        group: "Network",
        key: "httpport",
        default: defaults::HTTP_PORT,
    });
    bindings.push(FieldBinding::Flag {
        check: ntp_check,
        group: "NTP",
        key: "ntpcheck",
        default: defaults::NTP_CHECK,
    });
    bindings.push(FieldBinding::Text {
        entry: ntp_server_entry,
        group: "NTP",
        key: "ntpcheckserver",
        default: defaults::NTP_CHECK_SERVER,
    });

    page
}

fn create_formatting_tab(bindings: &mut Vec<FieldBinding>) -> GtkBox {
    let page = tab_page();

    let date_format_entry = Entry::new();
    page.append(&labeled_row("Date Format:", &date_format_entry));

    let preview_label = Label::new(None);
    preview_label.add_css_class("dim-label");
    preview_label.set_halign(gtk4::Align::Start);
    page.append(&labeled_row("Preview:", &preview_label));

    {
        let preview_label = preview_label.clone();
        date_format_entry.connect_changed(move |entry| {
            let today = chrono::Local::now().date_naive();
            preview_label.set_text(&format_date(entry.text().as_str(), today));
        });
    }

    let language_dropdown = DropDown::new(
        Some(StringList::new(defaults::TEXT_CLOCK_LANGUAGES)),
        gtk4::Expression::NONE,
    );
    page.append(&labeled_row("Text Clock:", &language_dropdown));

    let am_pm_check = CheckButton::with_label("12 hour (AM/PM)");
    let h24_check = CheckButton::with_label("24 hour");
    h24_check.set_group(Some(&am_pm_check));
    let time_row = GtkBox::new(Orientation::Horizontal, 12);
    time_row.append(&h24_check);
    time_row.append(&am_pm_check);
    page.append(&labeled_row("Time Style:", &time_row));

    bindings.push(FieldBinding::Text {
        entry: date_format_entry,
        group: "Formatting",
        key: "dateFormat",
        default: defaults::DATE_FORMAT,
    });
    bindings.push(FieldBinding::Choice {
        dropdown: language_dropdown,
        choices: defaults::TEXT_CLOCK_LANGUAGES,
        group: "Formatting",
        key: "textClockLanguage",
        default: defaults::TEXT_CLOCK_LANGUAGE,
    });
    bindings.push(FieldBinding::Toggle {
        on: am_pm_check,
        off: h24_check,
        group: "Formatting",
        key: "isAmPm",
        default: defaults::TIME_AM_PM,
    });

    page
}

fn create_weather_tab(bindings: &mut Vec<FieldBinding>) -> GtkBox {
    let page = tab_page();

    let enabled_check = CheckButton::with_label("Show weather widget");
    page.append(&enabled_check);

    let code_view = TextView::new();
    code_view.set_monospace(true);
    code_view.set_sensitive(false);
    let code_scroll = ScrolledWindow::new();
    code_scroll.set_vexpand(true);
    code_scroll.set_child(Some(&code_view));
    page.append(&Label::new(Some("Widget embed code:")));
    page.append(&code_scroll);

    {
        let code_view = code_view.clone();
        enabled_check.connect_toggled(move |check| {
            code_view.set_sensitive(check.is_active());
        });
    }

    bindings.push(FieldBinding::Flag {
        check: enabled_check,
        group: "WeatherWidget",
        key: "WeatherWidgetEnabled",
        default: defaults::WEATHER_WIDGET_ENABLED,
    });
    bindings.push(FieldBinding::Multiline {
        view: code_view,
        group: "WeatherWidget",
        key: "WeatherWidgetCode",
        default: defaults::WEATHER_WIDGET_FALLBACK,
    });

    page
}
