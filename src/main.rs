use clap::Parser;
use cuelight::config::LocalStore;
use cuelight::core::SettingsEvent;
use cuelight::ui::SettingsDialog;
use gtk4::prelude::*;
use gtk4::Application;
use log::{info, warn};
use std::path::PathBuf;

const APP_ID: &str = "com.cuelight.settings";

/// Cuelight - settings console for the on-air studio display
#[derive(Parser, Debug, Clone)]
#[command(name = "cuelight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Edit a specific settings file instead of the per-user one
    #[arg(short = 's', long = "settings-file", value_name = "FILE")]
    settings_file: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// Global CLI options accessible from build_ui
static CLI_OPTIONS: std::sync::OnceLock<Cli> = std::sync::OnceLock::new();

fn main() {
    let cli = Cli::parse();

    // Allow RUST_LOG to override the -d/--debug flag
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting cuelight v{}", env!("CARGO_PKG_VERSION"));

    CLI_OPTIONS.set(cli).expect("CLI options already set");

    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(build_ui);

    // Pass empty args since clap already consumed the real ones
    app.run_with_args(&["cuelight"]);
}

fn build_ui(app: &Application) {
    let cli = CLI_OPTIONS.get().cloned().unwrap_or_else(|| Cli {
        settings_file: None,
        debug: 0,
    });

    let store = match cli.settings_file {
        Some(path) => LocalStore::open_at(path),
        None => match LocalStore::open() {
            Ok(store) => store,
            Err(e) => {
                // No usable config directory: fall back to the working
                // directory so the console still comes up.
                warn!("{}; using ./cuelight-settings.json", e);
                LocalStore::open_at("cuelight-settings.json")
            }
        },
    };
    info!("Settings file: {}", store.path().display());

    let dialog = SettingsDialog::local(store);
    app.add_window(dialog.window());

    let app_clone = app.clone();
    dialog.set_on_event(move |event| match event {
        SettingsEvent::ConfigFinished => info!("Configuration updated"),
        SettingsEvent::ConfigClosed => app_clone.quit(),
        SettingsEvent::ExitDisplay => {
            info!("Exit requested");
            app_clone.quit();
        }
        SettingsEvent::RebootHost => warn!("Reboot is handled by the display host"),
        SettingsEvent::ShutdownHost => warn!("Shutdown is handled by the display host"),
        _ => {}
    });

    dialog.open();
}
