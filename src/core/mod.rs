//! Core types shared across the settings console

mod color;
mod events;
mod formatting;

pub use color::{Color, ParseColorError};
pub use events::SettingsEvent;
pub use formatting::{format_date, to_chrono_format};
