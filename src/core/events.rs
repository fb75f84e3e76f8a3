//! Notifications raised by the settings console.

/// Raised by the settings window for the surrounding application.
///
/// In local mode the store is already durable when an event fires, so
/// none of the local variants carry a payload. The remote variants are
/// tagged with the table row of the remote screen being edited, so a
/// controller with several open sessions can route them.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    /// A remote screen's configuration was rewritten; `payload` is the
    /// serialized config to deliver to that peer.
    ConfigChanged { row: i32, payload: String },
    /// Form contents were written back or restored; the display should
    /// re-read its configuration.
    ConfigFinished,
    /// The settings window was dismissed.
    ConfigClosed,
    /// Quit the display application.
    ExitDisplay,
    /// Reboot the machine the display runs on.
    RebootHost,
    /// Power off the machine the display runs on.
    ShutdownHost,
    ExitRemoteDisplay { row: i32 },
    RebootRemoteHost { row: i32 },
    ShutdownRemoteHost { row: i32 },
}
