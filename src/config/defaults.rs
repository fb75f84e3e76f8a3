//! Default configuration values for the display.
//!
//! These are the values every group/key pair falls back to when nothing
//! has been stored yet. Together with the form bindings they define the
//! config file format, so changing a key or default here changes what
//! existing installations read.

/// Station identity ("General" group).
pub const STATION_NAME: &str = "Radio Eriwan";
pub const SLOGAN: &str = "Your question is our motivation";
pub const STATION_COLOR: &str = "#FFAA00";
pub const SLOGAN_COLOR: &str = "#FFAA00";

/// NTP clock-sanity check ("NTP" group).
pub const NTP_CHECK: bool = true;
pub const NTP_CHECK_SERVER: &str = "pool.ntp.org";

/// Colors shared by all inactive LEDs ("LEDS" group).
pub const LED_INACTIVE_BG_COLOR: &str = "#222222";
pub const LED_INACTIVE_TEXT_COLOR: &str = "#555555";

/// Per-LED defaults ("LED1" … "LED4" groups).
pub struct LedDefaults {
    pub text: &'static str,
    pub active_bg_color: &'static str,
}

pub const LED_ACTIVE_TEXT_COLOR: &str = "#FFFFFF";
pub const LED_USED: bool = true;
pub const LED_AUTOFLASH: bool = false;
pub const LED_TIMEDFLASH: bool = false;

pub const LEDS: [LedDefaults; 4] = [
    LedDefaults { text: "ON AIR", active_bg_color: "#FF0000" },
    LedDefaults { text: "PHONE", active_bg_color: "#DCDC00" },
    LedDefaults { text: "DOORBELL", active_bg_color: "#00C8C8" },
    LedDefaults { text: "ARI", active_bg_color: "#FF00FF" },
];

/// "Clock" group.
pub const CLOCK_DIGITAL: bool = true;
pub const CLOCK_SHOW_SECONDS: bool = false;
pub const CLOCK_HOUR_COLOR: &str = "#3232FF";
pub const CLOCK_SECOND_COLOR: &str = "#FF9900";
pub const CLOCK_DIGIT_COLOR: &str = "#3232FF";
/// Bundled logo shown until a custom file is picked. The value is only
/// displayed and round-tripped here; the display resolves it.
pub const LOGO_PATH: &str = "resource:///com/cuelight/images/logo.png";

/// "Network" group. Ports are stored as text, matching the wire format.
pub const UDP_PORT: &str = "3310";
pub const HTTP_PORT: &str = "8010";

/// "Formatting" group.
pub const DATE_FORMAT: &str = "dddd, dd. MMMM yyyy";
pub const TEXT_CLOCK_LANGUAGE: &str = "English";
pub const TIME_AM_PM: bool = false;

/// Languages the spoken text clock supports.
pub const TEXT_CLOCK_LANGUAGES: &[&str] = &["English", "German"];

/// "WeatherWidget" group.
pub const WEATHER_WIDGET_ENABLED: bool = false;

/// Embed shown until the user pastes their own widget code: a
/// weatherwidget.io anchor plus its loader script.
pub const WEATHER_WIDGET_FALLBACK: &str = r#"<a class="weatherwidget-io" href="https://forecast7.com/en/52d5213d40/berlin/" data-label_1="BERLIN" data-label_2="Weather" data-mode="Current" data-days="3" data-theme="weather_one" >BERLIN Weather</a>
<script>
!function(d,s,id){var js,fjs=d.getElementsByTagName(s)[0];if(!d.getElementById(id)){js=d.createElement(s);js.id=id;js.src='https://weatherwidget.io/js/widget.min.js';fjs.parentNode.insertBefore(js,fjs);}}(document,'script','weatherwidget-io-js');
</script>
"#;
