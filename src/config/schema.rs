use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cadenza/config.toml` or `~/.config/cadenza/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CADENZA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub playback: PlaybackSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// When to colour console output.
    pub color: ColorChoice,
    /// Text written before reading each command.
    pub prompt: String,
    /// Greeting printed once at startup.
    pub banner: String,
    /// Print the command menu before every prompt.
    pub show_menu: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            prompt: "> ".to_string(),
            banner: "Welcome to the Console Music Player!".to_string(),
            show_menu: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal.
    Auto,
    #[serde(alias = "on", alias = "yes")]
    Always,
    #[serde(alias = "off", alias = "no")]
    Never,
}

impl ColorChoice {
    /// Resolve to a concrete on/off given whether stdout is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Name the demo collection is loaded under.
    pub collection_name: String,
    /// Start playing the first item right after loading.
    pub autoplay: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            collection_name: "My Mixed Favorites".to_string(),
            autoplay: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `env_logger` filter used when `RUST_LOG` is unset, e.g. `"debug"`
    /// or `"cadenza=trace"`.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}
