use std::path::PathBuf;

use ratatui::style::Color;
use serde::Deserialize;

use super::theme::Theme;

/// Parse a color string into a ratatui Color.
/// Supports named colors, hex (#ff0000, #f00) and indexed (0-255).
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Ok(n) = s.parse::<u8>() {
        return Some(Color::Indexed(n));
    }

    match s.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Color overrides in the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorOverrides {
    pub commit_hash: Option<String>,
    pub subject: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub local_branch: Option<String>,
    pub remote_branch: Option<String>,
    pub tag_label: Option<String>,
    pub head_label: Option<String>,
    pub diff_addition: Option<String>,
    pub diff_deletion: Option<String>,
    pub diff_context: Option<String>,
    pub diff_hunk: Option<String>,
    pub file_path: Option<String>,
    pub text: Option<String>,
    pub selection_bg: Option<String>,
}

/// Main config structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default = "default_layout_name")]
    pub layout: String,

    #[serde(default = "default_max_commits")]
    pub max_commits: usize,

    #[serde(default)]
    pub colors: ColorOverrides,
}

fn default_theme_name() -> String {
    "default".to_string()
}

fn default_layout_name() -> String {
    "lanes".to_string()
}

fn default_max_commits() -> usize {
    256
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            layout: default_layout_name(),
            max_commits: default_max_commits(),
            colors: ColorOverrides::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("logi").join("config.toml"))
    }

    /// Load config from the default path, or return default config
    pub fn load() -> Self {
        Self::default_path()
            .and_then(|path| Self::load_from_path(&path).ok())
            .unwrap_or_default()
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Resolve the theme with overrides applied
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_name(&self.theme).unwrap_or_else(Theme::default_theme);

        macro_rules! apply_override {
            ($field:ident) => {
                if let Some(ref color_str) = self.colors.$field {
                    if let Some(color) = parse_color(color_str) {
                        theme.$field = color;
                    }
                }
            };
        }

        apply_override!(commit_hash);
        apply_override!(subject);
        apply_override!(author);
        apply_override!(date);
        apply_override!(local_branch);
        apply_override!(remote_branch);
        apply_override!(tag_label);
        apply_override!(head_label);
        apply_override!(diff_addition);
        apply_override!(diff_deletion);
        apply_override!(diff_context);
        apply_override!(diff_hunk);
        apply_override!(file_path);
        apply_override!(text);
        apply_override!(selection_bg);

        theme
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}
