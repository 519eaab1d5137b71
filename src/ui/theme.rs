//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are Catppuccin palettes compiled into the plugin; custom
//! themes are loaded from TOML files.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! ticker_fg = "#f9e2af"
//! control_fg = "#bac2de"
//! control_active_fg = "#1e1e2e"
//! control_active_bg = "#f5c2e7"
//! focus_fg = "#89b4fa"
//! card_border = "#45475a"
//! badge_fg = "#1e1e2e"
//! badge_bg = "#fab387"
//! message_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! ```

use crate::domain::{Result, ShowcaseError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color strings (e.g. `"#cdd6f4"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,
    pub text_normal: String,
    /// Footer and pending logos.
    pub text_dim: String,
    pub border: String,
    pub ticker_fg: String,
    pub control_fg: String,
    /// Pressed toolbar control.
    pub control_active_fg: String,
    pub control_active_bg: String,
    /// Focused control outline and focused card border.
    pub focus_fg: String,
    pub card_border: String,
    /// Fallback name badge.
    pub badge_fg: String,
    pub badge_bg: String,
    /// Loading and empty placeholders.
    pub message_fg: String,
    pub error_fg: String,
}

struct Palette {
    text: &'static str,
    subtext: &'static str,
    overlay: &'static str,
    surface: &'static str,
    base: &'static str,
    pink: &'static str,
    yellow: &'static str,
    peach: &'static str,
    blue: &'static str,
    red: &'static str,
}

const MOCHA: Palette = Palette {
    text: "#cdd6f4",
    subtext: "#bac2de",
    overlay: "#6c7086",
    surface: "#45475a",
    base: "#1e1e2e",
    pink: "#f5c2e7",
    yellow: "#f9e2af",
    peach: "#fab387",
    blue: "#89b4fa",
    red: "#f38ba8",
};

const LATTE: Palette = Palette {
    text: "#4c4f69",
    subtext: "#5c5f77",
    overlay: "#9ca0b0",
    surface: "#ccd0da",
    base: "#eff1f5",
    pink: "#ea76cb",
    yellow: "#df8e1d",
    peach: "#fe640b",
    blue: "#1e66f5",
    red: "#d20f39",
};

const FRAPPE: Palette = Palette {
    text: "#c6d0f5",
    subtext: "#b5bfe2",
    overlay: "#737994",
    surface: "#51576d",
    base: "#303446",
    pink: "#f4b8e4",
    yellow: "#e5c890",
    peach: "#ef9f76",
    blue: "#8caaee",
    red: "#e78284",
};

const MACCHIATO: Palette = Palette {
    text: "#cad3f5",
    subtext: "#b8c0e0",
    overlay: "#6e738d",
    surface: "#494d64",
    base: "#24273a",
    pink: "#f5bde6",
    yellow: "#eed49f",
    peach: "#f5a97f",
    blue: "#8aadf4",
    red: "#ed8796",
};

impl Palette {
    fn theme(&self, name: &str) -> Theme {
        Theme {
            name: name.to_string(),
            colors: ThemeColors {
                header_fg: self.text.to_string(),
                header_bg: None,
                text_normal: self.text.to_string(),
                text_dim: self.overlay.to_string(),
                border: self.surface.to_string(),
                ticker_fg: self.yellow.to_string(),
                control_fg: self.subtext.to_string(),
                control_active_fg: self.base.to_string(),
                control_active_bg: self.pink.to_string(),
                focus_fg: self.blue.to_string(),
                card_border: self.surface.to_string(),
                badge_fg: self.base.to_string(),
                badge_bg: self.peach.to_string(),
                message_fg: self.blue.to_string(),
                error_fg: self.red.to_string(),
            },
        }
    }
}

impl Theme {
    /// Looks up a built-in theme by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brand_showcase::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let palette = match name {
            "catppuccin-mocha" => &MOCHA,
            "catppuccin-latte" => &LATTE,
            "catppuccin-frappe" => &FRAPPE,
            "catppuccin-macchiato" => &MACCHIATO,
            _ => return None,
        };
        Some(palette.theme(name))
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Io`] when the file cannot be read and
    /// [`ShowcaseError::Theme`] when its content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ShowcaseError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Parses hex to RGB, white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        MOCHA.theme("catppuccin-mocha")
    }
}
