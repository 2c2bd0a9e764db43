use crate::engine::config::ThemeConfig;
use ratatui::style::Color;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26
            text: Color::Rgb(169, 177, 214),    // #A9B1D6
            accent: Color::Rgb(247, 118, 142),  // #F7768E
            dimmed: Color::Rgb(100, 110, 150),  // #646E96
        }
    }

    /// Builds a theme from the `[theme]` config table. Colors that do not
    /// parse keep their midnight value.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let base = Self::midnight();
        Self {
            background: parse_color("background", &config.background, base.background),
            text: parse_color("text", &config.text, base.text),
            accent: parse_color("accent", &config.accent, base.accent),
            dimmed: parse_color("dimmed", &config.dimmed, base.dimmed),
        }
    }
}

fn parse_color(field: &str, value: &str, fallback: Color) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        warn!(field, value, "invalid theme color, using default");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_midnight() {
        assert_eq!(Theme::from_config(&ThemeConfig::default()), Theme::midnight());
    }

    #[test]
    fn test_named_and_hex_colors() {
        let config = ThemeConfig {
            background: "black".to_string(),
            text: "#FFFFFF".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let config = ThemeConfig {
            accent: "not-a-colour".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&config).accent, Theme::midnight().accent);
    }
}
