//! Theme: maps visual roles to terminal styles.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use timestable_core::VisualRole;
use timestable_core::config::ThemeConfig;

/// Resolved colors for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub product: Color,
    pub multiplier: Color,
    pub span: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    /// Parses configured color names, falling back per field on bad input.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            product: parse_color("product", &config.product, Color::Yellow),
            multiplier: parse_color("multiplier", &config.multiplier, Color::Cyan),
            span: parse_color("span", &config.span, Color::Blue),
            border: parse_color("border", &config.border, Color::White),
        }
    }

    /// Style for a cell with the given role.
    pub fn style_for(&self, role: VisualRole) -> Style {
        match role {
            VisualRole::Product => Style::default()
                .fg(Color::Black)
                .bg(self.product)
                .add_modifier(Modifier::BOLD),
            VisualRole::Multiplier => Style::default()
                .fg(self.multiplier)
                .add_modifier(Modifier::BOLD),
            VisualRole::Span => Style::default().fg(Color::Black).bg(self.span),
            VisualRole::Unmarked => Style::default().fg(Color::DarkGray),
        }
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

fn parse_color(field: &str, raw: &str, fallback: Color) -> Color {
    Color::from_str(raw.trim()).unwrap_or_else(|_| {
        tracing::warn!(field, value = raw, "unknown theme color, using default");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.product, Color::Yellow);
        assert_eq!(theme.multiplier, Color::Cyan);
        assert_eq!(theme.span, Color::Blue);
        assert_eq!(theme.border, Color::White);
    }

    #[test]
    fn test_hex_and_fallback_colors() {
        let config = ThemeConfig {
            product: "#ff8800".to_string(),
            multiplier: "not-a-color".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.product, Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(theme.multiplier, Color::Cyan);
    }

    #[test]
    fn test_roles_have_distinct_styles() {
        let theme = Theme::default();
        let styles = [
            theme.style_for(VisualRole::Product),
            theme.style_for(VisualRole::Multiplier),
            theme.style_for(VisualRole::Span),
            theme.style_for(VisualRole::Unmarked),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
