//! Terminal colors for each paint role.

use clockface_core::{ColorTheme, Paint};
use ratatui::style::Color;

/// Backdrop behind the dial in every theme.
const BACKDROP: Color = Color::Rgb(40, 40, 40);

/// Dial color for the tinted themes.
const DARK_DIAL: Color = Color::Rgb(15, 15, 15);

/// Resolve a paint role to a terminal color under `theme`.
pub fn color(theme: ColorTheme, paint: Paint) -> Color {
    match (theme, paint) {
        (_, Paint::Backdrop) => BACKDROP,
        (ColorTheme::Classic, Paint::Face) => Color::White,
        (ColorTheme::Classic, Paint::Numeral | Paint::Hand) => Color::Black,
        (ColorTheme::Classic, Paint::Accent) => Color::Red,
        (_, Paint::Face) => DARK_DIAL,
        (_, Paint::Numeral | Paint::Hand) => tint(theme),
        // Keep the second hand distinguishable from red hands
        (ColorTheme::Red, Paint::Accent) => Color::White,
        (_, Paint::Accent) => Color::Red,
    }
}

/// Color used for the help line keys.
pub fn highlight(theme: ColorTheme) -> Color {
    match theme {
        ColorTheme::Classic => Color::Red,
        _ => tint(theme),
    }
}

fn tint(theme: ColorTheme) -> Color {
    match theme {
        ColorTheme::Classic | ColorTheme::White => Color::White,
        ColorTheme::Cyan => Color::Cyan,
        ColorTheme::Green => Color::Green,
        ColorTheme::Magenta => Color::Magenta,
        ColorTheme::Yellow => Color::Yellow,
        ColorTheme::Red => Color::Red,
        ColorTheme::Blue => Color::Blue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_palette() {
        assert_eq!(color(ColorTheme::Classic, Paint::Face), Color::White);
        assert_eq!(color(ColorTheme::Classic, Paint::Hand), Color::Black);
        assert_eq!(color(ColorTheme::Classic, Paint::Accent), Color::Red);
    }

    #[test]
    fn test_tinted_palette() {
        assert_eq!(color(ColorTheme::Green, Paint::Hand), Color::Green);
        assert_eq!(color(ColorTheme::Green, Paint::Numeral), Color::Green);
        assert_eq!(color(ColorTheme::Green, Paint::Face), DARK_DIAL);
        assert_ne!(
            color(ColorTheme::Red, Paint::Hand),
            color(ColorTheme::Red, Paint::Accent)
        );
    }
}
