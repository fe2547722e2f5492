//! Color theme and glyphs for the Campus TUI.
//!
//! The palette leans on the platform's four lesson color schemes over a dark
//! base, with an optional high-contrast override.

use std::ops::Range;

use ratatui::style::{Color, Modifier, Style};

use campus_types::ui::UiOptions;

mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(18, 18, 22);
    pub const BG_PANEL: Color = Color::Rgb(28, 28, 34);
    pub const BG_POPUP: Color = Color::Rgb(44, 44, 54);
    pub const BG_BORDER: Color = Color::Rgb(82, 82, 100);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(235, 232, 224);
    pub const TEXT_MUTED: Color = Color::Rgb(128, 126, 120);

    // === Island ===
    // The island is a black pill on the web; on the dark base it reads as a
    // slightly raised slate.
    pub const ISLAND_BG: Color = Color::Rgb(8, 8, 10);
    pub const ISLAND_BORDER: Color = Color::Rgb(64, 64, 72);

    // === Semantic ===
    pub const ACCENT: Color = Color::Rgb(165, 161, 243); // scheme 3 darker
    pub const SUCCESS: Color = Color::Rgb(127, 219, 182); // scheme 4 darker
    pub const WARNING: Color = Color::Rgb(248, 181, 119); // scheme 2 darker
    pub const ERROR: Color = Color::Rgb(239, 152, 161); // scheme 1 darker
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_popup: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub island_bg: Color,
    pub island_border: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

/// Resolve the palette for the given UI options.
#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        return Palette {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_popup: Color::Black,
            bg_border: Color::White,
            text_primary: Color::White,
            text_muted: Color::Gray,
            island_bg: Color::Black,
            island_border: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        };
    }

    Palette {
        bg_dark: colors::BG_DARK,
        bg_panel: colors::BG_PANEL,
        bg_popup: colors::BG_POPUP,
        bg_border: colors::BG_BORDER,
        text_primary: colors::TEXT_PRIMARY,
        text_muted: colors::TEXT_MUTED,
        island_bg: colors::ISLAND_BG,
        island_border: colors::ISLAND_BORDER,
        accent: colors::ACCENT,
        success: colors::SUCCESS,
        warning: colors::WARNING,
        error: colors::ERROR,
    }
}

/// Icon set, with an ASCII fallback.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub play: &'static str,
    pub check: &'static str,
    pub back: &'static str,
    pub menu: &'static str,
    pub brand: &'static str,
    pub party: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            play: ">",
            check: "x",
            back: "<",
            menu: "=",
            brand: "#",
            party: "*",
        }
    } else {
        Glyphs {
            play: "▶",
            check: "✓",
            back: "‹",
            menu: "☰",
            brand: "▣",
            party: "🎉",
        }
    }
}

/// Parse a `#RRGGBB` hex string, falling back to the given color.
#[must_use]
pub fn hex_color(hex: &str, fallback: Color) -> Color {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return fallback;
    }
    let parse = |range: Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (parse(0..2), parse(2..4), parse(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => fallback,
    }
}

pub mod styles {
    use super::{Color, Modifier, Palette, Style};

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    /// Lesson card text over the card's own (light) background.
    #[must_use]
    pub fn card_text() -> Style {
        Style::default().fg(Color::Rgb(24, 24, 28))
    }
}
