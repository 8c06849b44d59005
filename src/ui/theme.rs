//! Colors and glyphs
//!
//! Every dynamic style decision is an exhaustive match on a data enum.

use ratatui::style::Color;

use crate::data::{Icon, Status, Trend};
use crate::modules::integrations::ActionTaken;

pub const POSITIVE: Color = Color::Rgb(72, 187, 120);
pub const NEGATIVE: Color = Color::Rgb(245, 101, 101);
pub const ACCENT: Color = Color::Rgb(0, 67, 206);
pub const MUTED: Color = Color::DarkGray;
pub const SIDEBAR_BG: Color = Color::Rgb(42, 67, 101);
pub const SIDEBAR_ACTIVE_BG: Color = Color::Rgb(44, 82, 130);
pub const TILE_BG: Color = Color::Rgb(227, 248, 255);

pub const SERIES: [Color; 4] = [
    Color::Rgb(136, 132, 216),
    Color::Rgb(130, 202, 157),
    Color::Rgb(255, 198, 88),
    Color::Rgb(255, 128, 66),
];

pub fn status_color(status: Status) -> Color {
    match status {
        Status::Normal => Color::Rgb(16, 185, 129),
        Status::Warning => Color::Rgb(245, 158, 11),
        Status::Issue => Color::Rgb(239, 68, 68),
    }
}

pub fn trend_glyph(trend: Trend) -> (&'static str, Color) {
    match trend {
        Trend::Up => ("▲", Color::Rgb(16, 185, 129)),
        Trend::Down => ("▼", Color::Rgb(239, 68, 68)),
    }
}

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Database => "▤",
        Icon::Warehouse => "⌂",
        Icon::Truck => "⇶",
        Icon::ShoppingCart => "⊕",
        Icon::Users => "♟",
        Icon::Cloud => "≈",
    }
}

pub fn change_color(change: f64) -> Color {
    if change >= 0.0 {
        POSITIVE
    } else {
        NEGATIVE
    }
}

pub fn action_color(action: ActionTaken) -> Color {
    match action {
        ActionTaken::None => MUTED,
        ActionTaken::Approve | ActionTaken::Review => ACCENT,
    }
}
