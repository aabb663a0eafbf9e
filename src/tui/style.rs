//! Color constants for the TUI.

use ratatui::style::Color;

use crate::balance::{Efficiency, GasQuality};

/// Chemical energy slice and efficiency card.
pub const CHEM_COLOR: Color = Color::Green;
/// Sensible heat slice.
pub const SENS_COLOR: Color = Color::Rgb(234, 88, 12);
/// Loss slice and loss card.
pub const LOSS_COLOR: Color = Color::Red;
/// Fuel input row and LHV card.
pub const INPUT_COLOR: Color = Color::Blue;
/// Selected form row background.
pub const SELECTED_BG: Color = Color::DarkGray;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Edited (differs from loaded case) marker.
pub const EDITED_FG: Color = Color::Yellow;

const GOOD: Color = Color::Green;
const LOW: Color = Color::Yellow;

pub fn gas_quality_color(q: GasQuality) -> Color {
    match q {
        GasQuality::Good => GOOD,
        GasQuality::Low => LOW,
    }
}

pub fn efficiency_color(e: Efficiency) -> Color {
    match e {
        Efficiency::Good => GOOD,
        Efficiency::Low => LOW,
    }
}
