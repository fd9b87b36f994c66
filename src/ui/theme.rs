//! Theme constants for the peg gomoku GUI

use egui::Color32;

use crate::board::PlayerId;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);

// Peg colors, one per seat
pub const PLAYER_COLORS: [Color32; 4] = [
    Color32::from_rgb(214, 60, 60),  // Red
    Color32::from_rgb(60, 110, 214), // Blue
    Color32::from_rgb(70, 170, 90),  // Green
    Color32::from_rgb(230, 180, 40), // Gold
];
pub const PEG_RIM: Color32 = Color32::from_rgb(30, 25, 20);

/// Peg color for a player
pub fn player_color(player: PlayerId) -> Color32 {
    PLAYER_COLORS[player.index() % PLAYER_COLORS.len()]
}

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const SEQUENCE_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const PEG_RADIUS_RATIO: f32 = 0.38;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 3.0;
pub const MENU_BUTTON_SIZE: [f32; 2] = [220.0, 44.0];
