use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Playfield dimensions. The board is a fixed square.
pub const GRID_SIZE: u16 = 20;

/// Default board used by the binary.
pub const BOARD: GridSize = GridSize {
    width: GRID_SIZE,
    height: GRID_SIZE,
};

/// Fixed simulation tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 150;

/// Points granted per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_high_score: Color,
    pub menu_title: Color,
    pub menu_game_over: Color,
    pub menu_footer: Color,
}

/// Green-on-black retro theme: bright head, darker body, red food.
pub const THEME_RETRO: Theme = Theme {
    name: "Retro",
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_score: Color::Green,
    hud_high_score: Color::Yellow,
    menu_title: Color::White,
    menu_game_over: Color::Red,
    menu_footer: Color::DarkGray,
};

/// Glyphs for board entities, one terminal cell per grid cell.
pub const GLYPH_SNAKE_HEAD: &str = "█";
pub const GLYPH_SNAKE_BODY: &str = "▓";
pub const GLYPH_FOOD: &str = "●";
