use ggez::graphics::Color;

/// Number of tiles along each side of the board.
pub const BOARD_SIZE: usize = 8;
/// Side length of the square tiles in pixels.
pub const TILE_PX: f32 = 50.;
/// Gap between a tile's edge and the piece drawn on it.
pub const PIECE_INSET_PX: f32 = 10.;
/// Radius of a drawn piece.
pub const PIECE_RADIUS: f32 = TILE_PX / 2. - PIECE_INSET_PX;

pub const WINDOW_WIDTH: f32 = 415.;
pub const WINDOW_HEIGHT: f32 = 440.;

/// Tiles where `row + col` is even.
pub const LIGHT_TILE: Color = Color::WHITE;
/// Tiles where `row + col` is odd. Every piece stands on one of these.
pub const DARK_TILE: Color = Color::BLACK;
pub const PLAYER_ONE_PIECE: Color = Color::RED;
pub const PLAYER_TWO_PIECE: Color = Color::GREEN;
/// Fills the window around the board.
pub const BACKGROUND: Color = Color {
    r: 238. / 255.,
    g: 238. / 255.,
    b: 238. / 255.,
    a: 1.,
};
