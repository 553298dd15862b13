//! The board as a list of shapes to draw.
//!
//! Nothing here needs a graphics context, so the [`game`][`crate::game`]
//! module owns turning shapes into meshes.

use ggez::{
    glam::Vec2,
    graphics::{Color, Rect},
};

use crate::{
    board::{Board, Cell, Player, Tile},
    constants::{
        DARK_TILE, LIGHT_TILE, PIECE_RADIUS, PLAYER_ONE_PIECE, PLAYER_TWO_PIECE, TILE_PX,
    },
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// A filled square.
    Square { rect: Rect, color: Color },
    /// A filled circle.
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// The on-screen square covered by `tile`.
pub fn tile_rect(tile: Tile) -> Rect {
    Rect::new(
        tile.col() as f32 * TILE_PX,
        tile.row() as f32 * TILE_PX,
        TILE_PX,
        TILE_PX,
    )
}

/// The colored tiles of the board.
///
/// Constant, so callers should only need it once.
pub fn tiles() -> Vec<Shape> {
    Board::tiles()
        .map(|tile| Shape::Square {
            rect: tile_rect(tile),
            color: if (tile.row() + tile.col()) % 2 == 0 {
                LIGHT_TILE
            } else {
                DARK_TILE
            },
        })
        .collect()
}

/// One circle per piece on `board`.
pub fn pieces(board: &Board) -> Vec<Shape> {
    Board::tiles()
        .filter_map(|tile| {
            let color = match board.get(tile) {
                Cell::Empty => return None,
                Cell::Piece(Player::One) => PLAYER_ONE_PIECE,
                Cell::Piece(Player::Two) => PLAYER_TWO_PIECE,
            };
            let rect = tile_rect(tile);
            Some(Shape::Circle {
                center: Vec2::new(rect.x + rect.w / 2., rect.y + rect.h / 2.),
                radius: PIECE_RADIUS,
                color,
            })
        })
        .collect()
}
