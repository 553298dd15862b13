//! Turn order and the click-to-select, click-to-move gesture.

use log::{debug, info, trace};

use crate::{
    board::{Board, Player, Tile},
    constants::TILE_PX,
    rules::{self, Move, MoveKind},
};

/// The piece, if any, the current player has picked up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    /// Always a tile holding one of the current player's pieces.
    Selected(Tile),
}

/// What a click changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateChange {
    Selected(Tile),
    Deselected,
    PieceMoved(Move),
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    current: Player,
    selection: Selection,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Board::starting())
    }
}

impl Session {
    /// A session on `board`, with player one to move.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            current: Player::One,
            selection: Selection::None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The tile under the pixel coordinates `(x, y)`, if any.
    pub fn tile_at(x: f32, y: f32) -> Option<Tile> {
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        // floor, not truncation, so that slightly negative clicks stay off the board
        Tile::new((y / TILE_PX).floor() as i32, (x / TILE_PX).floor() as i32)
    }

    /// Handle a click at pixel coordinates `(x, y)`.
    ///
    /// Returns `None` if the click was ignored.
    pub fn handle_click(&mut self, x: f32, y: f32) -> Option<Vec<StateChange>> {
        match Self::tile_at(x, y) {
            Some(tile) => self.handle_cell(tile),
            None => {
                trace!("ignoring click off the board at ({x}, {y})");
                None
            }
        }
    }

    /// Handle a click on `tile`.
    ///
    /// Returns `None` if the click was ignored.
    pub fn handle_cell(&mut self, tile: Tile) -> Option<Vec<StateChange>> {
        match self.selection {
            Selection::Selected(src) => {
                let mut state_changes = vec![StateChange::Deselected];
                self.selection = Selection::None;

                match rules::classify_move(&self.board, src, tile.row() as i32, tile.col() as i32)
                {
                    Some(mv) => {
                        rules::apply_move(&mut self.board, mv);
                        match mv.kind {
                            MoveKind::Step => info!("{} stepped {} -> {}", self.current, src, tile),
                            MoveKind::Jump { over } => {
                                info!("{} jumped {} -> {} over {}", self.current, src, tile, over)
                            }
                        }
                        debug!("board is now\n{}", self.board);
                        self.current = self.current.opponent();
                        state_changes.push(StateChange::PieceMoved(mv));
                    }
                    None => debug!("{} cannot move {} -> {}, deselecting", self.current, src, tile),
                }

                Some(state_changes)
            }
            Selection::None => {
                if self.board.get(tile).owner() == Some(self.current) {
                    debug!("{} selected {}", self.current, tile);
                    self.selection = Selection::Selected(tile);
                    Some(vec![StateChange::Selected(tile)])
                } else {
                    trace!("ignoring click on {tile}, not a piece of {}", self.current);
                    None
                }
            }
        }
    }
}
