//! The 8×8 grid of cells and the coordinates used to address it.

use std::fmt;

use crate::constants::BOARD_SIZE;

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Starts on the bottom three rows and moves first.
    One,
    /// Starts on the top three rows.
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The row direction this player's pieces move in.
    pub fn forward(self) -> i8 {
        match self {
            Player::One => -1,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player one"),
            Player::Two => write!(f, "player two"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Player),
}

impl Cell {
    /// The owner of the piece in this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Piece(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A position on the board.
///
/// Both coordinates are within `0..8`; [`Tile::new`] is the only way to build
/// one from outside the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    row: u8,
    col: u8,
}

impl Tile {
    /// The tile at `(row, col)`, or `None` if it lies off the board.
    pub fn new(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    /// The tile offset from this one by `(d_row, d_col)`, if still on the board.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::new(i32::from(self.row) + d_row, i32::from(self.col) + d_col)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The opening position.
    ///
    /// Each side fills the dark tiles of the three rows nearest to it, leaving
    /// rows 3 and 4 empty.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for tile in Self::tiles() {
            if (tile.row() + tile.col()) % 2 == 0 {
                continue;
            }
            match tile.row() {
                0..=2 => board.set(tile, Cell::Piece(Player::Two)),
                5..=7 => board.set(tile, Cell::Piece(Player::One)),
                _ => {}
            }
        }
        board
    }

    pub fn get(&self, tile: Tile) -> Cell {
        self.cells[tile.row()][tile.col()]
    }

    /// Overwrite a cell. No rules are checked here.
    pub fn set(&mut self, tile: Tile, cell: Cell) {
        self.cells[tile.row()][tile.col()] = cell;
    }

    /// Every tile, in row-major order.
    pub fn tiles() -> impl Iterator<Item = Tile> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Tile { row, col }))
    }

    /// Number of pieces `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        Self::tiles()
            .filter(|&tile| self.get(tile) == Cell::Piece(player))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::Piece(Player::One) => '1',
                    Cell::Piece(Player::Two) => '2',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
