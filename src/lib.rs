//! A two-player checkers board played with the mouse.
//!
//! Click one of your pieces to pick it up, then click where it should go.
//! Pieces move one tile diagonally forward, or two when hopping an opposing
//! piece. Any other second click puts the piece back down.
//!
//! The game logic in [`board`], [`rules`] and [`logic`] is independent of the
//! window. [`render`] describes a frame as plain shapes and [`game`] draws them
//! with ggez.

pub mod board;
pub mod constants;
pub mod game;
pub mod logic;
pub mod render;
pub mod rules;

pub use board::{Board, Cell, Player, Tile};
pub use logic::{Selection, Session, StateChange};
pub use rules::{Move, MoveKind, classify_move, is_valid_move};
