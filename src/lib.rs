//! # tchoukaillon
//!
//! An engine for the solitaire version of Mancala known as Tchoukaillon.
//!
//! The player repeatedly sows seeds from a house into the pits below it and
//! into the store, trying to empty every house. A house is playable exactly
//! when its seed count equals its own index, which makes the puzzle fully
//! deterministic once a selection rule is fixed.
//!
//! ## Design Principles
//!
//! 1. **One owner, no sharing**: a [`Board`] is plain value-semantics state,
//!    mutated in place by exactly one game session at a time. No locking, no
//!    interior mutability.
//!
//! 2. **Rules are total, planning is pure**: rule queries never fail for
//!    in-range houses, and [`plan_moves`] never touches the caller's board.
//!
//! 3. **Greedy is enough**: always sowing the lowest playable house reaches a
//!    win whenever a win exists, so the planner needs no backtracking or
//!    look-ahead.
//!
//! ## Modules
//!
//! - `board`: board state, move rules, parsing, display
//! - `solver`: the greedy winning-line planner
//! - `generator`: deterministic generation of winnable boards
//!
//! ## Usage
//!
//! ```
//! use tchoukaillon::{plan_moves, Board};
//!
//! let mut board = Board::new();
//! board.set_configuration(&[0, 0, 1, 1, 3, 5, 0]);
//!
//! let plan = plan_moves(&board);
//! assert!(plan.is_winning());
//! assert_eq!(plan.moves(), &[5, 1, 2, 1, 4, 1, 3, 1, 2, 1]);
//!
//! // Planning is a pure query: the board is untouched.
//! assert_eq!(board.seeds_in_house(5), 5);
//! ```

pub mod board;
pub mod generator;
pub mod solver;

// Re-export commonly used types
pub use crate::board::{Board, ParseBoardError};
pub use crate::generator::BoardGenerator;
pub use crate::solver::{is_solvable, plan_moves, Plan};
