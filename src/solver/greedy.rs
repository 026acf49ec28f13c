//! Greedy planning loop and the resulting [`Plan`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::Board;

/// The outcome of a planning run: the moves in sowing order, plus whether
/// replaying them ends in a won board.
///
/// An empty move list covers two very different situations, a board that is
/// already won and a board with no legal opening, so the winning flag is
/// part of the plan rather than left for the caller to reconstruct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    moves: Vec<usize>,
    winning: bool,
}

impl Plan {
    /// The planned house indices, in sowing order.
    #[must_use]
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Does replaying the moves end in a won board?
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.winning
    }

    /// Number of planned moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when no moves were planned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Compute the full greedy line from `board`.
///
/// Repeatedly sows the lowest-indexed playable house until the board is won
/// or no house is playable. Runs on a scratch copy: the caller's board is
/// never mutated and no intermediate state is observable.
///
/// When the returned plan is not winning, the greedy line got stuck; by
/// greedy completeness no other line wins from that start either.
///
/// Termination: every sown move banks exactly one seed in the store, and
/// seeds are finite.
#[must_use]
pub fn plan_moves(board: &Board) -> Plan {
    let mut scratch = board.clone();
    let mut moves = Vec::new();

    while !scratch.is_game_won() {
        let house = match scratch.choose_move() {
            Some(house) => house,
            None => break,
        };

        scratch.apply_move(house);
        moves.push(house);
    }

    let winning = scratch.is_game_won();
    debug!(
        "planned {} moves over {} houses (winning: {})",
        moves.len(),
        board.house_count(),
        winning
    );

    Plan { moves, winning }
}

/// Check whether the greedy line from `board` wins.
#[must_use]
pub fn is_solvable(board: &Board) -> bool {
    plan_moves(board).is_winning()
}
