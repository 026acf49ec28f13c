//! Board storage and accessors.
//!
//! A `Board` is a flat row of seed counts, store first. It carries no
//! history and no derived state; rules live in `board::rules` and read or
//! rewrite the pit counts directly.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Inline capacity for the pit array. A standard Tchoukaillon row is the
/// store plus six houses, so typical boards never heap-allocate.
const INLINE_PITS: usize = 8;

/// A Tchoukaillon board: the store at index 0 plus `N` houses at `1..=N`.
///
/// Houses are numbered ascending outward from the store, and house `i` is
/// playable exactly when it holds `i` seeds. The store only accumulates and
/// is never a move source.
///
/// ```
/// use tchoukaillon::Board;
///
/// let board = Board::from_configuration(&[0, 0, 1, 1, 3, 5, 0]);
/// assert_eq!(board.house_count(), 6);
/// assert_eq!(board.seeds_in_house(5), 5);
/// assert!(board.is_legal_move(5));
/// assert!(!board.is_legal_move(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Seed counts, store first. Always holds at least the store.
    pub(crate) pits: SmallVec<[u32; INLINE_PITS]>,
}

impl Board {
    /// Create a board with an empty store and no houses.
    #[must_use]
    pub fn new() -> Self {
        Self { pits: smallvec![0] }
    }

    /// Create a board directly from a configuration, store first.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty; every board has at least the store.
    #[must_use]
    pub fn from_configuration(values: &[u32]) -> Self {
        let mut board = Self::new();
        board.set_configuration(values);
        board
    }

    /// Replace the whole board with a copy of `values`, store first.
    ///
    /// `values[i]` becomes the seed count of pit `i`, so `values[0]` is the
    /// store and the rest are houses in ascending order. No other
    /// well-formedness checks are performed.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty; every board has at least the store.
    pub fn set_configuration(&mut self, values: &[u32]) {
        assert!(!values.is_empty(), "Configuration must include the store");
        self.pits = SmallVec::from_slice(values);
    }

    /// Number of houses on the board. The store does not count.
    #[must_use]
    pub fn house_count(&self) -> usize {
        self.pits.len() - 1
    }

    /// Seed count of a single pit. Index 0 is the store.
    ///
    /// # Panics
    ///
    /// Panics if `house` is not a valid pit index. An out-of-range index is
    /// a caller bug and is never clamped.
    #[must_use]
    pub fn seeds_in_house(&self, house: usize) -> u32 {
        self.pits[house]
    }

    /// Seeds banked in the store.
    #[must_use]
    pub fn store(&self) -> u32 {
        self.pits[0]
    }

    /// All pit counts in internal order, store first.
    ///
    /// This is the read-only view consumers render from; mutation goes
    /// through [`Board::set_configuration`] and [`Board::apply_move`].
    #[must_use]
    pub fn pits(&self) -> &[u32] {
        &self.pits
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the pits from the outermost house down to the store, the reverse
/// of internal index order, matching how a Tchoukaillon row is laid out for
/// presentation.
///
/// ```
/// use tchoukaillon::Board;
///
/// let board = Board::from_configuration(&[0, 0, 1, 1, 3, 5, 0]);
/// assert_eq!(board.to_string(), "[0, 5, 3, 1, 1, 0, 0]");
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut display: SmallVec<[u32; INLINE_PITS]> = self.pits.clone();
        display.reverse();
        write!(f, "{:?}", display.as_slice())
    }
}
