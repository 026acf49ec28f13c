//! The greedy winning-line planner.
//!
//! Tchoukaillon has the property that always sowing the lowest-indexed
//! playable house either wins or gets stuck, and it wins whenever any line
//! of play wins. The planner therefore just replays that rule to completion
//! and reports what happened; no backtracking, no look-ahead, no other
//! heuristics.

pub mod greedy;

pub use greedy::{is_solvable, plan_moves, Plan};
