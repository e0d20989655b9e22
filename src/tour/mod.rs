//! Tour construction and move operators.
//!
//! A tour is a `Vec<usize>` permutation of `[0, n)`, implicitly closed
//! (the last index connects back to the first). Every function here
//! takes tours by slice and returns a fresh `Vec`; nothing mutates its
//! input, so "current" and "candidate" tours never share storage.
//!
//! # Constructors
//!
//! - [`random_tour`]: uniform random permutation, O(n)
//! - [`greedy_tour`]: nearest-neighbor from index 0, O(n²)
//!
//! # Move Operators
//!
//! - [`exchange`]: swap two positions, O(n) (copy)
//! - [`reinsertion`]: remove and reinsert one element, O(n)
//! - [`two_opt`]: reverse a contiguous segment, O(n)
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems",
//!   *Operations Research* 6(6), 791-812 (2-opt)
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//!   Heuristics for the Traveling Salesman Problem" (nearest neighbor)

mod construct;
mod moves;

pub use construct::{greedy_tour, is_valid_permutation, random_tour, validate_tour};
pub use moves::{exchange, reinsertion, two_opt, Move, MoveKind};
