//! Candidate pair enumeration
//!
//! The narrow phase in `collision` only ever sees the index pairs produced
//! here, so a grid or sweep-and-prune can replace the all-pairs scan without
//! touching the response math.

use serde::{Deserialize, Serialize};

use super::body::Body;

/// Produces the index pairs the narrow phase should test
pub trait BroadPhase {
    /// Append candidate `(i, j)` pairs (`i != j`) to `out`, in resolution order
    fn candidate_pairs(&self, bodies: &[Body], out: &mut Vec<(usize, usize)>);
}

/// Every ordered pair `(i, j)` with `i != j`, row-major
///
/// Each unordered pair shows up twice, once as `(a, b)` and once as `(b, a)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedPairs;

impl BroadPhase for OrderedPairs {
    fn candidate_pairs(&self, bodies: &[Body], out: &mut Vec<(usize, usize)>) {
        let n = bodies.len();
        out.reserve(n.saturating_mul(n.saturating_sub(1)));
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    out.push((i, j));
                }
            }
        }
    }
}

/// Every unordered pair once, as `(i, j)` with `i < j`
#[derive(Debug, Clone, Copy, Default)]
pub struct UniquePairs;

impl BroadPhase for UniquePairs {
    fn candidate_pairs(&self, bodies: &[Body], out: &mut Vec<(usize, usize)>) {
        let n = bodies.len();
        out.reserve(n.saturating_mul(n.saturating_sub(1)) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                out.push((i, j));
            }
        }
    }
}

/// How the frame pipeline enumerates pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairMode {
    /// Both orderings of each pair, resolved back to back
    #[default]
    Ordered,
    /// Each pair resolved once per frame
    Unique,
}

impl PairMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairMode::Ordered => "ordered",
            PairMode::Unique => "unique",
        }
    }

    pub fn broad_phase(&self) -> &'static dyn BroadPhase {
        match self {
            PairMode::Ordered => &OrderedPairs,
            PairMode::Unique => &UniquePairs,
        }
    }
}

/// Borrow two distinct elements of a slice mutably
///
/// Returns `None` when `i == j` or either index is out of bounds.
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> Option<(&mut T, &mut T)> {
    if i == j || i >= items.len() || j >= items.len() {
        return None;
    }
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        Some((&mut head[i], &mut tail[0]))
    } else {
        let (head, tail) = items.split_at_mut(i);
        Some((&mut tail[0], &mut head[j]))
    }
}
