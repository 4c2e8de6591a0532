//! Requirement matching.
//!
//! A storm card's requirement is a multiset: `[MAINTENANCE, MAINTENANCE]`
//! needs two distinct Maintenance cards, not one. Matching sorts both
//! sides and removes one played card per required category.

use smallvec::SmallVec;

use crate::cards::{Category, Requirement};

/// Does the played category multiset cover the requirement?
///
/// ```
/// use lighthouse_keeper::cards::{Category::*, Requirement};
/// use lighthouse_keeper::rules::requirement_met;
///
/// let twice = Requirement::new(&[Maintenance, Maintenance]);
/// assert!(!requirement_met(&[Maintenance], &twice));
/// assert!(requirement_met(&[Focus, Maintenance, Maintenance], &twice));
/// ```
#[must_use]
pub fn requirement_met(played: &[Category], requirement: &Requirement) -> bool {
    if played.len() < requirement.len() {
        return false;
    }
    unmet(played, requirement).is_empty()
}

/// Required categories left unmatched by the played cards, sorted.
#[must_use]
pub fn unmet(played: &[Category], requirement: &Requirement) -> SmallVec<[Category; 4]> {
    let mut remaining: SmallVec<[Category; 8]> = SmallVec::from_slice(played);
    remaining.sort_unstable();

    let mut missing = SmallVec::new();
    for required in requirement.sorted() {
        match remaining.iter().position(|&c| c == required) {
            Some(index) => {
                remaining.remove(index);
            }
            None => missing.push(required),
        }
    }
    missing
}
