//! Per-area winner resolution.

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;

/// The outcome of tallying one area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaResult {
    /// A single leading candidate.
    Winner { name: String, votes: u64 },
    /// Several candidates share the highest count. A tie is a result, not
    /// an error; how to present it is the caller's concern.
    Tie { names: Vec<String>, votes: u64 },
}

/// Resolve the winner of an area from its candidate roll.
///
/// An uncontested race (exactly one candidate) has a winner regardless of
/// vote count, zero included. Contested races are scanned in index order,
/// tracking the highest count seen: a strictly higher count takes the
/// lead outright, an equal count joins the tied set.
///
/// Returns `None` for an empty roll. The function is pure — callers that
/// fetched an area roll themselves can resolve it without a registry.
pub fn resolve_area(candidates: &[Candidate]) -> Option<AreaResult> {
    let [first, rest @ ..] = candidates else {
        return None;
    };

    if rest.is_empty() {
        return Some(AreaResult::Winner {
            name: first.name.clone(),
            votes: first.vote_count,
        });
    }

    let mut top = 0u64;
    let mut leaders: Vec<&str> = Vec::new();
    for candidate in candidates {
        if candidate.vote_count > top {
            top = candidate.vote_count;
            leaders.clear();
            leaders.push(&candidate.name);
        } else if candidate.vote_count == top {
            leaders.push(&candidate.name);
        }
    }

    match leaders.as_slice() {
        [name] => Some(AreaResult::Winner {
            name: (*name).to_string(),
            votes: top,
        }),
        names => Some(AreaResult::Tie {
            names: names.iter().map(|n| (*n).to_string()).collect(),
            votes: top,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballot_types::{Area, NationalId};

    fn candidate(name: &str, votes: u64) -> Candidate {
        let mut c = Candidate::new(
            name,
            NationalId::from(format!("id-{name}")),
            Area::from("Area1"),
        );
        c.vote_count = votes;
        c
    }

    #[test]
    fn empty_roll_has_no_result() {
        assert_eq!(resolve_area(&[]), None);
    }

    #[test]
    fn single_candidate_wins_by_default_with_zero_votes() {
        let roll = [candidate("Solo", 0)];
        assert_eq!(
            resolve_area(&roll),
            Some(AreaResult::Winner {
                name: "Solo".to_string(),
                votes: 0,
            })
        );
    }

    #[test]
    fn clear_leader_wins() {
        let roll = [candidate("Alice", 3), candidate("Bob", 1)];
        assert_eq!(
            resolve_area(&roll),
            Some(AreaResult::Winner {
                name: "Alice".to_string(),
                votes: 3,
            })
        );
    }

    #[test]
    fn later_leader_resets_the_tied_set() {
        let roll = [
            candidate("Alice", 1),
            candidate("Bob", 1),
            candidate("Carol", 2),
        ];
        assert_eq!(
            resolve_area(&roll),
            Some(AreaResult::Winner {
                name: "Carol".to_string(),
                votes: 2,
            })
        );
    }

    #[test]
    fn equal_counts_tie() {
        let roll = [candidate("Alice", 1), candidate("Bob", 1)];
        assert_eq!(
            resolve_area(&roll),
            Some(AreaResult::Tie {
                names: vec!["Alice".to_string(), "Bob".to_string()],
                votes: 1,
            })
        );
    }

    #[test]
    fn contested_race_with_no_votes_ties_everyone() {
        let roll = [
            candidate("Alice", 0),
            candidate("Bob", 0),
            candidate("Carol", 0),
        ];
        assert_eq!(
            resolve_area(&roll),
            Some(AreaResult::Tie {
                names: vec![
                    "Alice".to_string(),
                    "Bob".to_string(),
                    "Carol".to_string(),
                ],
                votes: 0,
            })
        );
    }

    #[test]
    fn partial_tie_excludes_trailing_candidates() {
        let roll = [
            candidate("Alice", 2),
            candidate("Bob", 1),
            candidate("Carol", 2),
        ];
        assert_eq!(
            resolve_area(&roll),
            Some(AreaResult::Tie {
                names: vec!["Alice".to_string(), "Carol".to_string()],
                votes: 2,
            })
        );
    }
}
