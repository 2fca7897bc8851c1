use proptest::prelude::*;

use ballot_registry::tally::{resolve_area, AreaResult};
use ballot_registry::{Candidate, Registry, RegistryConfig};
use ballot_types::{AccountId, Area, NationalId};

fn roll_from_counts(counts: &[u64]) -> Vec<Candidate> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &votes)| {
            let mut c = Candidate::new(
                format!("candidate-{i}"),
                NationalId::from(format!("nid-{i}")),
                Area::from("Area1"),
            );
            c.vote_count = votes;
            c
        })
        .collect()
}

proptest! {
    /// The reported count is always the maximum count in the roll.
    #[test]
    fn reported_votes_equal_the_maximum(counts in prop::collection::vec(0u64..100, 2..8)) {
        let roll = roll_from_counts(&counts);
        let max = counts.iter().copied().max().unwrap();

        match resolve_area(&roll).unwrap() {
            AreaResult::Winner { votes, .. } => prop_assert_eq!(votes, max),
            AreaResult::Tie { votes, .. } => prop_assert_eq!(votes, max),
        }
    }

    /// A tie set contains exactly the candidates holding the maximum, in
    /// index order; a winner is the unique maximum holder.
    #[test]
    fn result_names_are_exactly_the_maximum_holders(counts in prop::collection::vec(0u64..10, 2..8)) {
        let roll = roll_from_counts(&counts);
        let max = counts.iter().copied().max().unwrap();
        let expected: Vec<String> = counts
            .iter()
            .enumerate()
            .filter(|(_, &votes)| votes == max)
            .map(|(i, _)| format!("candidate-{i}"))
            .collect();

        match resolve_area(&roll).unwrap() {
            AreaResult::Winner { name, .. } => {
                prop_assert_eq!(expected, vec![name]);
            }
            AreaResult::Tie { names, .. } => {
                prop_assert!(names.len() > 1);
                prop_assert_eq!(expected, names);
            }
        }
    }

    /// An uncontested race always has a winner, whatever the count.
    #[test]
    fn single_candidate_always_wins(votes in 0u64..1000) {
        let roll = roll_from_counts(&[votes]);
        prop_assert_eq!(
            resolve_area(&roll).unwrap(),
            AreaResult::Winner {
                name: "candidate-0".to_string(),
                votes,
            }
        );
    }

    /// Driving the full API: every accepted ballot lands on exactly one
    /// candidate, so accepted ballots and counted votes always agree.
    #[test]
    fn accepted_ballots_equal_counted_votes(
        choices in prop::collection::vec(0usize..3, 1..20),
    ) {
        let admin = AccountId::from("acct_admin");
        let mut r = Registry::new(RegistryConfig::new("acct_admin"));

        for i in 0..3 {
            r.register_candidate(
                &admin,
                format!("candidate-{i}"),
                NationalId::from(format!("nid-{i}")),
                Area::from("Area1"),
            ).unwrap();
        }
        for (i, _) in choices.iter().enumerate() {
            r.register_voter(
                &admin,
                AccountId::from(format!("acct_{i}")),
                NationalId::from(format!("voter-{i}")),
                Area::from("Area1"),
            ).unwrap();
        }

        r.start_voting(&admin).unwrap();
        for (i, &choice) in choices.iter().enumerate() {
            r.cast_vote(
                &AccountId::from(format!("acct_{i}")),
                &NationalId::from(format!("voter-{i}")),
                choice,
            ).unwrap();
        }
        r.end_voting(&admin).unwrap();

        let roll = r.candidates_by_area(&Area::from("Area1"));
        let counted: u64 = roll.iter().map(|c| c.vote_count).sum();
        prop_assert_eq!(counted, choices.len() as u64);
        for (i, candidate) in roll.iter().enumerate() {
            let expected = choices.iter().filter(|&&c| c == i).count() as u64;
            prop_assert_eq!(candidate.vote_count, expected);
        }
    }
}
