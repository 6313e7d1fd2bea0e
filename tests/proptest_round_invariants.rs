//! Property-based invariant tests for the round state machine.
//!
//! For any eligible secret and any sequence of raw inputs:
//!
//! 1. Wrong letters are always a subset of guessed letters.
//! 2. Attempts never increase and never drop below 0.
//! 3. Wrong letters + wrong words = MAX_ATTEMPTS - attempts left.
//! 4. Every revealed slot matches the secret.
//! 5. Won iff nothing is hidden; lost iff out of attempts and not won.
//! 6. Rejected input leaves the round untouched.
//! 7. Initialization reveals exactly the hinted letters.

use hangman::wordbank::{is_eligible, load_wordbank_from_str};
use hangman::{MAX_ATTEMPTS, PLACEHOLDER, Round, RoundStatus};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn secret_word() -> impl Strategy<Value = String> {
    "[a-h]{4,9}".prop_filter("needs two distinct letters", |w| is_eligible(w))
}

fn raw_inputs() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            4 => "[a-j]",
            1 => "[a-h]{4,9}",
            1 => "[a-z0-9 ]{0,3}",
        ],
        0..40,
    )
}

fn check_invariants(round: &Round, secret: &str) -> Result<(), TestCaseError> {
    prop_assert!(round.wrong_letters().is_subset(round.guessed_letters()));
    prop_assert!(round.attempts_left() <= MAX_ATTEMPTS);
    prop_assert_eq!(
        round.wrong_guesses(),
        usize::from(MAX_ATTEMPTS - round.attempts_left())
    );
    for (shown, actual) in round.display_word().iter().zip(secret.chars()) {
        prop_assert!(*shown == PLACEHOLDER || *shown == actual);
    }
    let hidden = round.display_word().contains(&PLACEHOLDER);
    match round.status() {
        RoundStatus::Won => prop_assert!(!hidden),
        RoundStatus::Lost => prop_assert!(hidden && round.attempts_left() == 0),
        RoundStatus::AwaitingGuess => prop_assert!(hidden && round.attempts_left() > 0),
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1-5. Invariants hold after every guess
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn invariants_hold_for_any_guess_sequence(
        secret in secret_word(),
        inputs in raw_inputs(),
    ) {
        let mut round = Round::with_hints(&secret, &[]);
        check_invariants(&round, &secret)?;
        let mut previous_attempts = round.attempts_left();

        for raw in &inputs {
            let _ = round.submit_guess(raw);
            check_invariants(&round, &secret)?;
            prop_assert!(round.attempts_left() <= previous_attempts);
            previous_attempts = round.attempts_left();
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Rejected input does not mutate
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rejected_guesses_do_not_mutate(
        secret in secret_word(),
        inputs in raw_inputs(),
    ) {
        let mut round = Round::with_hints(&secret, &[]);
        for raw in &inputs {
            let before = round.clone();
            if round.submit_guess(raw).is_err() {
                prop_assert_eq!(round.attempts_left(), before.attempts_left());
                prop_assert_eq!(round.display_word(), before.display_word());
                prop_assert_eq!(round.guessed_letters(), before.guessed_letters());
                prop_assert_eq!(round.wrong_letters(), before.wrong_letters());
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Initialization
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn initialization_reveals_only_hinted_letters(
        secret in secret_word(),
        seed in any::<u64>(),
    ) {
        let words = vec![secret.clone()];
        let round = Round::initialize(&words, &mut StdRng::seed_from_u64(seed)).unwrap();

        let distinct = secret.chars().collect::<std::collections::BTreeSet<_>>().len();
        let expected_hints = if distinct >= 3 { 2 } else { 1 };
        prop_assert_eq!(round.guessed_letters().len(), expected_hints);

        let hinted_occurrences = secret
            .chars()
            .filter(|c| round.guessed_letters().contains(c))
            .count();
        prop_assert_eq!(round.revealed_count(), hinted_occurrences);
        prop_assert_eq!(round.attempts_left(), MAX_ATTEMPTS);
        prop_assert_eq!(round.status(), RoundStatus::AwaitingGuess);
    }
}

proptest! {
    #[test]
    fn loaded_words_are_always_eligible(lines in prop::collection::vec("[a-cA-C1 -]{0,7}", 0..30)) {
        let data = lines.join("\n");
        for word in load_wordbank_from_str(&data) {
            prop_assert!(word.chars().count() >= 4);
            prop_assert!(word.chars().collect::<std::collections::HashSet<_>>().len() >= 2);
        }
    }
}
