//! Letter-frequency heuristic scoring (Tier B)
//!
//! Used when the candidate pool is too large for exhaustive search. Words are
//! ranked by how many frequently-occurring letters they would probe at the
//! still-unknown positions, and the final pick is drawn at random from the
//! top scorers so informationally-equivalent words all stay in play.

use crate::core::{Knowledge, WORD_LEN, Word};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Minimum number of entries kept in the random tie pool
pub const TIE_POOL_MIN: usize = 3;

/// Fraction of the candidate pool kept as the tie pool
pub const TIE_POOL_FRACTION: f64 = 0.01;

/// Count letter occurrences across the pool at unlocked positions
///
/// Locked positions contribute nothing: a guess cannot learn anything there.
fn letter_counts(pool: &[&Word], knowledge: &Knowledge) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for word in pool {
        for (slot, &ch) in word.chars().iter().enumerate() {
            if knowledge.locked_at(slot).is_none() {
                counts[usize::from(ch - b'a')] += 1;
            }
        }
    }
    counts
}

/// Score one candidate word against the pool-wide letter counts
///
/// Sums the count for each letter at an unlocked position, skipping letters
/// already known to be needed (confirming them again teaches nothing) and
/// repeated occurrences within the word (only the first probe of a letter
/// carries information).
fn score_word(word: &Word, knowledge: &Knowledge, counts: &[usize; 26]) -> usize {
    let chars = word.chars();
    let mut score = 0;

    for slot in 0..WORD_LEN {
        let ch = chars[slot];
        if knowledge.locked_at(slot).is_some() {
            continue;
        }
        if knowledge.requires(ch) {
            continue;
        }
        if chars[..slot].contains(&ch) {
            continue;
        }
        score += counts[usize::from(ch - b'a')];
    }

    score
}

/// Rank the pool and keep the top scorers as the tie pool
///
/// Keeps the top `max(TIE_POOL_MIN, round(1%))` words by descending score,
/// equal scores ordered by descending text so the cut is reproducible.
#[must_use]
pub fn tie_pool<'a>(pool: &[&'a Word], knowledge: &Knowledge) -> Vec<&'a Word> {
    let counts = letter_counts(pool, knowledge);

    let mut scored: Vec<(usize, &Word)> = pool
        .iter()
        .map(|&word| (score_word(word, knowledge, &counts), word))
        .collect();
    scored.sort_unstable_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.text().cmp(a.1.text())));

    let keep = TIE_POOL_MIN.max((pool.len() as f64 * TIE_POOL_FRACTION).round() as usize);
    scored.truncate(keep);

    scored.into_iter().map(|(_, word)| word).collect()
}

/// Pick the next guess: a uniformly random member of the tie pool
///
/// The randomization is deliberate (it avoids deterministically fixating on
/// one of many equivalent words); callers wanting reproducibility supply a
/// seeded `rng`.
#[must_use]
pub fn best_guess<'a>(
    pool: &[&'a Word],
    knowledge: &Knowledge,
    rng: &mut impl Rng,
) -> Option<&'a Word> {
    tie_pool(pool, knowledge).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| word(s)).collect()
    }

    #[test]
    fn counts_skip_locked_positions() {
        let mut knowledge = Knowledge::new();
        // Locks S at slot 0
        let guess = word("sling");
        let feedback = Feedback::evaluate(&guess, &word("sound"));
        knowledge.update(&guess, &feedback);
        assert_eq!(knowledge.locked_at(0), Some(b's'));

        let list = words(&["sport", "stand"]);
        let pool: Vec<&Word> = list.iter().collect();
        let counts = letter_counts(&pool, &knowledge);

        // Both words start with S but only unlocked slots count
        assert_eq!(counts[usize::from(b's' - b'a')], 0);
        assert_eq!(counts[usize::from(b't' - b'a')], 2);
    }

    #[test]
    fn score_skips_needed_letters() {
        let mut knowledge = Knowledge::new();
        // C ends up needed (wrong spot)
        let guess = word("crane");
        let feedback = Feedback::evaluate(&guess, &word("trace"));
        knowledge.update(&guess, &feedback);
        assert!(knowledge.requires(b'c'));

        let mut counts = [0usize; 26];
        counts[usize::from(b'c' - b'a')] = 100;
        counts[usize::from(b'n' - b'a')] = 3;

        // Slots 1, 2, 4 are locked (R, A, E); only C at 0 and N at 3 are open,
        // and C scores nothing because it is already required.
        let score = score_word(&word("crank"), &knowledge, &counts);
        assert_eq!(score, 3);
    }

    #[test]
    fn score_counts_repeated_letters_once() {
        let knowledge = Knowledge::new();
        let mut counts = [0usize; 26];
        counts[usize::from(b'a' - b'a')] = 10;
        counts[usize::from(b'b' - b'a')] = 1;

        // Three A's score as one
        assert_eq!(score_word(&word("ababa"), &knowledge, &counts), 11);
        assert_eq!(score_word(&word("abbbb"), &knowledge, &counts), 11);
    }

    #[test]
    fn tie_pool_holds_at_least_three() {
        let list = words(&["crane", "slate", "trace", "stone", "bread"]);
        let pool: Vec<&Word> = list.iter().collect();

        assert_eq!(tie_pool(&pool, &Knowledge::new()).len(), TIE_POOL_MIN);
    }

    #[test]
    fn tie_pool_grows_with_one_percent_of_large_pools() {
        // 600 synthetic distinct words
        let list: Vec<Word> = (0..600)
            .map(|i| {
                let bytes = [
                    b'a' + u8::try_from(i % 26).unwrap(),
                    b'a' + u8::try_from((i / 26) % 26).unwrap(),
                    b'a' + u8::try_from((i / 676) % 26).unwrap(),
                    b'x',
                    b'y',
                ];
                Word::new(String::from_utf8(bytes.to_vec()).unwrap()).unwrap()
            })
            .collect();
        let pool: Vec<&Word> = list.iter().collect();

        // round(600 * 0.01) = 6
        assert_eq!(tie_pool(&pool, &Knowledge::new()).len(), 6);
    }

    #[test]
    fn best_guess_comes_from_tie_pool() {
        let list = words(&["crane", "slate", "trace", "stone", "bread", "pound"]);
        let pool: Vec<&Word> = list.iter().collect();
        let knowledge = Knowledge::new();
        let top = tie_pool(&pool, &knowledge);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let pick = best_guess(&pool, &knowledge, &mut rng).unwrap();
            assert!(top.contains(&pick));
        }
    }

    #[test]
    fn best_guess_reproducible_with_same_seed() {
        let list = words(&["crane", "slate", "trace", "stone", "bread", "pound"]);
        let pool: Vec<&Word> = list.iter().collect();
        let knowledge = Knowledge::new();

        let a = best_guess(&pool, &knowledge, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = best_guess(&pool, &knowledge, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn best_guess_empty_pool_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(best_guess(&[], &Knowledge::new(), &mut rng).is_none());
    }
}
