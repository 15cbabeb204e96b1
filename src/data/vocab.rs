// ============================================================
// Layer 4 — Vocabulary
// ============================================================
// Bidirectional token ↔ index mapping with a reserved UNK entry.
//
// How the ranking works:
//   1. Count every distinct token in one pass, remembering the
//      order in which tokens first appeared.
//   2. Sort by descending count; ties break by first appearance,
//      so two tokens with equal counts keep their corpus order.
//      The tie-break makes the whole assignment deterministic:
//      the same token sequence always yields the same indices.
//   3. Prepend ("UNK", -1) and assign index = rank. UNK is
//      always index 0, for capped and uncapped vocabularies alike.
//
// Two vocabularies are built from a recipe corpus:
//   - ingredients: capped at a configured max_size, so rare
//     ingredients collapse onto UNK
//   - recipe names: uncapped (max_size = None), one entry per
//     distinct name. The asymmetry is a configuration choice,
//     not an accident: every recipe must keep its own embedding
//     row, while the ingredient table is bounded.
//
// lookup() is a total function: any token not retained maps to
// UNK's index. There is no get-or-insert path, so a lookup can
// never grow the vocabulary.
//
// Reference: Mikolov et al. (2013) word2vec vocabulary handling
//            Rust Book §8 (HashMaps)

use std::collections::HashMap;

/// The sentinel token standing in for everything outside the
/// retained vocabulary.
pub const UNKNOWN_TOKEN: &str = "UNK";

/// UNK's index. Always 0.
pub const UNKNOWN_INDEX: usize = 0;

/// Immutable frequency-ranked vocabulary. Built once from the
/// full corpus, never modified afterwards.
pub struct Vocabulary {
    /// token → index, including the UNK entry
    token_to_index: HashMap<String, usize>,
    /// index → token, rank order; index 0 is UNK
    index_to_token: Vec<String>,
    /// Occurrence count per index; UNK carries -1
    counts: Vec<i64>,
}

impl Vocabulary {
    /// Build a vocabulary from a token sequence.
    ///
    /// With `max_size = Some(n)` the result holds at most n entries:
    /// UNK plus the n - 1 most frequent tokens. With `max_size = None`
    /// every distinct token is retained. Fewer distinct tokens than
    /// the cap is fine; the vocabulary just comes out smaller.
    pub fn build<I, S>(tokens: I, max_size: Option<usize>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // ── Count, remembering first-seen order ───────────────────────────────
        let mut freq: HashMap<String, (usize, usize)> = HashMap::new();
        let mut distinct = 0usize;

        for token in tokens {
            let token = token.as_ref();
            match freq.get_mut(token) {
                Some(entry) => entry.0 += 1,
                None => {
                    freq.insert(token.to_string(), (1, distinct));
                    distinct += 1;
                }
            }
        }

        // ── Rank: count descending, first appearance ascending ────────────────
        let mut ranked: Vec<(String, usize, usize)> = freq
            .into_iter()
            .map(|(token, (count, seen))| (token, count, seen))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        if let Some(max) = max_size {
            // One slot is spoken for by UNK
            ranked.truncate(max.saturating_sub(1));
        }

        // ── Assign index = rank, UNK first ────────────────────────────────────
        let mut token_to_index = HashMap::with_capacity(ranked.len() + 1);
        let mut index_to_token = Vec::with_capacity(ranked.len() + 1);
        let mut counts = Vec::with_capacity(ranked.len() + 1);

        token_to_index.insert(UNKNOWN_TOKEN.to_string(), UNKNOWN_INDEX);
        index_to_token.push(UNKNOWN_TOKEN.to_string());
        counts.push(-1);

        for (token, count, _) in ranked {
            token_to_index.insert(token.clone(), index_to_token.len());
            index_to_token.push(token);
            counts.push(count as i64);
        }

        Self {
            token_to_index,
            index_to_token,
            counts,
        }
    }

    /// Forward lookup. Total: tokens outside the vocabulary resolve
    /// to UNK's index instead of failing.
    pub fn lookup(&self, token: &str) -> usize {
        self.token_to_index
            .get(token)
            .copied()
            .unwrap_or(UNKNOWN_INDEX)
    }

    /// Reverse lookup: index → token. None for out-of-range indices.
    pub fn token(&self, index: usize) -> Option<&str> {
        self.index_to_token.get(index).map(String::as_str)
    }

    /// Occurrence count for an index (-1 for UNK).
    pub fn count(&self, index: usize) -> Option<i64> {
        self.counts.get(index).copied()
    }

    /// Number of entries, UNK included.
    pub fn len(&self) -> usize {
        self.index_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        // UNK is always present
        false
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Vec<&'static str> {
        // salt ×3, water ×2, beef ×2, onion ×1
        vec![
            "salt", "water", "beef", "salt", "water", "beef", "salt", "onion",
        ]
    }

    #[test]
    fn test_unk_is_always_index_zero() {
        let vocab = Vocabulary::build(tokens(), Some(3));
        assert_eq!(vocab.lookup(UNKNOWN_TOKEN), UNKNOWN_INDEX);
        assert_eq!(vocab.token(0), Some(UNKNOWN_TOKEN));
        assert_eq!(vocab.count(0), Some(-1));
    }

    #[test]
    fn test_frequency_order_with_first_seen_tie_break() {
        let vocab = Vocabulary::build(tokens(), None);
        // salt is most frequent; water and beef tie at 2 and keep
        // their first-appearance order; onion trails.
        assert_eq!(vocab.lookup("salt"), 1);
        assert_eq!(vocab.lookup("water"), 2);
        assert_eq!(vocab.lookup("beef"), 3);
        assert_eq!(vocab.lookup("onion"), 4);
    }

    #[test]
    fn test_cap_collapses_rare_tokens_onto_unk() {
        let vocab = Vocabulary::build(tokens(), Some(3));
        // Room for UNK + 2 tokens: salt and water survive.
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.lookup("salt"), 1);
        assert_eq!(vocab.lookup("water"), 2);
        assert_eq!(vocab.lookup("beef"), UNKNOWN_INDEX);
        assert_eq!(vocab.lookup("onion"), UNKNOWN_INDEX);
    }

    #[test]
    fn test_cap_larger_than_distinct_count_is_fine() {
        let vocab = Vocabulary::build(tokens(), Some(1000));
        assert_eq!(vocab.len(), 5); // UNK + 4 distinct tokens
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = Vocabulary::build(tokens(), Some(4));
        let b = Vocabulary::build(tokens(), Some(4));
        for i in 0..a.len() {
            assert_eq!(a.token(i), b.token(i));
        }
    }

    #[test]
    fn test_reverse_lookup_covers_every_index() {
        let vocab = Vocabulary::build(tokens(), None);
        for i in 0..vocab.len() {
            let token = vocab.token(i).unwrap();
            assert_eq!(vocab.lookup(token), i);
        }
        assert_eq!(vocab.token(vocab.len()), None);
    }

    #[test]
    fn test_unseen_token_resolves_to_unk() {
        let vocab = Vocabulary::build(tokens(), None);
        assert_eq!(vocab.lookup("saffron"), UNKNOWN_INDEX);
    }

    #[test]
    fn test_counts_follow_rank() {
        let vocab = Vocabulary::build(tokens(), None);
        assert_eq!(vocab.count(1), Some(3)); // salt
        assert_eq!(vocab.count(2), Some(2)); // water
        assert_eq!(vocab.count(4), Some(1)); // onion
    }

    #[test]
    fn test_empty_token_sequence_gives_unk_only() {
        let vocab = Vocabulary::build(Vec::<&str>::new(), Some(10));
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.token(0), Some(UNKNOWN_TOKEN));
    }
}
