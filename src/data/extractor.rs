// ============================================================
// Layer 4 — Pair Extractor
// ============================================================
// Walks the loaded recipe records and emits (context, target)
// index pairs for the two relations this system trains on:
//
//   Co-occurrence: within one recipe, every ingredient is paired
//   with every other ingredient in both directions. A recipe
//   with k ingredients contributes exactly k × (k - 1) pairs
//   (0 for k ≤ 1). Quadratic in k, which is acceptable for
//   recipe-sized ingredient lists; a windowed variant would be
//   the fix if corpora with very long recipes ever show up.
//
//   Membership: every (recipe, ingredient) edge becomes one pair
//   with the recipe as context and the ingredient as target.
//
// Both relations preserve corpus traversal order: record order
// first, then the within-record nested loop order. The batch
// cursor slices these lists positionally, so the order is part
// of the contract, not an implementation detail.
//
// Ingredient names outside the capped vocabulary resolve to UNK
// and are kept, never dropped. Recipe names always resolve to a
// real entry because the recipe vocabulary is built from these
// same records.
//
// Reference: Mikolov et al. (2013) skip-gram pair generation

use crate::data::vocab::Vocabulary;
use crate::domain::pair::Pair;
use crate::domain::recipe::Recipe;

/// Emit ingredient co-occurrence pairs for every recipe.
///
/// For ingredient positions i (target) and j (context) with i ≠ j,
/// the emitted pair is (index of ingredient[j], index of ingredient[i]).
pub fn extract_cooccurrence(records: &[Recipe], ingredient_vocab: &Vocabulary) -> Vec<Pair> {
    let mut pairs = Vec::new();

    for recipe in records {
        // Resolve names once per recipe; the nested loop below only
        // touches indices.
        let indices: Vec<usize> = recipe
            .ingredient_names()
            .map(|name| ingredient_vocab.lookup(name))
            .collect();

        for (i, &target) in indices.iter().enumerate() {
            for (j, &context) in indices.iter().enumerate() {
                if i != j {
                    pairs.push(Pair::new(context, target));
                }
            }
        }
    }

    pairs
}

/// Emit one (recipe, ingredient) membership pair per ingredient
/// occurrence, in corpus order.
pub fn extract_membership(
    records: &[Recipe],
    recipe_vocab: &Vocabulary,
    ingredient_vocab: &Vocabulary,
) -> Vec<Pair> {
    let mut pairs = Vec::new();

    for recipe in records {
        let recipe_index = recipe_vocab.lookup(&recipe.name);
        for name in recipe.ingredient_names() {
            pairs.push(Pair::new(recipe_index, ingredient_vocab.lookup(name)));
        }
    }

    pairs
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_corpus;
    use crate::data::vocab::UNKNOWN_INDEX;

    /// The two-recipe corpus used across these tests:
    ///   soup: salt, water
    ///   stew: salt, beef
    fn corpus() -> Vec<Recipe> {
        parse_corpus(concat!(
            r#"{"name":"soup","ingredients":[["salt",""],["water",""]]}"#,
            "\n",
            r#"{"name":"stew","ingredients":[["salt",""],["beef",""]]}"#,
            "\n",
        ))
        .unwrap()
    }

    fn ingredient_vocab(records: &[Recipe]) -> Vocabulary {
        Vocabulary::build(
            records.iter().flat_map(|r| r.ingredient_names()),
            Some(4),
        )
    }

    #[test]
    fn test_pair_count_is_k_times_k_minus_one() {
        let records = parse_corpus(concat!(
            r#"{"name":"a","ingredients":[["x",""],["y",""],["z",""],["w",""]]}"#,
            "\n",
            r#"{"name":"b","ingredients":[["x",""]]}"#,
            "\n",
            r#"{"name":"c","ingredients":[]}"#,
            "\n",
        ))
        .unwrap();
        let vocab = ingredient_vocab(&records);
        let pairs = extract_cooccurrence(&records, &vocab);
        // 4×3 from recipe a, 0 from the one-ingredient and empty recipes
        assert_eq!(pairs.len(), 12);
    }

    #[test]
    fn test_cooccurrence_pairs_and_order() {
        let records = corpus();
        let vocab = ingredient_vocab(&records);
        // salt ×2 → index 1; water and beef ×1 each, first-seen order
        let (salt, water, beef) = (1, 2, 3);
        assert_eq!(vocab.lookup("salt"), salt);
        assert_eq!(vocab.lookup("water"), water);
        assert_eq!(vocab.lookup("beef"), beef);

        let pairs = extract_cooccurrence(&records, &vocab);
        assert_eq!(
            pairs,
            vec![
                // soup: target salt pairs with context water, then the reverse
                Pair::new(water, salt),
                Pair::new(salt, water),
                // stew
                Pair::new(beef, salt),
                Pair::new(salt, beef),
            ]
        );
    }

    #[test]
    fn test_unknown_ingredient_maps_to_unk_not_dropped() {
        let records = corpus();
        // Cap of 2 keeps only UNK + salt
        let vocab = Vocabulary::build(
            records.iter().flat_map(|r| r.ingredient_names()),
            Some(2),
        );
        let pairs = extract_cooccurrence(&records, &vocab);
        assert_eq!(pairs.len(), 4);
        // water and beef collapse to UNK but their pairs survive
        assert_eq!(pairs[0], Pair::new(UNKNOWN_INDEX, 1));
        assert_eq!(pairs[1], Pair::new(1, UNKNOWN_INDEX));
    }

    #[test]
    fn test_membership_pairs_in_corpus_order() {
        let records = corpus();
        let ingredient_vocab = ingredient_vocab(&records);
        let recipe_vocab = Vocabulary::build(records.iter().map(|r| r.name.as_str()), None);
        // Equal-frequency recipe names keep first-seen order after UNK
        let (soup, stew) = (1, 2);
        assert_eq!(recipe_vocab.lookup("soup"), soup);
        assert_eq!(recipe_vocab.lookup("stew"), stew);

        let pairs = extract_membership(&records, &recipe_vocab, &ingredient_vocab);
        assert_eq!(
            pairs,
            vec![
                Pair::new(soup, ingredient_vocab.lookup("salt")),
                Pair::new(soup, ingredient_vocab.lookup("water")),
                Pair::new(stew, ingredient_vocab.lookup("salt")),
                Pair::new(stew, ingredient_vocab.lookup("beef")),
            ]
        );
    }

    #[test]
    fn test_recipe_lookup_never_falls_back_to_unk() {
        let records = corpus();
        let recipe_vocab = Vocabulary::build(records.iter().map(|r| r.name.as_str()), None);
        for recipe in &records {
            assert_ne!(recipe_vocab.lookup(&recipe.name), UNKNOWN_INDEX);
        }
    }
}
