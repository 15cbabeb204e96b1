// ============================================================
// Layer 3 — Recipe Domain Type
// ============================================================
// One recipe record as it appears in the corpus: a name plus
// an ordered list of [ingredient_name, quantity] entries.
//
// The JSONL corpus stores each ingredient as a 2-element array:
//   {"name":"soup","ingredients":[["salt","1 tsp"],["water","2 cups"]]}
// serde maps a 2-field tuple struct onto exactly that array
// shape, so IngredientEntry needs no custom Deserialize impl.
//
// Records are read-only after load: the extractor walks them,
// nothing ever mutates them.
//
// Reference: Rust Book §5 (Structs)
//            serde documentation (tuple structs as sequences)

use serde::{Deserialize, Serialize};

/// One `[ingredient_name, quantity_or_unit]` entry from a recipe's
/// ingredient list. The quantity string is carried through verbatim;
/// only the name participates in vocabulary and pair building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientEntry(pub String, pub String);

impl IngredientEntry {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn quantity(&self) -> &str {
        &self.1
    }
}

/// A recipe record loaded from one corpus line.
/// Unknown extra fields on the JSON object are ignored;
/// `name` and `ingredients` are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<IngredientEntry>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<IngredientEntry>) -> Self {
        Self {
            name: name.into(),
            ingredients,
        }
    }

    /// Ingredient names in list order, quantities stripped.
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|entry| entry.name())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_ingredient_arrays() {
        let json = r#"{"name":"soup","ingredients":[["salt","1 tsp"],["water",""]]}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.name, "soup");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].name(), "salt");
        assert_eq!(recipe.ingredients[0].quantity(), "1 tsp");
    }

    #[test]
    fn test_ingredient_names_preserve_order() {
        let json = r#"{"name":"stew","ingredients":[["beef",""],["salt",""],["onion",""]]}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = recipe.ingredient_names().collect();
        assert_eq!(names, vec!["beef", "salt", "onion"]);
    }

    #[test]
    fn test_missing_ingredients_field_is_rejected() {
        let json = r#"{"name":"soup"}"#;
        assert!(serde_json::from_str::<Recipe>(json).is_err());
    }
}
