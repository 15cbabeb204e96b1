// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Loads the recipe corpus from a line-delimited JSON file:
// one JSON object per line, each with at least
//   name:        string
//   ingredients: array of [ingredient_name, quantity] arrays
//
// File order is preserved: downstream pair extraction and the
// batch cursor both depend on a stable record order.
//
// A line that fails to parse aborts the load with an error that
// names the 1-based line number and a snippet of the offending
// content. Records are never silently skipped: a corpus with a
// bad line in the middle would otherwise train on a silently
// different pair sequence.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{fs, path::PathBuf};

use crate::domain::recipe::Recipe;
use crate::domain::traits::RecipeSource;
use crate::error::PipelineError;

/// How much of a bad line to quote back in a parse error.
const SNIPPET_LEN: usize = 60;

/// Loads recipes from a line-delimited JSON file.
/// Implements the RecipeSource trait from Layer 3.
pub struct JsonlCorpus {
    /// Path to the corpus file, e.g. data/sitemap.json
    path: PathBuf,
}

impl JsonlCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecipeSource for JsonlCorpus {
    fn load_all(&self) -> Result<Vec<Recipe>, PipelineError> {
        let text = fs::read_to_string(&self.path).map_err(|e| PipelineError::CorpusIo {
            path: self.path.display().to_string(),
            source: e,
        })?;

        let recipes = parse_corpus(&text)?;
        tracing::info!(
            "Loaded {} recipes from '{}'",
            recipes.len(),
            self.path.display()
        );
        Ok(recipes)
    }
}

/// Parse a whole corpus held in memory, one record per line.
///
/// Split out from the file read so the parsing rules are testable
/// without touching the filesystem.
pub fn parse_corpus(text: &str) -> Result<Vec<Recipe>, PipelineError> {
    let mut recipes = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let recipe: Recipe =
            serde_json::from_str(line).map_err(|e| PipelineError::MalformedInput {
                line: idx + 1,
                message: format!("{} (content: {:?})", e, snippet(line)),
            })?;
        recipes.push(recipe);
    }

    Ok(recipes)
}

/// First SNIPPET_LEN characters of a line, for error messages.
fn snippet(line: &str) -> &str {
    match line.char_indices().nth(SNIPPET_LEN) {
        Some((byte_idx, _)) => &line[..byte_idx],
        None => line,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = concat!(
        r#"{"name":"soup","ingredients":[["salt",""],["water",""]]}"#,
        "\n",
        r#"{"name":"stew","ingredients":[["salt",""],["beef",""]]}"#,
        "\n",
    );

    #[test]
    fn test_parses_records_in_file_order() {
        let recipes = parse_corpus(CORPUS).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name, "soup");
        assert_eq!(recipes[1].name, "stew");
        assert_eq!(recipes[1].ingredients[1].name(), "beef");
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let text = concat!(
            r#"{"name":"soup","ingredients":[]}"#,
            "\n",
            "this is not json\n",
        );
        let err = parse_corpus(text).unwrap_err();
        match err {
            PipelineError::MalformedInput { line, ref message } => {
                assert_eq!(line, 2);
                assert!(message.contains("not json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_record_without_ingredients_is_malformed() {
        let err = parse_corpus(r#"{"name":"soup"}"#).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MalformedInput { line: 1, .. }
        ));
    }

    #[test]
    fn test_empty_corpus_parses_to_no_records() {
        assert!(parse_corpus("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let corpus = JsonlCorpus::new("/definitely/not/a/real/path.json");
        let err = corpus.load_all().unwrap_err();
        assert!(matches!(err, PipelineError::CorpusIo { .. }));
    }
}
