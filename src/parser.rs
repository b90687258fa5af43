use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::exclusions::ExclusionSet;
use crate::model::Recipe;

/// Result of parsing one generation response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecipes {
    /// Recipes in the order their blocks appeared in the response
    pub recipes: Vec<Recipe>,
    /// Blocks that were missing a required section and dropped
    pub discarded: usize,
}

// Block delimiter. Case-sensitive: the service echoes the exact
// "Recipe N:" framing requested by the prompt.
static RECIPE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Recipe \d+:").unwrap());

// Section labels are matched case-insensitively, each independently against
// the whole block. Multi-line sections capture lazily up to the next known
// label, or to the end of the block when no later label is present.
static TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Title:(.*)").unwrap());
static INGREDIENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)Ingredients:(.*?)(?:Instructions:|Extra Ingredients:|Cooking time:|Difficulty:|$)")
        .unwrap()
});
static INSTRUCTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)Instructions:(.*?)(?:Extra Ingredients:|Cooking time:|Difficulty:|$)").unwrap()
});
static EXTRA_INGREDIENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)Extra Ingredients:(.*?)(?:Cooking time:|Difficulty:|$)").unwrap()
});
static COOKING_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Cooking time:(.*)").unwrap());
static DIFFICULTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Difficulty:(.*)").unwrap());

/// Parse the full response text into recipe records.
///
/// Pure and idempotent: the same text and exclusion set always yield the
/// same records, in block-appearance order. Blocks missing a Title,
/// Ingredients or Instructions section are dropped without error and
/// counted in [`ParsedRecipes::discarded`], so upstream format drift is
/// observable instead of silently shrinking the result set.
pub fn parse_recipes(text: &str, exclusions: &ExclusionSet) -> ParsedRecipes {
    let markers: Vec<_> = RECIPE_MARKER.find_iter(text).collect();
    let mut parsed = ParsedRecipes::default();

    for (i, marker) in markers.iter().enumerate() {
        let end = markers
            .get(i + 1)
            .map(|next| next.start())
            .unwrap_or(text.len());
        let block = clean(&text[marker.end()..end]);

        match parse_block(&block, exclusions) {
            Some(recipe) => parsed.recipes.push(recipe),
            None => {
                debug!("Discarding recipe block missing a required section");
                parsed.discarded += 1;
            }
        }
    }

    parsed
}

/// Parse one block. Returns None when Title, Ingredients or Instructions
/// did not match; Cooking time and Difficulty default to empty strings.
fn parse_block(block: &str, exclusions: &ExclusionSet) -> Option<Recipe> {
    let title = TITLE.captures(block)?;
    let ingredients = INGREDIENTS.captures(block)?;
    let instructions = INSTRUCTIONS.captures(block)?;

    Some(Recipe {
        title: clean(&title[1]),
        ingredients: section_lines(&ingredients[1], Some(exclusions)),
        instructions: section_lines(&instructions[1], None),
        extra_ingredients: EXTRA_INGREDIENTS
            .captures(block)
            .map(|c| section_lines(&c[1], Some(exclusions)))
            .unwrap_or_default(),
        cooking_time: COOKING_TIME
            .captures(block)
            .map(|c| clean(&c[1]))
            .unwrap_or_default(),
        difficulty: DIFFICULTY
            .captures(block)
            .map(|c| clean(&c[1]))
            .unwrap_or_default(),
    })
}

/// Strip emphasis markup and surrounding whitespace.
fn clean(text: &str) -> String {
    text.replace("**", "").trim().to_string()
}

/// Split a section into cleaned, non-empty lines. When an exclusion set is
/// given, a line whose lowercased form exactly equals an entry is dropped —
/// substring containment does not exclude (so "2 cups flour" survives an
/// exclusion entry "flour").
fn section_lines(section: &str, exclusions: Option<&ExclusionSet>) -> Vec<String> {
    section
        .split('\n')
        .map(clean)
        .filter(|line| !line.is_empty())
        .filter(|line| exclusions.map_or(true, |set| !set.contains(line)))
        .collect()
}
