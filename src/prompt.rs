use crate::model::{GenerationRequest, InputMode};

/// The fixed tail of every generation prompt: the six labeled fields each
/// recipe must carry and the plain-text-only instruction.
///
/// Loaded from `prompt.txt` at compile time using the `include_str!` macro,
/// making it easy to edit without dealing with Rust string syntax.
pub const RECIPE_FORMAT_PROMPT: &str = include_str!("prompt.txt");

/// Build the instruction string for one generation request.
///
/// Pure string construction; no error conditions. The service is asked for
/// exactly 3 recipes and told to omit every excluded ingredient, but the
/// parser still filters exclusions out of whatever comes back.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let mut prompt =
        String::from("Generate 3 unique recipe ideas based on the following requirements:\n\n");

    if !request.dietary.is_empty() {
        prompt.push_str("DIETARY REQUIREMENTS:\n");
        for restriction in &request.dietary {
            prompt.push_str(&format!("- {}\n", restriction.id()));
        }
        prompt.push('\n');
    }

    if !request.exclusions.is_empty() {
        prompt.push_str("EXCLUDED INGREDIENTS:\n");
        for ingredient in request.exclusions.iter() {
            prompt.push_str(&format!("- {}\n", ingredient));
        }
        prompt.push('\n');
    }

    match request.mode {
        InputMode::Image => {
            // Images are never sent to the model; image mode falls back to
            // a pantry of common ingredients.
            prompt.push_str("ANALYSIS REQUIREMENTS:\n");
            prompt.push_str("1. Use common ingredients typically found in kitchens\n");
            prompt.push_str("2. Create recipes based on these common ingredients\n");
        }
        InputMode::Manual => {
            prompt.push_str(&format!("INGREDIENTS:\n{}\n\n", request.ingredients_text));
        }
    }

    prompt.push_str(RECIPE_FORMAT_PROMPT);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exclusions::ExclusionSet;
    use crate::model::DietaryRestriction;

    #[test]
    fn test_format_prompt_is_embedded() {
        // Verify the tail is not empty and carries the field list
        assert!(!RECIPE_FORMAT_PROMPT.is_empty());
        assert!(RECIPE_FORMAT_PROMPT.contains("Title"));
        assert!(RECIPE_FORMAT_PROMPT.contains("Ingredients list"));
        assert!(RECIPE_FORMAT_PROMPT.contains("Cooking time"));
        assert!(RECIPE_FORMAT_PROMPT.contains("Difficulty level (Easy, Medium, Hard)"));
        assert!(RECIPE_FORMAT_PROMPT.contains("plain text output"));
    }

    #[test]
    fn test_manual_mode_includes_ingredient_text() {
        let request = GenerationRequest {
            mode: InputMode::Manual,
            ingredients_text: "eggs, flour, milk".to_string(),
            ..Default::default()
        };

        let prompt = build_prompt(&request);
        assert!(prompt.starts_with("Generate 3 unique recipe ideas"));
        assert!(prompt.contains("INGREDIENTS:\neggs, flour, milk\n"));
        assert!(!prompt.contains("ANALYSIS REQUIREMENTS"));
    }

    #[test]
    fn test_image_mode_uses_common_ingredients_stanza() {
        let request = GenerationRequest {
            mode: InputMode::Image,
            images: vec!["data:image/png;base64,AAAA".to_string()],
            ..Default::default()
        };

        let prompt = build_prompt(&request);
        assert!(prompt.contains("ANALYSIS REQUIREMENTS"));
        assert!(prompt.contains("common ingredients typically found in kitchens"));
        assert!(!prompt.contains("INGREDIENTS:\n"));
        // Image payloads must never leak into the prompt
        assert!(!prompt.contains("base64"));
    }

    #[test]
    fn test_dietary_and_exclusion_sections() {
        let request = GenerationRequest {
            mode: InputMode::Manual,
            ingredients_text: "rice".to_string(),
            exclusions: ["Peanuts", "shellfish"].into_iter().collect::<ExclusionSet>(),
            dietary: vec![DietaryRestriction::Vegan, DietaryRestriction::GlutenFree],
            ..Default::default()
        };

        let prompt = build_prompt(&request);
        assert!(prompt.contains("DIETARY REQUIREMENTS:\n- vegan\n- gluten-free\n"));
        assert!(prompt.contains("EXCLUDED INGREDIENTS:\n- peanuts\n- shellfish\n"));
        // Sections appear before the ingredient section
        assert!(prompt.find("DIETARY").unwrap() < prompt.find("INGREDIENTS:").unwrap());
    }

    #[test]
    fn test_empty_selections_omit_sections() {
        let request = GenerationRequest {
            mode: InputMode::Manual,
            ingredients_text: "rice".to_string(),
            ..Default::default()
        };

        let prompt = build_prompt(&request);
        assert!(!prompt.contains("DIETARY REQUIREMENTS"));
        assert!(!prompt.contains("EXCLUDED INGREDIENTS"));
    }
}
