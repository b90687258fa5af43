use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::exclusions::ExclusionSet;

/// A single recipe suggestion parsed out of the generation response.
///
/// Constructed only by the parser; replaced wholesale on each new
/// generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub extra_ingredients: Vec<String>,
    pub cooking_time: String,
    pub difficulty: String,
}

/// Dietary restrictions a user can select for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DietaryRestriction {
    NonVegetarian,
    Vegan,
    Vegetarian,
    GlutenFree,
    DairyFree,
}

impl DietaryRestriction {
    pub const ALL: [DietaryRestriction; 5] = [
        DietaryRestriction::NonVegetarian,
        DietaryRestriction::Vegan,
        DietaryRestriction::Vegetarian,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::DairyFree,
    ];

    /// Stable identifier used in prompts and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            DietaryRestriction::NonVegetarian => "non-veg",
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::Vegetarian => "vegetarian",
            DietaryRestriction::GlutenFree => "gluten-free",
            DietaryRestriction::DairyFree => "dairy-free",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            DietaryRestriction::NonVegetarian => "Non-Vegetarian",
            DietaryRestriction::Vegan => "Vegan",
            DietaryRestriction::Vegetarian => "Vegetarian",
            DietaryRestriction::GlutenFree => "Gluten-Free",
            DietaryRestriction::DairyFree => "Dairy-Free",
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DietaryRestriction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietaryRestriction::ALL
            .into_iter()
            .find(|d| d.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let ids: Vec<&str> = DietaryRestriction::ALL.iter().map(|d| d.id()).collect();
                format!("unknown dietary restriction '{}' (one of: {})", s, ids.join(", "))
            })
    }
}

/// How the user supplies their available ingredients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Ingredients come from uploaded or linked images
    #[default]
    Image,
    /// Ingredients typed in as free text
    Manual,
}

/// Everything needed to run one generation: mode, inputs and selections.
///
/// A snapshot of the form state at the moment the user triggers generation.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub mode: InputMode,
    /// Free-text ingredient list (manual mode)
    pub ingredients_text: String,
    /// Embedded image entries: data URLs or plain URLs, interchangeable
    pub images: Vec<String>,
    pub exclusions: ExclusionSet,
    pub dietary: Vec<DietaryRestriction>,
}
