use crate::exclusions::ExclusionSet;
use crate::model::{DietaryRestriction, GenerationRequest, InputMode, Recipe};
use crate::parser::ParsedRecipes;

/// The complete form and result state of one generation session.
///
/// Updated only through [`update`], which consumes the previous state and
/// returns the next one. Generation itself happens outside the reducer;
/// its lifecycle is reported back via the `Generation*` actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub mode: InputMode,
    /// Embedded image entries (data URLs or plain URLs)
    pub images: Vec<String>,
    pub ingredients_text: String,
    pub exclusions: ExclusionSet,
    pub dietary: Vec<DietaryRestriction>,
    pub recipes: Vec<Recipe>,
    /// Blocks dropped by the parser in the last generation
    pub discarded: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Everything a user (or the generation lifecycle) can do to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetMode(InputMode),
    SetIngredientsText(String),
    AddImage(String),
    RemoveImage(usize),
    AddExclusion(String),
    RemoveExclusion(String),
    ToggleDietary(DietaryRestriction),
    GenerationStarted,
    GenerationSucceeded(ParsedRecipes),
    GenerationFailed(String),
}

/// Apply one action, producing the next state.
///
/// There is at most one outstanding generation: `GenerationStarted` while
/// already loading is ignored, so completion handlers are the only writers
/// of the result fields. Failures leave the form intact and reusable.
pub fn update(state: SessionState, action: Action) -> SessionState {
    match action {
        Action::SetMode(mode) => SessionState { mode, ..state },
        Action::SetIngredientsText(text) => SessionState {
            ingredients_text: text,
            ..state
        },
        Action::AddImage(entry) => {
            let mut images = state.images;
            images.push(entry);
            SessionState { images, ..state }
        }
        Action::RemoveImage(index) => {
            let mut images = state.images;
            if index < images.len() {
                images.remove(index);
            }
            SessionState { images, ..state }
        }
        Action::AddExclusion(ingredient) => {
            let mut exclusions = state.exclusions;
            exclusions.add(&ingredient);
            SessionState { exclusions, ..state }
        }
        Action::RemoveExclusion(ingredient) => {
            let mut exclusions = state.exclusions;
            exclusions.remove(&ingredient);
            SessionState { exclusions, ..state }
        }
        Action::ToggleDietary(restriction) => {
            let mut dietary = state.dietary;
            match dietary.iter().position(|d| *d == restriction) {
                Some(index) => {
                    dietary.remove(index);
                }
                None => dietary.push(restriction),
            }
            SessionState { dietary, ..state }
        }
        Action::GenerationStarted => {
            if state.is_loading {
                return state;
            }
            SessionState {
                is_loading: true,
                recipes: Vec::new(),
                discarded: 0,
                error: None,
                ..state
            }
        }
        Action::GenerationSucceeded(parsed) => SessionState {
            recipes: parsed.recipes,
            discarded: parsed.discarded,
            is_loading: false,
            ..state
        },
        Action::GenerationFailed(message) => SessionState {
            error: Some(message),
            is_loading: false,
            ..state
        },
    }
}

impl SessionState {
    /// Snapshot the form inputs for one generation call.
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest {
            mode: self.mode,
            ingredients_text: self.ingredients_text.clone(),
            images: self.images.clone(),
            exclusions: self.exclusions.clone(),
            dietary: self.dietary.clone(),
        }
    }
}
