use recipe_generator::parser::parse_recipes;
use recipe_generator::state::{update, Action, SessionState};
use recipe_generator::{DietaryRestriction, InputMode};

const RESPONSE: &str = "Recipe 1:\nTitle: Soup\nIngredients:\nSalt\nWater\n\
                        Instructions:\nBoil water\nAdd salt\nCooking time: 10 min\nDifficulty: Easy";

#[test]
fn test_session_round_trip_success() {
    // The user fills in the form
    let mut state = SessionState::default();
    state = update(state, Action::SetMode(InputMode::Manual));
    state = update(state, Action::SetIngredientsText("water, salt".to_string()));
    state = update(state, Action::AddExclusion("Salt".to_string()));
    state = update(state, Action::ToggleDietary(DietaryRestriction::Vegan));

    // Trigger generation; the in-flight request works off a snapshot
    state = update(state, Action::GenerationStarted);
    assert!(state.is_loading);
    let request = state.to_request();

    // Completion installs the parsed recipes
    let parsed = parse_recipes(RESPONSE, &request.exclusions);
    state = update(state, Action::GenerationSucceeded(parsed));

    assert!(!state.is_loading);
    assert_eq!(state.recipes.len(), 1);
    assert_eq!(state.recipes[0].title, "Soup");
    assert_eq!(state.recipes[0].ingredients, vec!["Water"]);
    assert!(state.error.is_none());
}

#[test]
fn test_session_failure_then_retry() {
    let mut state = SessionState::default();
    state = update(state, Action::SetIngredientsText("rice".to_string()));
    state = update(state, Action::GenerationStarted);
    state = update(state, Action::GenerationFailed("Generation failed".to_string()));

    assert_eq!(state.error.as_deref(), Some("Generation failed"));
    assert!(!state.is_loading);

    // Retrying clears the error and loads again
    state = update(state, Action::GenerationStarted);
    assert!(state.is_loading);
    assert!(state.error.is_none());

    let parsed = parse_recipes(RESPONSE, &state.to_request().exclusions);
    state = update(state, Action::GenerationSucceeded(parsed));
    assert_eq!(state.recipes.len(), 1);
}

#[test]
fn test_results_replaced_wholesale_each_generation() {
    let mut state = SessionState::default();
    state = update(state, Action::SetIngredientsText("water".to_string()));
    state = update(state, Action::GenerationStarted);
    let parsed = parse_recipes(RESPONSE, &state.to_request().exclusions);
    state = update(state, Action::GenerationSucceeded(parsed));
    assert_eq!(state.recipes.len(), 1);

    // A new run starts from an empty grid, even if it parses nothing
    state = update(state, Action::GenerationStarted);
    assert!(state.recipes.is_empty());
    let parsed = parse_recipes("no blocks here", &state.to_request().exclusions);
    state = update(state, Action::GenerationSucceeded(parsed));
    assert!(state.recipes.is_empty());
    assert!(state.error.is_none());
}
