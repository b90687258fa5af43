use clap::Parser;

use recipe_generator::{DietaryRestriction, ParsedRecipes, RecipeGenerator};

/// Generate recipe suggestions from the ingredients you have on hand.
#[derive(Parser, Debug)]
#[command(name = "recipe-generator", version, about)]
struct Cli {
    /// Free-text list of available ingredients (manual mode)
    #[arg(long)]
    ingredients: Option<String>,

    /// Image file path or URL; repeatable. Without --ingredients, recipes
    /// are generated from common kitchen ingredients
    #[arg(long = "image")]
    images: Vec<String>,

    /// Ingredient to leave out of every recipe; repeatable
    #[arg(long = "exclude")]
    exclude: Vec<String>,

    /// Dietary restriction (non-veg, vegan, vegetarian, gluten-free,
    /// dairy-free); repeatable
    #[arg(long = "dietary")]
    dietary: Vec<DietaryRestriction>,

    /// Generation provider (google, openai, ollama)
    #[arg(long)]
    provider: Option<String>,

    /// Model name override for the selected provider
    #[arg(long)]
    model: Option<String>,

    /// API key override for the selected provider
    #[arg(long)]
    api_key: Option<String>,

    /// Print recipes as JSON instead of cards
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = RecipeGenerator::builder();
    if let Some(text) = &cli.ingredients {
        builder = builder.ingredients(text);
    }
    for image in &cli.images {
        // URLs and data entries pass through; everything else is a file path
        if image.starts_with("http://") || image.starts_with("https://") || image.starts_with("data:")
        {
            builder = builder.image_url(image);
        } else {
            builder = builder.image(image);
        }
    }
    for ingredient in &cli.exclude {
        builder = builder.exclude(ingredient);
    }
    for restriction in cli.dietary {
        builder = builder.dietary(restriction);
    }

    let request = builder.build_request().await?;
    let parsed = if cli.api_key.is_some() || cli.model.is_some() {
        recipe_generator::generate_recipes_with_config(
            &request,
            cli.provider.as_deref(),
            cli.api_key,
            cli.model,
        )
        .await?
    } else {
        recipe_generator::generate_recipes_with_provider(&request, cli.provider.as_deref()).await?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&parsed.recipes)?);
    } else {
        print_cards(&parsed);
    }

    Ok(())
}

fn print_cards(parsed: &ParsedRecipes) {
    if parsed.recipes.is_empty() {
        println!("No recipes could be parsed from the response.");
        return;
    }

    for (i, recipe) in parsed.recipes.iter().enumerate() {
        println!("Recipe {}: {}", i + 1, recipe.title);
        if !recipe.cooking_time.is_empty() {
            println!("  Cooking time: {}", recipe.cooking_time);
        }
        if !recipe.difficulty.is_empty() {
            println!("  Difficulty: {}", recipe.difficulty);
        }
        println!("  Ingredients:");
        for ingredient in &recipe.ingredients {
            println!("    - {}", ingredient);
        }
        println!("  Instructions:");
        for (step, instruction) in recipe.instructions.iter().enumerate() {
            println!("    {}. {}", step + 1, instruction);
        }
        if !recipe.extra_ingredients.is_empty() {
            println!("  Extra ingredients:");
            for ingredient in &recipe.extra_ingredients {
                println!("    - {}", ingredient);
            }
        }
        println!();
    }
}
