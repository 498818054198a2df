//! Terminal rendering helpers

use chrono::{DateTime, TimeZone};
use crossterm::style::Stylize;

use larder_core::ingredient::segment_ingredient;
use larder_core::playback::StepPlayback;
use larder_core::Recipe;

/// Planner section header, e.g. "18 Nov"
pub fn day_label<Tz: TimeZone>(day: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    day.format("%-d %b").to_string()
}

/// Ingredient line with quantities in blue
pub fn highlighted_ingredient(text: &str) -> String {
    segment_ingredient(text)
        .into_iter()
        .map(|segment| {
            if segment.numeric {
                segment.text.as_str().blue().to_string()
            } else {
                segment.text
            }
        })
        .collect()
}

pub fn print_recipe_list(recipes: &[Recipe]) {
    for (index, recipe) in recipes.iter().enumerate() {
        println!("  {:>2}. {}", index + 1, recipe.title);
    }
}

pub fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.title.as_str().bold());
    println!();
    println!("Ingredients");
    for ingredient in &recipe.ingredients {
        println!("  • {}", highlighted_ingredient(ingredient));
    }
    println!();
    println!("Method");
    for (index, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", (index + 1).to_string().dark_grey(), step);
    }
}

pub fn print_step(playback: &StepPlayback) {
    if let (Some((step, total)), Some(text)) = (playback.position(), playback.current_step()) {
        println!();
        println!("{}", format!("Step {} of {}", step, total).dark_grey());
        println!("{}", text);
    }
}
