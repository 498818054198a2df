//! Line-based interactive sessions (grocery list, step playback, pickers)

use anyhow::Result;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

use larder_core::grocery::GroceryList;
use larder_core::picker::{RecipeListMode, Selection};
use larder_core::playback::{Advance, StepPlayback};
use larder_core::Recipe;

use crate::output;

/// Grocery list command parsed from one input line
#[derive(Debug, PartialEq, Eq)]
enum GroceryCommand<'a> {
    Add(&'a str),
    Toggle(usize),
    Remove(usize),
    List,
    Quit,
    Unknown,
}

fn parse_grocery_command(line: &str) -> GroceryCommand<'_> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let index = || rest.trim().parse::<usize>().ok().filter(|n| *n > 0);

    match verb {
        "add" | "a" => GroceryCommand::Add(rest),
        "toggle" | "t" => index().map_or(GroceryCommand::Unknown, GroceryCommand::Toggle),
        "remove" | "rm" => index().map_or(GroceryCommand::Unknown, GroceryCommand::Remove),
        "list" | "ls" | "" => GroceryCommand::List,
        "quit" | "q" | "exit" => GroceryCommand::Quit,
        _ => GroceryCommand::Unknown,
    }
}

fn print_groceries(list: &GroceryList) {
    if list.is_empty() {
        println!("  {}", "No items yet".dark_grey());
        return;
    }
    for (index, item) in list.items().iter().enumerate() {
        let mark = if item.completed { "✓" } else { " " };
        println!("  {:>2}. [{}] {}", index + 1, mark, item.name);
    }
}

/// Run the grocery list session until the user quits or input ends
pub fn groceries(input: &mut impl BufRead) -> Result<()> {
    let mut list = GroceryList::new();
    println!("Groceries: add <name>, toggle <n>, remove <n>, list, quit");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_grocery_command(&line) {
            GroceryCommand::Add(name) => {
                if list.add(name).is_none() {
                    println!("  Item name can't be empty");
                }
            }
            GroceryCommand::Toggle(n) => {
                let toggled = list.items().get(n - 1).map(|item| item.id);
                if !toggled.is_some_and(|id| list.toggle(id)) {
                    println!("  No item {}", n);
                }
            }
            GroceryCommand::Remove(n) => {
                let removed = list.items().get(n - 1).map(|item| item.id);
                if !removed.is_some_and(|id| list.remove(id)) {
                    println!("  No item {}", n);
                }
            }
            GroceryCommand::List => {}
            GroceryCommand::Quit => break,
            GroceryCommand::Unknown => {
                println!("  Unknown command");
                continue;
            }
        }
        print_groceries(&list);
    }
    Ok(())
}

/// Step through a recipe's method; Enter advances, `q` stops
pub fn cook(recipe: &Recipe, input: &mut impl BufRead) -> Result<()> {
    let mut playback = StepPlayback::new(recipe.steps.clone());
    if playback.position().is_none() {
        println!("{} has no steps", recipe.title);
        return Ok(());
    }

    println!("{}", format!("Cooking {}", recipe.title).bold());
    output::print_step(&playback);

    loop {
        let hint = if playback.on_last_step() { "done" } else { "next" };
        print!("[Enter: {}, q: stop] ", hint);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim() == "q" {
            break;
        }

        match playback.advance() {
            Advance::Advanced(_) => output::print_step(&playback),
            Advance::Finished | Advance::Empty => {
                println!("All steps complete");
                break;
            }
        }
    }
    Ok(())
}

/// Show a numbered recipe list and run `mode` on the chosen entry
///
/// Returns `None` when the user enters nothing or an invalid number.
pub fn choose_recipe(
    recipes: &[Recipe],
    mode: &mut RecipeListMode<'_>,
    input: &mut impl BufRead,
) -> Result<Option<Selection>> {
    output::print_recipe_list(recipes);
    if mode.shows_dismiss() {
        print!("Pick a recipe (Enter to cancel): ");
    } else {
        print!("Open a recipe: ");
    }
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let chosen = line
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| recipes.get(index));

    Ok(chosen.map(|recipe| mode.select(recipe)))
}
