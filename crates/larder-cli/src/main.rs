//! Larder - meal planning from the terminal
//!
//! Front end for larder-core:
//! - Month-ahead meal plan persisted to a local SQLite slot
//! - Recipe browsing with highlighted ingredient quantities
//! - Step-by-step cooking, optionally driven by the companion remote
//! - A session grocery list

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use larder_core::companion::{loopback, CompanionLink};
use larder_core::picker::{RecipeListMode, Selection};
use larder_core::playback::{Advance, StepPlayback};
use larder_core::{
    paths, Calendar, Database, LarderConfig, LarderError, PlanStore, Preferences, Recipe,
    RecipeCatalog, SlotPlanRepository,
};

mod interactive;
mod output;

type LocalPlanStore = PlanStore<SlotPlanRepository<Preferences, Local>>;

/// Larder - Meal planner
#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Plan meals, browse recipes, and cook step by step", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.larder/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recipe catalog JSON file (defaults to ~/.larder/recipes.json)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the meal plan for the coming days
    Plan {
        /// Number of days to show (defaults to the configured horizon)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Add a recipe to a day of the plan
    Add {
        /// Recipe title or id; omit to pick from the list
        recipe: Option<String>,

        /// Day to plan for, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all recipes
    Recipes,

    /// Show a recipe's ingredients and method
    Show {
        /// Recipe title or id; omit to pick from the list
        recipe: Option<String>,
    },

    /// Walk through a recipe's steps
    Cook { recipe: String },

    /// Edit a grocery list for this session
    Groceries,

    /// Drive step playback from a simulated companion remote
    Remote {
        recipe: String,

        /// Mark the phone unreachable after this many presses
        #[arg(long)]
        offline_after: Option<usize>,
    },
}

fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let writer = match std::fs::File::create(log_dir.join("larder.log")) {
        Ok(file) => BoxMakeWriter::new(std::sync::Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(io::sink),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
}

fn open_plan_store(config: &LarderConfig) -> Result<LocalPlanStore> {
    let db_path = config.database_path();
    let db = Database::new(&db_path)
        .with_context(|| format!("Failed to open database at {:?}", db_path))?;
    let repository = SlotPlanRepository::new(Preferences::new(db), Calendar::local());
    Ok(PlanStore::activate(repository))
}

fn find_recipe<'a>(catalog: &'a RecipeCatalog, query: &str) -> Result<&'a Recipe> {
    catalog
        .find(query)
        .ok_or_else(|| {
            anyhow!(
                "No recipe matching {:?}. Run `larder recipes` to list them.",
                query
            )
        })
}

fn parse_day(value: &str) -> Result<NaiveDate, LarderError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| LarderError::InvalidDay(value.to_string()))
}

fn print_plan(store: &LocalPlanStore, days: u32) {
    let today = store.calendar().now();
    for day in store.upcoming_days(&today, days) {
        println!("{}", output::day_label(&day));
        let recipes = store.recipes_for(&day);
        if recipes.is_empty() {
            println!("  —");
        }
        for recipe in recipes {
            println!("  {}", recipe.title);
        }
    }
}

async fn run_remote(recipe: &Recipe, offline_after: Option<usize>) {
    let (transport, mut phone) = loopback::paired();
    let mut link = CompanionLink::new(transport);
    let state = link.activated().await;
    println!("Companion link: {:?}", state);

    let mut playback = StepPlayback::new(recipe.steps.clone());
    output::print_step(&playback);

    for press in 1..=recipe.steps.len() {
        if offline_after.is_some_and(|limit| press > limit) {
            phone.set_reachable(false);
        }

        if !link.send_next_step() {
            println!("Press {}: phone unreachable, nothing sent", press);
            continue;
        }
        if let Some(sent) = link.last_sent_at() {
            println!("Press {}: sent {}", press, sent.with_timezone(&Local).format("%H:%M:%S"));
        }

        while let Some(message) = phone.try_recv() {
            match playback.apply(&message) {
                Advance::Advanced(_) => output::print_step(&playback),
                Advance::Finished => println!("All steps complete"),
                Advance::Empty => {}
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LarderConfig::load_from_path(path)?,
        None => LarderConfig::load()?,
    };
    let catalog_path = cli.catalog.clone().unwrap_or_else(|| config.catalog_path());
    let catalog = RecipeCatalog::load_from_path(&catalog_path)?;
    tracing::info!(
        "Loaded {} recipe(s) from {:?}",
        catalog.recipes().len(),
        catalog_path
    );

    let needs_catalog = !matches!(
        cli.command,
        None | Some(Commands::Plan { .. }) | Some(Commands::Groceries)
    );
    if needs_catalog && catalog.is_empty() {
        println!("No recipes found at {:?}", catalog_path);
        println!("Add a JSON array of recipes there, or pass --catalog <file>.");
        return Ok(());
    }

    match cli.command {
        Some(Commands::Plan { days }) => {
            let store = open_plan_store(&config)?;
            print_plan(&store, days.unwrap_or(config.upcoming_days));
        }
        None => {
            let store = open_plan_store(&config)?;
            print_plan(&store, config.upcoming_days);
        }
        Some(Commands::Add { recipe, date }) => {
            let mut store = open_plan_store(&config)?;
            let day = match date {
                Some(date) => store.calendar().day(parse_day(&date)?),
                None => store.calendar().start_of_day(&store.calendar().now()),
            };

            match recipe {
                Some(query) => {
                    let recipe = find_recipe(&catalog, &query)?.clone();
                    store.add(recipe, &day);
                }
                None => {
                    let mut mode = RecipeListMode::pick(|r: &Recipe| store.add(r.clone(), &day));
                    let selection = interactive::choose_recipe(
                        catalog.recipes(),
                        &mut mode,
                        &mut io::stdin().lock(),
                    )?;
                    drop(mode);
                    if selection.is_none() {
                        println!("Nothing added");
                        return Ok(());
                    }
                }
            }

            if let Some(added) = store.recipes_for(&day).last() {
                println!("Planned {} for {}", added.title, output::day_label(&day));
            }
        }
        Some(Commands::Recipes) => {
            println!("All Recipes");
            output::print_recipe_list(catalog.recipes());
        }
        Some(Commands::Show { recipe }) => match recipe {
            Some(query) => output::print_recipe(find_recipe(&catalog, &query)?),
            None => {
                let mut mode = RecipeListMode::Browse;
                let selection = interactive::choose_recipe(
                    catalog.recipes(),
                    &mut mode,
                    &mut io::stdin().lock(),
                )?;
                if let Some(Selection::Navigate(recipe)) = selection {
                    println!();
                    output::print_recipe(&recipe);
                }
            }
        },
        Some(Commands::Cook { recipe }) => {
            let recipe = find_recipe(&catalog, &recipe)?;
            interactive::cook(recipe, &mut io::stdin().lock())?;
        }
        Some(Commands::Groceries) => {
            interactive::groceries(&mut io::stdin().lock())?;
        }
        Some(Commands::Remote {
            recipe,
            offline_after,
        }) => {
            let recipe = find_recipe(&catalog, &recipe)?;
            run_remote(recipe, offline_after).await;
        }
    }

    Ok(())
}
