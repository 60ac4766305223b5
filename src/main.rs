use clap::{ArgGroup, Parser, Subcommand};
use log::debug;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use reseptikirja::{catalog, store, AppConfig, ImportError, OutputFormat, Recipe};

#[derive(Parser)]
#[command(name = "reseptikirja")]
#[command(about = "Household recipe book: import pasted recipes and build shopping lists")]
#[command(version)]
struct Cli {
    /// Recipe store to use instead of the configured one
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse pasted recipe text and print the draft
    Import {
        /// File with the recipe text; reads stdin when omitted
        file: Option<PathBuf>,
        /// Add the recipe to the store (replaces one with the same name)
        #[arg(long)]
        save: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List stored recipes
    List {
        /// Only show recipes whose name contains this
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Build a shopping list from stored recipes
    #[command(group(ArgGroup::new("selection").required(true).args(["recipe", "all"])))]
    Shop {
        /// Recipe to include; repeat for more
        #[arg(short, long)]
        recipe: Vec<String>,
        /// Include every stored recipe
        #[arg(long)]
        all: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    let store_path = cli.store.unwrap_or(config.recipes_file);
    debug!("Using recipe store {}", store_path.display());

    match cli.command {
        Commands::Import { file, save, json } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let recipe = reseptikirja::parse_recipe_text(&text)?;
            if json || config.output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&recipe)?);
            } else {
                print!("{}", recipe.to_text());
            }

            if save {
                store::upsert_recipe(&store_path, &recipe)?;
                eprintln!("Saved '{}' to {}", recipe.name.trim(), store_path.display());
            }
        }
        Commands::List { search } => {
            let recipes = store::load_recipes(&store_path)?;
            for recipe in catalog::search(&recipes, search.as_deref().unwrap_or("")) {
                println!("{}", recipe.name);
            }
        }
        Commands::Shop { recipe, all, json } => {
            let recipes = store::load_recipes(&store_path)?;
            let selected: Vec<&Recipe> = if all {
                recipes.iter().collect()
            } else {
                catalog::select(&recipes, recipe.as_slice())?
            };
            if selected.is_empty() {
                return Err(ImportError::RecipeNotFound("no stored recipes".to_string()).into());
            }

            let items = reseptikirja::build_shopping_list(selected);
            if json || config.output == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for item in &items {
                    println!("{}", item);
                }
            }
        }
    }

    Ok(())
}
