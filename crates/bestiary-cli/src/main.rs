//! Bestiary CLI - Animal catalog management
//!
//! Simple CLI for browsing and editing the Bestiary catalog over its HTTP API.

mod api;
mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input};

use api::{Animal, BestiaryClient};
use config::Config;

#[derive(Parser)]
#[command(name = "bestiary")]
#[command(about = "Bestiary CLI - Animal catalog management", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides the configured one)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// List animals
    List {
        /// Only animals whose name contains this (case-insensitive)
        #[arg(short, long)]
        name: Option<String>,
        /// Only animals living at least this many years
        #[arg(short, long)]
        min_lifespan: Option<f64>,
    },

    /// List the animals of a color
    Color {
        color: String,
    },

    /// Show one animal
    Show {
        color: String,
        id: i64,
    },

    /// Create an animal (prompts for fields unless --file is given)
    Create {
        color: String,
        /// JSON file with the animal
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Replace every field of an animal with the contents of a JSON file
    Update {
        color: String,
        id: i64,
        /// JSON file with the animal
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Delete an animal
    Delete {
        color: String,
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Upload an image and print its URL
    Upload {
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Store the API base URL
    SetUrl {
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let base_url = cli.url.clone().unwrap_or_else(|| config.base_url.clone());
    let client = BestiaryClient::new(&base_url);

    match cli.command {
        Commands::Config { action } => cmd_config(config, action, &client).await,
        Commands::List { name, min_lifespan } => {
            let animals = client.list(name.as_deref(), min_lifespan).await?;
            print_animals(&animals);
            Ok(())
        }
        Commands::Color { color } => {
            let animals = client.by_color(&color).await?;
            print_animals(&animals);
            Ok(())
        }
        Commands::Show { color, id } => {
            let animal = client.get(&color, id).await?;
            print_animal(&animal);
            Ok(())
        }
        Commands::Create { color, file } => cmd_create(&client, &color, file).await,
        Commands::Update { color, id, file } => {
            let animal = read_animal(&file)?;
            let updated = client.update(&color, id, &animal).await?;
            println!("{} Animal updated", "✓".green());
            print_animal(&updated);
            Ok(())
        }
        Commands::Delete { color, id, yes } => cmd_delete(&client, &color, id, yes).await,
        Commands::Upload { path } => {
            let url = client.upload(&path).await?;
            println!("{} Uploaded to {}", "✓".green(), url.cyan());
            Ok(())
        }
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_config(
    mut config: Config,
    action: Option<ConfigAction>,
    client: &BestiaryClient,
) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Base URL: {}", config.base_url);
            let reachable = client.health().await.unwrap_or(false);
            println!(
                "  API: {}",
                if reachable { "Reachable".green() } else { "Unreachable".red() }
            );
        }
        ConfigAction::SetUrl { url } => {
            config.set_base_url(&url);
            config.save()?;
            println!("{} Base URL saved to {:?}", "✓".green(), Config::config_path()?);
        }
    }

    Ok(())
}

async fn cmd_create(client: &BestiaryClient, color: &str, file: Option<PathBuf>) -> Result<()> {
    let animal = match file {
        Some(path) => read_animal(&path)?,
        None => prompt_animal()?,
    };

    let created = client.create(color, &animal).await?;
    println!("{} Animal created", "✓".green());
    print_animal(&created);

    Ok(())
}

async fn cmd_delete(client: &BestiaryClient, color: &str, id: i64, yes: bool) -> Result<()> {
    if !yes {
        let animal = client.get(color, id).await?;
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} (#{})?", animal.name, id))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    client.delete(color, id).await?;
    println!("{} Animal #{} deleted", "✓".green(), id);

    Ok(())
}

fn read_animal(path: &Path) -> Result<Animal> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid animal JSON in {:?}", path))
}

fn prompt_animal() -> Result<Animal> {
    let text = |prompt: &str| -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .context("Failed to read input")
    };
    let optional = |prompt: &str| -> Result<Option<String>> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;
        Ok(Some(value).filter(|v| !v.trim().is_empty()))
    };

    let name = text("Name")?;
    let scientific_name = optional("Scientific name (optional)")?;
    let habitat = text("Habitat")?;
    let diet = text("Diet")?;
    let description = text("Description")?;
    let lifespan: f64 = Input::new()
        .with_prompt("Lifespan (years)")
        .interact_text()
        .context("Failed to read input")?;
    if lifespan < 0.0 {
        bail!("Lifespan cannot be negative");
    }
    let fun_facts = split_fun_facts(&text("Fun facts (separated by ';')")?);
    let image_url = optional("Image URL (optional)")?;

    Ok(Animal {
        name,
        scientific_name,
        habitat,
        diet,
        description,
        lifespan,
        fun_facts,
        image_url,
        ..Default::default()
    })
}

fn split_fun_facts(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|fact| !fact.is_empty())
        .map(str::to_string)
        .collect()
}

fn print_animals(animals: &[Animal]) {
    if animals.is_empty() {
        println!("No animals found.");
        return;
    }

    println!("{}", format!("{} animals:", animals.len()).bold());
    for animal in animals {
        println!(
            "  {} {} [{}] {}",
            format!("#{}", animal.animal_id.unwrap_or_default()).dimmed(),
            animal.name.cyan().bold(),
            animal.color,
            truncate_string(&animal.description, 60).dimmed()
        );
    }
}

fn print_animal(animal: &Animal) {
    println!(
        "{} {}",
        animal.name.cyan().bold(),
        format!("#{}", animal.animal_id.unwrap_or_default()).dimmed()
    );
    if let Some(scientific_name) = &animal.scientific_name {
        println!("  {}", scientific_name.italic());
    }
    println!("  Color: {}", animal.color);
    println!("  Habitat: {}", animal.habitat);
    println!("  Diet: {}", animal.diet);
    println!("  Lifespan: {} years", animal.lifespan);
    println!("  {}", animal.description);
    for fact in &animal.fun_facts {
        println!("  • {}", fact);
    }
    if let Some(url) = &animal.image_url {
        println!("  Image: {}", url.dimmed());
    }
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}
