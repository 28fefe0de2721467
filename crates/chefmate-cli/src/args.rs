//! Command-line argument definitions using clap.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types via `From`, keeping the core free of CLI framework
//! concerns.

use std::path::PathBuf;

use chefmate_core::params::{AddBasketItem, AddFavorite, RecipeId, UpdateSettings};
use clap::{Args as ClapArgs, Parser, Subcommand};

/// Main command-line interface for the ChefMate cooking companion
///
/// ChefMate walks you through recipes step by step, answers cooking questions
/// through a conversational assistant, and keeps track of favorites, the
/// shopping basket, and your cooking history.
#[derive(Parser)]
#[command(version, about, name = "chefmate")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/chefmate/chefmate.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Base URL of the companion backend
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the ChefMate CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the recipe catalogue
    #[command(alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Cook a recipe interactively
    Cook(CookArgs),
    /// Manage favorite recipes
    #[command(alias = "f")]
    Favorites {
        #[command(subcommand)]
        command: FavoriteCommands,
    },
    /// Manage the shopping basket
    #[command(alias = "b")]
    Basket {
        #[command(subcommand)]
        command: BasketCommands,
    },
    /// Show the completion log and cooking frequency
    Log,
    /// Show or change user settings
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommands>,
    },
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// List all available recipes
    List,
    /// Show a recipe with all its steps
    Show(RecipeIdArgs),
}

#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// List favorite recipes
    List,
    /// Add a recipe to favorites
    Add(AddFavoriteArgs),
    /// Remove a recipe from favorites
    Remove(RecipeIdArgs),
}

#[derive(Subcommand)]
pub enum BasketCommands {
    /// List basket items
    List,
    /// Add an item to the basket
    Add(AddBasketArgs),
    /// Remove items from the basket by name
    Remove(RemoveBasketArgs),
    /// Drop every checked-off item
    Clear,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,
    /// Change one or more settings
    Set(SetSettingsArgs),
}

/// Identify a recipe by its identifier
#[derive(ClapArgs)]
pub struct RecipeIdArgs {
    /// Identifier of the recipe
    pub id: String,
}

impl From<RecipeIdArgs> for RecipeId {
    fn from(val: RecipeIdArgs) -> Self {
        RecipeId { id: val.id }
    }
}

/// Start an interactive cooking session
#[derive(ClapArgs)]
pub struct CookArgs {
    /// Identifier of the recipe to cook
    pub id: String,
}

impl From<CookArgs> for RecipeId {
    fn from(val: CookArgs) -> Self {
        RecipeId { id: val.id }
    }
}

/// Add a recipe to the favorites list
#[derive(ClapArgs)]
pub struct AddFavoriteArgs {
    /// Identifier of the recipe
    pub id: String,
    /// Display name of the recipe
    pub name: String,
    /// Category label
    #[arg(long)]
    pub category: Option<String>,
    /// Preparation time label, like "40min"
    #[arg(long)]
    pub time: Option<String>,
    /// Popularity label, like "500+"
    #[arg(long)]
    pub likes: Option<String>,
    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}

impl From<AddFavoriteArgs> for AddFavorite {
    fn from(val: AddFavoriteArgs) -> Self {
        AddFavorite {
            id: val.id,
            name: val.name,
            category: val.category,
            time: val.time,
            likes: val.likes,
            image: val.image,
        }
    }
}

/// Add an item to the shopping basket
#[derive(ClapArgs)]
pub struct AddBasketArgs {
    /// Ingredient or product name
    pub name: String,
    /// Quantity label, like "500g"
    #[arg(short, long)]
    pub quantity: Option<String>,
    /// Free-form note about the item
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<AddBasketArgs> for AddBasketItem {
    fn from(val: AddBasketArgs) -> Self {
        AddBasketItem {
            name: val.name,
            quantity: val.quantity,
            description: val.description,
        }
    }
}

/// Remove basket items by name
#[derive(ClapArgs)]
pub struct RemoveBasketArgs {
    /// Name of the item(s) to remove
    pub name: String,
}

/// Change user settings; omitted flags stay unchanged
#[derive(ClapArgs)]
pub struct SetSettingsArgs {
    /// Playback volume, 0 to 100
    #[arg(long)]
    pub volume: Option<u8>,
    /// Speech playback rate multiplier
    #[arg(long)]
    pub speech_rate: Option<f64>,
    /// Enable or disable push notifications
    #[arg(long)]
    pub push_notification: Option<bool>,
    /// Enable or disable sound alerts
    #[arg(long)]
    pub sound_alert: Option<bool>,
}

impl From<SetSettingsArgs> for UpdateSettings {
    fn from(val: SetSettingsArgs) -> Self {
        UpdateSettings {
            volume: val.volume,
            speech_rate: val.speech_rate,
            push_notification: val.push_notification,
            sound_alert: val.sound_alert,
        }
    }
}
