//! ChefMate CLI Application
//!
//! Command-line interface for the ChefMate voice-assisted cooking companion.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use chefmate_core::CompanionBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        api_url,
        command,
    } = Args::parse();

    let companion = CompanionBuilder::new()
        .with_database_path(database_file)
        .with_api_url(api_url)
        .build()
        .await
        .context("Failed to initialize companion")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(companion, renderer);

    info!("ChefMate started");

    match command {
        Some(Recipe { command }) => cli.handle_recipe_command(command).await,
        Some(Cook(args)) => cli.cook(args.into()).await,
        Some(Favorites { command }) => cli.handle_favorite_command(command).await,
        Some(Basket { command }) => cli.handle_basket_command(command).await,
        Some(Log) => cli.show_log().await,
        Some(Settings { command }) => cli.handle_settings_command(command).await,
        None => cli.list_recipes().await,
    }
}
