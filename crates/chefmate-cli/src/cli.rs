//! Command handlers bridging parsed arguments to the companion core.

use std::io::Write as _;

use anyhow::{Context, Result};
use chefmate_core::{
    load_recipe,
    models::{BasketItem, FavoriteRecipe},
    params::{AddBasketItem, AddFavorite, RecipeId, UpdateSettings},
    voice::AssistantBackend,
    BasketItems, Companion, Completions, CookingSession, Favorites, Feedback, FrequencyTable,
    NavOutcome, RecipeListings, RecipeSource, VoiceDispatcher,
};
use jiff::Timestamp;
use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::args::{BasketCommands, FavoriteCommands, RecipeCommands, SettingsCommands};
use crate::renderer::TerminalRenderer;

/// CLI command executor holding the companion and the output renderer.
pub struct Cli {
    companion: Companion,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(companion: Companion, renderer: TerminalRenderer) -> Self {
        Self {
            companion,
            renderer,
        }
    }

    pub async fn handle_recipe_command(&self, command: RecipeCommands) -> Result<()> {
        match command {
            RecipeCommands::List => self.list_recipes().await,
            RecipeCommands::Show(args) => self.show_recipe(args.into()).await,
        }
    }

    pub async fn list_recipes(&self) -> Result<()> {
        let source = self.companion.recipe_source();
        let listings = source.list().await.context("Failed to list recipes")?;
        self.renderer.render("# Recipes\n")?;
        self.renderer.render(&RecipeListings(listings).to_string())
    }

    pub async fn show_recipe(&self, params: RecipeId) -> Result<()> {
        let source = self.companion.recipe_source();
        let recipe = load_recipe(&source, &params.id)
            .await
            .context("Failed to load recipe")?;
        self.renderer.render(&recipe.to_string())
    }

    /// Interactive cooking session.
    ///
    /// Reads commands from stdin: `next`/`n`, `prev`/`p`, `seek <step>`,
    /// `say <words>` for the voice dispatch path, `show`, and `quit`.
    /// Completing the final step appends the record and ends the session.
    pub async fn cook(&self, params: RecipeId) -> Result<()> {
        let source = self.companion.recipe_source();
        let recipe = load_recipe(&source, &params.id)
            .await
            .context("Failed to load recipe")?;

        let dispatcher = VoiceDispatcher::new(self.companion.assistant());

        let mut session = CookingSession::new(recipe);
        self.renderer
            .render(&format!("# Cooking: {}\n", session.recipe().title))?;
        self.render_position(&session)?;
        println!("Commands: next (n), prev (p), seek <step>, say <words>, show, quit (q)");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush().ok();

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let input = line.trim();

            let finished = match input {
                "" => false,
                "quit" | "q" | "exit" => break,
                "next" | "n" => self.apply_outcome(session.advance(), &session).await?,
                "prev" | "p" => self.apply_outcome(session.retreat(), &session).await?,
                "show" => {
                    self.render_position(&session)?;
                    false
                }
                _ => {
                    if let Some(target) = input.strip_prefix("seek ") {
                        match target.trim().parse::<usize>() {
                            // steps are presented 1-based
                            Ok(step) if step > 0 => {
                                self.apply_outcome(session.seek(step - 1), &session).await?
                            }
                            _ => {
                                println!("Usage: seek <step number>");
                                false
                            }
                        }
                    } else if let Some(utterance) = input.strip_prefix("say ") {
                        self.dispatch_utterance(&dispatcher, &mut session, utterance.trim())
                            .await?
                    } else {
                        println!(
                            "Unknown command. Try: next, prev, seek <step>, say <words>, show, quit"
                        );
                        false
                    }
                }
            };

            if finished {
                break;
            }
        }

        Ok(())
    }

    async fn dispatch_utterance(
        &self,
        dispatcher: &VoiceDispatcher<chefmate_core::HttpAssistant>,
        session: &mut CookingSession,
        utterance: &str,
    ) -> Result<bool> {
        let mut finished = false;
        for feedback in dispatcher.dispatch(session, utterance).await {
            match feedback {
                Feedback::Heard(text) => println!("{text}"),
                Feedback::Toast(text) => self.renderer.render(&format!("*{text}*"))?,
                Feedback::Assistant(reply) => {
                    self.renderer
                        .render(&format!("**Assistant:** {}", reply.answer))?;
                    if let Some(url) = reply.audio_url {
                        // No audio playback on a terminal, clean up right away
                        let filename = url.rsplit('/').next().unwrap_or(&url).to_string();
                        if let Err(e) = self.companion.assistant().delete_audio(&filename).await {
                            debug!("Audio cleanup failed for {filename}: {e}");
                        }
                    }
                }
                Feedback::SessionFinished(record) => {
                    self.finish_session(record).await?;
                    finished = true;
                }
            }
        }
        if !finished && !session.is_completed() {
            self.render_position(session)?;
        }
        Ok(finished)
    }

    async fn apply_outcome(&self, outcome: NavOutcome, session: &CookingSession) -> Result<bool> {
        match outcome {
            NavOutcome::Moved { .. } => {
                self.render_position(session)?;
                Ok(false)
            }
            NavOutcome::EnteredStep { name, subtitle, .. } => {
                self.renderer
                    .render(&format!("*Entered {name}: {subtitle}*"))?;
                self.render_position(session)?;
                Ok(false)
            }
            NavOutcome::Finished(record) => {
                self.finish_session(record).await?;
                Ok(true)
            }
            NavOutcome::Ignored => Ok(false),
        }
    }

    async fn finish_session(&self, record: chefmate_core::CompletionRecord) -> Result<()> {
        let name = record.recipe_name.clone();
        self.companion
            .append_completion(record)
            .await
            .context("Failed to record completion")?;
        self.renderer
            .render(&format!("# All done!\n\nEnjoy your {name}."))
    }

    fn render_position(&self, session: &CookingSession) -> Result<()> {
        let (Some(step), Some(sub_step)) = (session.current_step(), session.current_sub_step())
        else {
            return Ok(());
        };
        self.renderer
            .render(&format!("## {}: {}\n{sub_step}", step.name, step.subtitle))
    }

    pub async fn handle_favorite_command(&self, command: FavoriteCommands) -> Result<()> {
        match command {
            FavoriteCommands::List => {
                let favorites = self.companion.favorites().await?;
                self.renderer.render("# Favorites\n")?;
                self.renderer.render(&Favorites(favorites).to_string())
            }
            FavoriteCommands::Add(args) => {
                let params: AddFavorite = args.into();
                let favorite = FavoriteRecipe {
                    id: params.id,
                    name: params.name,
                    image: params.image.unwrap_or_default(),
                    time: params.time.unwrap_or_default(),
                    likes: params.likes.unwrap_or_default(),
                    category: params.category.unwrap_or_default(),
                    added_at: Timestamp::now(),
                };
                let name = favorite.name.clone();
                if self.companion.add_favorite(favorite).await? {
                    self.renderer.render(&format!("Added **{name}** to favorites."))
                } else {
                    self.renderer.render(&format!("**{name}** is already a favorite."))
                }
            }
            FavoriteCommands::Remove(args) => {
                let params: RecipeId = args.into();
                if self.companion.remove_favorite(params.id.clone()).await? {
                    self.renderer
                        .render(&format!("Removed '{}' from favorites.", params.id))
                } else {
                    self.renderer
                        .render(&format!("'{}' was not in the favorites.", params.id))
                }
            }
        }
    }

    pub async fn handle_basket_command(&self, command: BasketCommands) -> Result<()> {
        match command {
            BasketCommands::List => {
                let items = self.companion.basket_items().await?;
                self.renderer.render("# Shopping Basket\n")?;
                self.renderer.render(&BasketItems(items).to_string())
            }
            BasketCommands::Add(args) => {
                let params: AddBasketItem = args.into();
                let item = BasketItem {
                    name: params.name.clone(),
                    description: params.description.unwrap_or_default(),
                    quantity: params.quantity.unwrap_or_default(),
                    checked: false,
                };
                self.companion.add_basket_item(item).await?;
                self.renderer
                    .render(&format!("Added **{}** to the basket.", params.name))
            }
            BasketCommands::Remove(args) => {
                let removed = self.companion.remove_basket_item(args.name.clone()).await?;
                if removed > 0 {
                    self.renderer
                        .render(&format!("Removed {removed} item(s) named '{}'.", args.name))
                } else {
                    self.renderer
                        .render(&format!("No item named '{}' in the basket.", args.name))
                }
            }
            BasketCommands::Clear => {
                let removed = self.companion.clear_checked_items().await?;
                self.renderer
                    .render(&format!("Cleared {removed} checked item(s)."))
            }
        }
    }

    pub async fn show_log(&self) -> Result<()> {
        let completions = self.companion.list_completions().await?;
        let frequency = self.companion.cooking_frequency().await?;

        self.renderer.render("# Cooking Log\n")?;
        self.renderer.render(&Completions(completions).to_string())?;
        self.renderer.render("\n## Frequency\n")?;
        self.renderer.render(&FrequencyTable(frequency).to_string())
    }

    pub async fn handle_settings_command(&self, command: Option<SettingsCommands>) -> Result<()> {
        match command {
            None | Some(SettingsCommands::Show) => self.show_settings().await,
            Some(SettingsCommands::Set(args)) => {
                let update: UpdateSettings = args.into();
                if update.is_empty() {
                    self.renderer.render(
                        "Nothing to change. Pass at least one of --volume, --speech-rate, --push-notification, --sound-alert.",
                    )?;
                    return Ok(());
                }
                let mut settings = self.companion.settings().await?;
                if let Some(volume) = update.volume {
                    settings.volume = volume.min(100);
                }
                if let Some(rate) = update.speech_rate {
                    settings.speech_rate = rate;
                }
                if let Some(push) = update.push_notification {
                    settings.push_notification = push;
                }
                if let Some(sound) = update.sound_alert {
                    settings.sound_alert = sound;
                }
                self.companion.save_settings(settings).await?;
                self.show_settings().await
            }
        }
    }

    async fn show_settings(&self) -> Result<()> {
        let settings = self.companion.settings().await?;
        self.renderer.render("# Settings\n")?;
        self.renderer.render(&settings.to_string())
    }
}
