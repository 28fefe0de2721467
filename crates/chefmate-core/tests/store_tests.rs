//! Integration tests for the SQLite store.

use chefmate_core::models::{BasketItem, CompletionRecord, FavoriteRecipe, UserSettings};
use chefmate_core::Database;
use jiff::Timestamp;
use tempfile::TempDir;

fn open_test_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::new(temp_dir.path().join("test.db")).expect("Failed to open database");
    (temp_dir, db)
}

fn record_for_day(date_key: &str, recipe_id: &str) -> CompletionRecord {
    CompletionRecord {
        date_key: date_key.to_string(),
        recipe_id: recipe_id.to_string(),
        recipe_name: format!("Recipe {recipe_id}"),
        completed_at: Timestamp::now(),
    }
}

#[test]
fn schema_initialization_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("test.db");

    drop(Database::new(&path).expect("first open"));
    let db = Database::new(&path).expect("second open");
    assert!(db.list_completions().expect("query").is_empty());
}

#[test]
fn append_completion_updates_log_and_frequency() {
    let (_tmp, mut db) = open_test_db();

    let id = db
        .append_completion(&record_for_day("2026-08-29", "tomato-egg"))
        .expect("append");
    assert!(id > 0);

    let log = db.list_completions().expect("list");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].recipe_id, "tomato-egg");

    let frequency = db.cooking_frequency().expect("frequency");
    assert_eq!(frequency, vec![("2026-08-29".to_string(), 1)]);
}

#[test]
fn same_day_completions_accumulate() {
    let (_tmp, mut db) = open_test_db();

    db.append_completion(&record_for_day("2026-08-29", "a"))
        .expect("append");
    db.append_completion(&record_for_day("2026-08-29", "b"))
        .expect("append");
    db.append_completion(&record_for_day("2026-08-28", "c"))
        .expect("append");

    let frequency = db.cooking_frequency().expect("frequency");
    assert_eq!(
        frequency,
        vec![
            ("2026-08-29".to_string(), 2),
            ("2026-08-28".to_string(), 1)
        ]
    );
}

#[test]
fn completion_log_round_trips_timestamps() {
    let (_tmp, mut db) = open_test_db();
    let record = record_for_day("2026-08-29", "soup");
    db.append_completion(&record).expect("append");

    let log = db.list_completions().expect("list");
    assert_eq!(log[0].completed_at, record.completed_at);
}

fn favorite(id: &str) -> FavoriteRecipe {
    FavoriteRecipe {
        id: id.to_string(),
        name: format!("Recipe {id}"),
        image: String::new(),
        time: "30min".to_string(),
        likes: "500+".to_string(),
        category: "Home cooking".to_string(),
        added_at: Timestamp::now(),
    }
}

#[test]
fn favorites_add_remove_and_deduplicate() {
    let (_tmp, mut db) = open_test_db();

    assert!(db.add_favorite(favorite("a")).expect("add"));
    assert!(db.add_favorite(favorite("b")).expect("add"));
    assert!(!db.add_favorite(favorite("a")).expect("duplicate add"));
    assert_eq!(db.favorites().expect("list").len(), 2);

    assert!(db.remove_favorite("a").expect("remove"));
    assert!(!db.remove_favorite("a").expect("remove missing"));
    assert_eq!(db.favorites().expect("list").len(), 1);
}

#[test]
fn basket_operations() {
    let (_tmp, mut db) = open_test_db();

    db.add_basket_item(BasketItem::new("Tomatoes", "3"))
        .expect("add");
    db.add_basket_item(BasketItem {
        name: "Eggs".to_string(),
        description: "for the stir-fry".to_string(),
        quantity: "6".to_string(),
        checked: true,
    })
    .expect("add");

    assert_eq!(db.basket_items().expect("list").len(), 2);
    assert_eq!(db.clear_checked_items().expect("clear"), 1);
    assert_eq!(db.remove_basket_item("Tomatoes").expect("remove"), 1);
    assert!(db.basket_items().expect("list").is_empty());
}

#[test]
fn settings_default_then_persist() {
    let (_tmp, mut db) = open_test_db();

    assert_eq!(db.settings().expect("defaults"), UserSettings::default());

    let custom = UserSettings {
        volume: 55,
        speech_rate: 1.25,
        push_notification: false,
        sound_alert: true,
    };
    db.save_settings(&custom).expect("save");
    assert_eq!(db.settings().expect("reload"), custom);
}
