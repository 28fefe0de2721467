use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn chefmate_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chefmate").expect("Failed to find chefmate binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_help() {
    chefmate_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cooking companion"));
}

#[test]
fn test_cli_favorites_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    chefmate_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "favorites",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorite recipes yet."));
}

#[test]
fn test_cli_favorites_add_list_remove() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    chefmate_cmd()
        .args([
            "--database-file",
            db_arg,
            "favorites",
            "add",
            "tomato-egg",
            "Tomato and Egg Stir-fry",
            "--category",
            "Home cooking",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    chefmate_cmd()
        .args(["--database-file", db_arg, "favorites", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomato and Egg Stir-fry"))
        .stdout(predicate::str::contains("Home cooking"));

    // duplicate add is rejected
    chefmate_cmd()
        .args([
            "--database-file",
            db_arg,
            "favorites",
            "add",
            "tomato-egg",
            "Tomato and Egg Stir-fry",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("already a favorite"));

    chefmate_cmd()
        .args([
            "--database-file",
            db_arg,
            "favorites",
            "remove",
            "tomato-egg",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    chefmate_cmd()
        .args(["--database-file", db_arg, "favorites", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorite recipes yet."));
}

#[test]
fn test_cli_basket_add_and_remove() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    chefmate_cmd()
        .args([
            "--database-file",
            db_arg,
            "basket",
            "add",
            "Tomatoes",
            "--quantity",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    chefmate_cmd()
        .args(["--database-file", db_arg, "basket", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomatoes"))
        .stdout(predicate::str::contains("(3)"));

    chefmate_cmd()
        .args(["--database-file", db_arg, "basket", "remove", "Tomatoes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 item(s)"));

    chefmate_cmd()
        .args(["--database-file", db_arg, "basket", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The shopping basket is empty."));
}

#[test]
fn test_cli_basket_clear_without_checked_items() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    chefmate_cmd()
        .args(["--database-file", db_arg, "basket", "add", "Eggs"])
        .assert()
        .success();

    // nothing is checked from the CLI, so clear drops nothing
    chefmate_cmd()
        .args(["--database-file", db_arg, "basket", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 0 checked item(s)."));
}

#[test]
fn test_cli_log_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    chefmate_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cooking sessions completed yet."))
        .stdout(predicate::str::contains("No cooking activity recorded yet."));
}

#[test]
fn test_cli_settings_defaults() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    chefmate_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Volume: 70"))
        .stdout(predicate::str::contains("Speech rate: 1"));
}

#[test]
fn test_cli_settings_set_and_persist() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    chefmate_cmd()
        .args([
            "--database-file",
            db_arg,
            "settings",
            "set",
            "--volume",
            "45",
            "--sound-alert",
            "false",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Volume: 45"))
        .stdout(predicate::str::contains("Sound alerts: off"));

    chefmate_cmd()
        .args(["--database-file", db_arg, "settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Volume: 45"));
}

#[test]
fn test_cli_settings_set_requires_a_flag() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    chefmate_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "settings",
            "set",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to change."));
}
