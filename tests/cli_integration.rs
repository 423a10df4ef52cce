use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn encyclo(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("encyclo").unwrap();
    cmd.arg("--file")
        .arg(db)
        .arg("--user")
        .arg("alice")
        .arg("--password")
        .arg("hunter2");
    cmd
}

fn register(db: &Path) {
    encyclo(db).arg("register").assert().success();
}

#[test]
fn test_register_create_list() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("encyclopedia.json");

    register(&db);

    encyclo(&db)
        .args(["create", "Apple", "A crunchy fruit", "--category", "Fruit,Red"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Article created: Apple"));

    encyclo(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Apple"))
        .stdout(predicates::str::contains("Fruit, Red"));
}

#[test]
fn test_register_rejects_duplicate_username() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("encyclopedia.json");

    register(&db);

    encyclo(&db)
        .arg("register")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Username already taken"));
}

#[test]
fn test_wrong_password_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("encyclopedia.json");

    register(&db);

    let mut cmd = Command::cargo_bin("encyclo").unwrap();
    cmd.arg("--file")
        .arg(&db)
        .args(["--user", "alice", "--password", "wrong", "list"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Wrong password"));
}

#[test]
fn test_search_by_query_and_category() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("encyclopedia.json");

    register(&db);
    encyclo(&db)
        .args(["create", "Apple", "Crunchy", "--category", "Fruit"])
        .assert()
        .success();
    encyclo(&db)
        .args(["create", "Banana", "Bendy", "--category", "Fruit,Yellow"])
        .assert()
        .success();

    encyclo(&db)
        .args(["search", "--query", "app"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Apple"))
        .stdout(predicates::str::contains("Banana").not())
        .stdout(predicates::str::contains("1 article(s) found"));

    encyclo(&db)
        .args(["search", "--category", "Yellow"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Banana"))
        .stdout(predicates::str::contains("Apple").not());
}

#[test]
fn test_edit_rename_and_delete() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("encyclopedia.json");

    register(&db);
    encyclo(&db)
        .args(["create", "Apple", "Crunchy", "--category", "Fruit"])
        .assert()
        .success();

    encyclo(&db)
        .args(["edit", "Apple", "--title", "Apfel", "--content", "Knackig"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Article updated: Apfel"));

    encyclo(&db)
        .args(["view", "Apfel"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Knackig"))
        .stdout(predicates::str::contains("Fruit"));

    encyclo(&db)
        .args(["delete", "Apfel"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Article deleted: Apfel"));

    encyclo(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No articles found."));
}

#[test]
fn test_delete_missing_article_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("encyclopedia.json");

    register(&db);

    encyclo(&db)
        .args(["delete", "Ghost"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Article not found: Ghost"));
}

#[test]
fn test_image_attach_and_stats() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("encyclopedia.json");
    let image = temp_dir.path().join("apple.png");
    std::fs::write(&image, [0x89, 0x50, 0x4E, 0x47]).unwrap();

    register(&db);
    encyclo(&db)
        .args(["create", "Apple", "Crunchy", "--category", "A"])
        .arg("--image")
        .arg(&image)
        .assert()
        .success();
    encyclo(&db)
        .args(["create", "Banana", "Bendy", "--category", "A,B"])
        .assert()
        .success();

    encyclo(&db)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicates::str::contains("Articles:").and(predicates::str::contains("2")))
        .stdout(predicates::str::contains("With images:"))
        .stdout(predicates::str::contains("A: 2"))
        .stdout(predicates::str::contains("B: 1"));

    encyclo(&db)
        .args(["view", "Apple"])
        .assert()
        .success()
        .stdout(predicates::str::contains("4 bytes"));
}

#[test]
fn test_categories_lists_the_universe() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("encyclopedia.json");

    register(&db);
    encyclo(&db)
        .args(["create", "Banana", "Bendy", "--category", "Yellow,Fruit"])
        .assert()
        .success();

    encyclo(&db)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicates::str::contains("Fruit\nYellow"));
}

#[test]
fn test_accounts_are_isolated() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("encyclopedia.json");

    register(&db);
    encyclo(&db)
        .args(["create", "Apple", "Crunchy"])
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("encyclo").unwrap();
    cmd.arg("--file")
        .arg(&db)
        .args(["--user", "bob", "--password", "s3cret", "register"])
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("encyclo").unwrap();
    cmd.arg("--file")
        .arg(&db)
        .args(["--user", "bob", "--password", "s3cret", "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No articles found."));
}
