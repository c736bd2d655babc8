use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tweetql_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("tweetql"))
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    tweetql_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL server"));
}

#[test]
fn test_version() {
    tweetql_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tweetql"));
}

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("type Tweet"))
        .stdout(predicate::str::contains("allMovies: [Movie!]!"));
}

// =============================================================================
// Init
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    let content = std::fs::read_to_string(temp_dir.path().join(".tweetql.yml")).unwrap();
    assert!(content.contains("port: 4000"));
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    tweetql_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_broken_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(".tweetql.yml"), "server:\n  port: not-a-number\n").unwrap();

    tweetql_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

// =============================================================================
// Query / Mutate
// =============================================================================

#[test]
fn test_query_tweet_with_author() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .args(["query", r#"{ tweet(id: "1") { text author { fullName } } }"#])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"first\""))
        .stdout(predicate::str::contains("kyeongseo kang"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .args([
            "query",
            "query One($id: ID!) { tweet(id: $id) { text } }",
            "--variables",
            r#"{"id": "2"}"#,
        ])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"second\""));
}

#[test]
fn test_mutate_post_tweet() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .args(["mutate", r#"postTweet(text: "hi", userId: "1") { id text }"#])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hi\""));
}

#[test]
fn test_mutate_post_tweet_unknown_user_is_null() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .args(["mutate", r#"postTweet(text: "hi", userId: "999") { id }"#])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"postTweet\": null"));
}

#[test]
fn test_mutate_delete_tweet() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .args(["mutate", r#"deleteTweet(id: "1")"#])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"deleteTweet\": true"));
}
