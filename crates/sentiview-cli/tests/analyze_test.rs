mod common;
use common::TestFixture;

use predicates::prelude::*;

#[test]
fn test_analyze_apple_json() {
    let fixture = TestFixture::new();
    let json = fixture.json(&["analyze", "Apple Inc"]);
    let content = &json["content"];

    assert_eq!(content["company_name"], "Apple Inc");
    assert_eq!(content["stock_code"], "AAPL");
    assert_eq!(content["sentiment"]["label"], "Positive");
    assert_eq!(content["sentiment"]["tone"], "positive");
    assert_eq!(content["confidence"]["percent"], 87);

    let counts: Vec<usize> = content["entities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["items"].as_array().unwrap().len())
        .collect();
    assert_eq!(counts, vec![2, 3, 3, 4]);
    assert_eq!(json["badge"]["level"], "success");
}

#[test]
fn test_analyze_google_is_neutral() {
    let fixture = TestFixture::new();
    let json = fixture.json(&["analyze", "Google"]);

    assert_eq!(json["content"]["stock_code"], "GOOGL");
    assert_eq!(json["content"]["sentiment"]["tone"], "neutral");
    assert_eq!(json["content"]["confidence"]["percent"], 74);
}

#[test]
fn test_analyze_plain_card() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["analyze", "Microsoft"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Microsoft"))
        .stdout(predicate::str::contains("92%"))
        .stdout(predicate::str::contains("Satya Nadella, Amy Hood"));
}

#[test]
fn test_analyze_compact_is_one_line() {
    let fixture = TestFixture::new();
    let output = fixture
        .command()
        .args(["analyze", "Google", "--compact"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("GOOGL"));
}

#[test]
fn test_analyze_unknown_company_fails() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .args(["analyze", "Initech"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Stock code for Initech not found.",
        ));
}

#[test]
fn test_analyze_waits_for_configured_latency() {
    let fixture = TestFixture::new();
    let started = std::time::Instant::now();
    fixture
        .command_with_latency(300)
        .args(["analyze", "Apple Inc"])
        .assert()
        .success();
    assert!(started.elapsed() >= std::time::Duration::from_millis(300));
}
