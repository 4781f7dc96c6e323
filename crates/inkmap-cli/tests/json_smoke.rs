use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture() -> PathBuf {
    let path = repo_root().join("fixtures").join("records").join("basic.json");
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

#[test]
fn cli_prints_stats_for_fixture_records() {
    let exe = assert_cmd::cargo_bin!("inkmap-cli");
    let assert = Command::new(exe)
        .args(["stats", fixture().to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let stats: serde_json::Value = serde_json::from_str(stdout.trim()).expect("stats JSON");
    assert_eq!(stats["totalBooks"], 6);
    assert_eq!(stats["totalCountries"], 5);
    assert_eq!(stats["countries"][0], "JP");
}

#[test]
fn cli_layout_places_every_fixture_country() {
    let exe = assert_cmd::cargo_bin!("inkmap-cli");
    let assert = Command::new(exe)
        .args(["layout", "--pretty", fixture().to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let layout: serde_json::Value = serde_json::from_str(stdout.trim()).expect("layout JSON");
    let clusters = layout["clusters"].as_array().expect("clusters");
    assert_eq!(clusters.len(), 5);
    for cluster in clusters {
        assert!(cluster["center"]["x"].is_number());
        assert!(cluster["items"].as_array().is_some_and(|v| !v.is_empty()));
    }
}

#[test]
fn cli_layout_honors_config_overrides() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config_path = tmp.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "worldMap": { "itemWidth": 10, "itemHeight": 15 } }"#,
    )
    .expect("write config");

    let exe = assert_cmd::cargo_bin!("inkmap-cli");
    let assert = Command::new(exe)
        .args([
            "layout",
            "--config",
            config_path.to_string_lossy().as_ref(),
            fixture().to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let layout: serde_json::Value = serde_json::from_str(stdout.trim()).expect("layout JSON");
    assert_eq!(layout["item_width"], 10.0);
    assert_eq!(layout["item_height"], 15.0);
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    let exe = assert_cmd::cargo_bin!("inkmap-cli");
    Command::new(exe)
        .args(["stats", "--bogus"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn cli_group_respects_lang() {
    let exe = assert_cmd::cargo_bin!("inkmap-cli");
    let assert = Command::new(exe)
        .args(["group", "--lang", "zh", fixture().to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let model: serde_json::Value = serde_json::from_str(stdout.trim()).expect("model JSON");
    assert_eq!(model["countries"][0]["code"], "JP");
    assert_eq!(model["countries"][0]["name"], "日本");
}
