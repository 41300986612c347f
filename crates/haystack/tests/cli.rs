mod common;

use std::time::Duration;

use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use common::FixtureServer;
use predicates::prelude::*;
use serde_json::json;

const TAGS_PATH: &str = "/v1/tags/get";
const POSTS_PATH: &str = "/v1/posts/all";

fn tags_server(body: serde_json::Value) -> FixtureServer {
    FixtureServer::start(Router::new().route(TAGS_PATH, get(move || async move { Json(body) })))
}

fn posts_server(body: serde_json::Value) -> FixtureServer {
    FixtureServer::start(Router::new().route(POSTS_PATH, get(move || async move { Json(body) })))
}

#[test]
fn tag_search_without_terms_lists_every_tag_by_count() {
    let server = tags_server(json!({"rustlang": 4, "rust": 10}));

    server
        .cmd()
        .arg("--tag-search")
        .assert()
        .success()
        .stdout("\"rust\": 10\n\"rustlang\": 4\n");
}

#[test]
fn tag_search_filters_by_substring() {
    let server = tags_server(json!({"golang": "5", "goroutine": "3", "python": "1"}));

    server
        .cmd()
        .args(["-t", "Go"])
        .assert()
        .success()
        .stdout("\"golang\": 5\n\"goroutine\": 3\n");
}

#[test]
fn tag_search_json_output() {
    let server = tags_server(json!({"rust": 10}));

    let output = server
        .cmd()
        .args(["-t", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid json output");
    assert_eq!(parsed, json!([{"tag": "rust", "count": 10}]));
}

#[test]
fn post_search_renders_blocks() {
    let server = posts_server(json!([{
        "href": "https://www.rust-lang.org/",
        "description": "Rust Programming Language",
        "extended": "A language empowering everyone",
        "meta": "m",
        "hash": "h",
        "time": "2024-01-02T15:04:05Z",
        "shared": "yes",
        "toread": "no",
        "tags": "rust lang"
    }]));

    server.cmd().arg("rust").assert().success().stdout(
        "Title: Rust Programming Language\n\
         Description: A language empowering everyone\n\
         Date: Jan. 2, 2024 3:04pm\n\
         Tags: rust lang\n\
         URL: https://www.rust-lang.org/\n\
         \n",
    );
}

#[test]
fn post_search_prints_bare_host_href_unchanged() {
    let server = posts_server(json!([{
        "href": "https://example.com",
        "description": "Example",
        "time": "2024-01-02T15:04:05Z",
        "tags": "misc"
    }]));

    server
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::ends_with("URL: https://example.com\n\n"));
}

#[test]
fn post_search_with_invalid_href_still_renders_post() {
    let server = posts_server(json!([{
        "href": "not a url",
        "description": "Broken link",
        "extended": "",
        "meta": "m",
        "hash": "h",
        "time": "2024-01-02T15:04:05Z",
        "shared": "no",
        "toread": "no",
        "tags": "misc"
    }]));

    server
        .cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Broken link\n"))
        .stdout(predicate::str::contains("Tags: misc\n"))
        .stdout(predicate::str::contains("URL: \n"));
}

#[test]
fn post_search_sends_token_and_tags() {
    let router = Router::new().route(
        POSTS_PATH,
        get(|RawQuery(query): RawQuery| async move {
            let query = query.unwrap_or_default();
            if query.contains("auth_token=alice%3AABC") && query.contains("tag=rust&tag=cli") {
                (StatusCode::OK, Json(json!([])))
            } else {
                (StatusCode::UNAUTHORIZED, Json(json!({"error": query})))
            }
        }),
    );
    let server = FixtureServer::start(router);

    server
        .cmd()
        .env("PINBOARD_AUTH_TOKEN", "alice:ABC")
        .args(["rust", "cli"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn remote_failure_exits_with_runtime_error() {
    let server = FixtureServer::start(Router::new().route(
        POSTS_PATH,
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
    ));

    server
        .cmd()
        .arg("rust")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("503"));
}

#[test]
fn slow_remote_exits_with_timeout_error() {
    let server = FixtureServer::start(Router::new().route(
        TAGS_PATH,
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    ));

    server
        .cmd()
        .args(["-t", "--timeout", "200ms"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timed out"));
}

#[test]
fn unknown_flag_is_usage_error() {
    let server = tags_server(json!({}));

    server.cmd().arg("--bogus").assert().code(2);
}

#[test]
fn invalid_timeout_is_usage_error() {
    let server = tags_server(json!({}));

    server
        .cmd()
        .args(["-t", "--timeout", "soon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("soon"));
}

#[test]
fn compound_timeout_from_env_is_accepted() {
    let server = tags_server(json!({"rust": 10}));

    server
        .cmd()
        .env("PINBOARD_TIMEOUT", "1m30s")
        .arg("-t")
        .assert()
        .success()
        .stdout("\"rust\": 10\n");
}

#[test]
fn help_exits_with_usage_code() {
    let server = tags_server(json!({}));

    server
        .cmd()
        .arg("--help")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Pinboard"));
}
