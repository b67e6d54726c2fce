//! Integration tests for a scripted run
//!
//! Each block below stands for one script invocation: globals are loaded
//! from disk, a helper runs, and the globals are saved back, the way a
//! host runner rebuilds its script context between requests.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::{Map, Value, json};
use tempfile::tempdir;

use ptf_application::{
    GlobalsRepository, ReplayController, RequestRewriter, ResponseValidator, RewriteRule,
    get_global_json, set_global_json,
};
use ptf_domain::{
    EndpointDescriptor, NextRequest, OutgoingRequest, REPLAY_STATE_KEY, ReceivedResponse,
    RequestBody, ReplayKey, ReplayState, SCOPE_HEADER,
};
use ptf_infrastructure::{
    CollectingReporter, FileGlobalsRepository, NextRequestSlot, SystemClock, TokioFileSystem,
};

const REWRITE_RULES_KEY: &str = "rewrite_rules";

fn repository() -> FileGlobalsRepository<TokioFileSystem> {
    FileGlobalsRepository::new(TokioFileSystem::new())
}

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

async fn trigger(path: &Path, target: &str, times: u32, name: &str) -> NextRequest {
    let repo = repository();
    let mut globals = repo.load(path).await.expect("load globals");
    let mut slot = NextRequestSlot::new();

    let next = ReplayController::new(&mut globals, &mut slot)
        .trigger_replay(target, times, name)
        .expect("trigger");
    assert_eq!(slot.take(), Some(next.clone()));

    repo.save(path, &globals).await.expect("save globals");
    next
}

#[tokio::test]
async fn test_replay_across_invocations() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("globals.json");

    let mut instructions = Vec::new();
    for _ in 0..4 {
        instructions.push(trigger(&path, "Accounts Options", 3, "Accounts Options").await);
    }

    let step = NextRequest::Step("Accounts Options".to_string());
    assert_eq!(
        instructions,
        vec![step.clone(), step.clone(), step, NextRequest::Proceed]
    );

    let globals = repository().load(&path).await.expect("load globals");
    let state =
        ReplayState::from_json(globals.get(REPLAY_STATE_KEY).expect("state")).expect("valid");
    assert!(state.is_empty());
}

#[tokio::test]
async fn test_interleaved_endpoints_keep_separate_counts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("globals.json");

    trigger(&path, "Users", 2, "Users").await;
    trigger(&path, "Roles", 1, "Roles").await;
    trigger(&path, "Users", 2, "Users").await;

    let globals = repository().load(&path).await.expect("load globals");
    let state =
        ReplayState::from_json(globals.get(REPLAY_STATE_KEY).expect("state")).expect("valid");
    assert_eq!(state.remaining(&ReplayKey::explicit("users")), Some(1));
    assert_eq!(state.remaining(&ReplayKey::explicit("roles")), Some(1));
}

#[tokio::test]
async fn test_rewrite_then_validate_query_endpoint() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("globals.json");
    let repo = repository();

    // Collection setup stores the rules once.
    {
        let mut globals = repo.load(&path).await.expect("load globals");
        let rules = vec![RewriteRule::new(
            vec!["/accounts/options".to_string()],
            fields(json!({"query": "main", "limit": 20})),
        )];
        set_global_json(&mut globals, REWRITE_RULES_KEY, &rules).expect("store rules");
        repo.save(&path, &globals).await.expect("save globals");
    }

    // Pre-request script.
    let globals = repo.load(&path).await.expect("load globals");
    let rules: Vec<RewriteRule> = get_global_json(&globals, REWRITE_RULES_KEY)
        .expect("decode rules")
        .expect("rules stored");

    let mut request = OutgoingRequest::new("https://api.test/v1/accounts/options")
        .with_header(SCOPE_HEADER, "short")
        .with_body(RequestBody::json(r#"{"page": 1}"#));
    assert!(RequestRewriter::new(rules).apply(&mut request).expect("rewrite"));

    // Test script.
    let response = ReceivedResponse::parse(
        200,
        r#"{"success": true, "accounts": {"options": [{"display": "Main", "value": 1}]}}"#,
    )
    .expect("json response");
    let endpoint = EndpointDescriptor::new("Accounts", "accounts");

    let mut reporter = CollectingReporter::new(&SystemClock::new());
    ResponseValidator::new(&mut reporter).validate_options_response(
        &request, &response, &endpoint, true,
    );
    let results = reporter.finish();

    assert!(results.all_passed(), "{:?}", results.failures().collect::<Vec<_>>());
    assert_eq!(
        results.results.iter().map(|r| r.label.as_str()).collect::<Vec<_>>(),
        vec![
            "If client request errors, has correct structure for it",
            "Accounts - short: Request data includes query",
            "Accounts - short: Success",
            "Accounts - short: Basic Structure",
            "Accounts - short: Options list",
            "Accounts - short: Option items",
        ]
    );
}

#[tokio::test]
async fn test_failed_request_reports_error_shape() {
    let response = ReceivedResponse::parse(
        400,
        r#"{"success": false, "status": 400, "error": "bad request"}"#,
    )
    .expect("json response");
    let request = OutgoingRequest::new("https://api.test/v1/users/options");
    let endpoint = EndpointDescriptor::new("Users", "users");

    let mut reporter = CollectingReporter::new(&SystemClock::new());
    ResponseValidator::new(&mut reporter).validate_options_response(
        &request, &response, &endpoint, false,
    );
    let results = reporter.finish();

    let failed: Vec<_> = results.failures().map(|r| r.label.as_str()).collect();
    assert_eq!(
        failed,
        vec![
            "If client request errors, has correct structure for it",
            "Users: Success",
            "Users: Basic Structure",
            "Users: Options list",
        ]
    );
}
