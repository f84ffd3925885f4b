//! API Integration Tests
//!
//! Each test spawns its own server on the in-memory store, so no external
//! services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, test_config, token_with_secret,
    TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

const ACTIVITY: &str = "/api/reactions/activity";
const REACTION_DATA: &str = "/api/reactiondata";

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["store"], "healthy");
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_listing_requires_token() {
    let server = TestServer::start().await.unwrap();
    let response = server.get(REACTION_DATA).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_token_without_upn_is_forbidden() {
    let server = TestServer::start().await.unwrap();
    let token = token_with_secret(integration_tests::TEST_JWT_SECRET, None).unwrap();

    let response = server.get_auth(REACTION_DATA, &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_token_with_foreign_secret_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let token = token_with_secret("some-other-secret", Some("user@contoso.com")).unwrap();

    let response = server.get_auth(REACTION_DATA, &token).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_activity_requires_token() {
    let server = TestServer::start().await.unwrap();
    let activity = ActivityFixture::unique("u1", None);

    let response = server.post(ACTIVITY, &activity.body(&["like"], &[])).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_empty_listing() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("user@contoso.com").unwrap();

    let response = server.get_auth(REACTION_DATA, &token).await.unwrap();
    let items: Vec<ReactionDataItem> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_added_reaction_is_listed() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("user@contoso.com").unwrap();
    let activity = ActivityFixture::new("msg1", "u1", Some("aad1"));

    let response = server
        .post_auth(ACTIVITY, &token, &activity.body(&["like"], &[]))
        .await
        .unwrap();
    let outcome: OutcomeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome, OutcomeResponse { added: 1, removed: 0 });

    let response = server.get_auth(REACTION_DATA, &token).await.unwrap();
    let items: Vec<ReactionDataItem> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        items,
        vec![ReactionDataItem {
            id: "msg1".to_string(),
            name: Some("aad1".to_string()),
        }]
    );
}

#[tokio::test]
async fn test_listing_is_ordered_by_directory_id() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("user@contoso.com").unwrap();

    for (user, aad) in [("u1", "zoe"), ("u2", "amy"), ("u3", "mo")] {
        let activity = ActivityFixture::unique(user, Some(aad));
        let response = server
            .post_auth(ACTIVITY, &token, &activity.body(&["like"], &[]))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get_auth(REACTION_DATA, &token).await.unwrap();
    let items: Vec<ReactionDataItem> = assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<_> = items.iter().filter_map(|i| i.name.as_deref()).collect();
    assert_eq!(names, ["amy", "mo", "zoe"]);
}

#[tokio::test]
async fn test_reaction_without_directory_id_lists_null_name() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("user@contoso.com").unwrap();
    let activity = ActivityFixture::unique("u1", None);

    server
        .post_auth(ACTIVITY, &token, &activity.body(&["like"], &[]))
        .await
        .unwrap();

    let response = server.get_auth(REACTION_DATA, &token).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!([{ "id": activity.reply_to_id, "name": null }]));
}

#[tokio::test]
async fn test_repeated_reaction_keeps_one_record() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("user@contoso.com").unwrap();
    let activity = ActivityFixture::unique("u1", Some("aad1"));

    for kind in ["like", "like", "heart"] {
        let response = server
            .post_auth(ACTIVITY, &token, &activity.body(&[kind], &[]))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get_auth(REACTION_DATA, &token).await.unwrap();
    let items: Vec<ReactionDataItem> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_removed_reaction_leaves_listing() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("user@contoso.com").unwrap();
    let activity = ActivityFixture::unique("u1", Some("aad1"));

    server
        .post_auth(ACTIVITY, &token, &activity.body(&["like"], &[]))
        .await
        .unwrap();

    let response = server
        .post_auth(ACTIVITY, &token, &activity.body(&[], &["like"]))
        .await
        .unwrap();
    let outcome: OutcomeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome, OutcomeResponse { added: 0, removed: 1 });

    let response = server.get_auth(REACTION_DATA, &token).await.unwrap();
    let items: Vec<ReactionDataItem> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_remove_without_stored_reaction_succeeds() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("user@contoso.com").unwrap();
    let activity = ActivityFixture::unique("u1", None);

    let response = server
        .post_auth(ACTIVITY, &token, &activity.body(&[], &["like"]))
        .await
        .unwrap();
    let outcome: OutcomeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome.removed, 1);
}

#[tokio::test]
async fn test_activity_without_reply_to_id_is_malformed() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("user@contoso.com").unwrap();
    let activity = ActivityFixture::new("", "u1", None);

    let response = server
        .post_auth(ACTIVITY, &token, &activity.body(&["like"], &[]))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "MALFORMED_KEY");
}

#[tokio::test]
async fn test_oversized_activity_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("user@contoso.com").unwrap();
    let activity = ActivityFixture::unique("u1", None);
    let kinds = vec!["like"; 51];

    let response = server
        .post_auth(ACTIVITY, &token, &activity.body(&kinds, &[]))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_json_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let token = server.token("user@contoso.com").unwrap();

    let response = server
        .post_auth(ACTIVITY, &token, &json!({ "reactionsAdded": "like" }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_BODY");
}

// ============================================================================
// Rate Limit Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limit_rejects_burst_overflow() {
    let config = test_config(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "1"),
    ])
    .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();
    let token = server.token("user@contoso.com").unwrap();

    let first = server.get_auth(REACTION_DATA, &token).await.unwrap();
    assert_status(first, StatusCode::OK).await.unwrap();

    let second = server.get_auth(REACTION_DATA, &token).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);

    // Health routes sit outside the limit
    let health = server.get("/health").await.unwrap();
    assert_status(health, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_rate_limit_is_shared_by_all_callers() {
    let config = test_config(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "1"),
    ])
    .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    // An unauthenticated request still spends the only token
    let anonymous = server.get(REACTION_DATA).await.unwrap();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let token = server.token("user@contoso.com").unwrap();
    let response = server.get_auth(REACTION_DATA, &token).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[tokio::test]
async fn test_postgres_backend_requires_database_url() {
    let err = test_config(&[("STORE_BACKEND", "postgres")]).unwrap_err();
    assert!(err.to_string().contains("DATABASE_URL"));
}

#[tokio::test]
async fn test_invalid_settings_are_rejected() {
    let err = test_config(&[("APP_ENV", "prod")]).unwrap_err();
    assert!(err.to_string().contains("APP_ENV"));

    let err = test_config(&[("RATE_LIMIT_BURST", "lots")]).unwrap_err();
    assert!(err.to_string().contains("RATE_LIMIT_BURST"));
}

#[tokio::test]
async fn test_zero_burst_fails_at_startup() {
    let config = test_config(&[("RATE_LIMIT_BURST", "0")]).unwrap();
    assert!(TestServer::start_with_config(config).await.is_err());
}
