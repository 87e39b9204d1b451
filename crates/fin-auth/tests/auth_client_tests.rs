//! Auth client against a wiremock server

mod common;

use common::{Harness, TOKEN};
use fin_auth::storage::storage_keys;
use fin_auth::{
    ApiContext, AuthError, FailureClassifier, MemoryStore, MessageOverrides, NoopNavigator,
    UpdateProfileRequest,
};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use googletest::prelude::*;
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// =========================================================================
// Login / Register / Logout
// =========================================================================

#[tokio::test]
async fn test_login_success_persists_identity_and_publishes() {
    let h = Harness::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({ "email": "a@x.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Alice",
            "token": "tok-a"
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = h
        .api
        .session()
        .subscribe_authenticated(move |authenticated| sink.lock().unwrap().push(authenticated));

    let response = h.api.auth.login("a@x.com", "pw").await.unwrap();

    assert_that!(response.name, eq("Alice"));
    assert_that!(h.get(storage_keys::TOKEN), some(eq("tok-a")));
    assert_that!(h.get(storage_keys::USER_NAME), some(eq("Alice")));
    assert_that!(h.get(storage_keys::USER_EMAIL), some(eq("a@x.com")));
    assert_that!(h.api.auth.is_authenticated(), eq(true));
    assert_that!(h.api.session().snapshot().user_name, some(eq("Alice")));
    assert_that!(*seen.lock().unwrap(), eq(&vec![false, true]));
}

#[tokio::test]
async fn test_register_success_establishes_session() {
    let h = Harness::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .and(body_json(json!({ "name": "Carol", "email": "c@x.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "Carol",
            "token": "tok-c"
        })))
        .mount(&h.server)
        .await;

    h.api.auth.register("Carol", "c@x.com", "pw").await.unwrap();

    assert_that!(h.api.auth.token(), some(eq("tok-c")));
    assert_that!(h.api.auth.user_email(), some(eq("c@x.com")));
}

#[tokio::test]
async fn test_login_logout_login_leaves_no_residue() {
    let h = Harness::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({ "email": "b@x.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Bob",
            "token": "tok-b",
            "avatarKey": "bob-face"
        })))
        .mount(&h.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({ "email": "a@x.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Alice",
            "token": "tok-a"
        })))
        .mount(&h.server)
        .await;

    h.api.auth.login("b@x.com", "pw").await.unwrap();
    assert_that!(h.api.auth.user_avatar_key(), some(eq("bob-face")));

    h.api.auth.logout();
    for key in storage_keys::ALL {
        assert_that!(h.get(key), none());
    }
    assert_that!(h.api.session().snapshot().is_authenticated(), eq(false));

    h.api.auth.login("a@x.com", "pw").await.unwrap();

    let session = h.api.session().snapshot();
    assert_that!(session.token, some(eq("tok-a")));
    assert_that!(session.user_name, some(eq("Alice")));
    assert_that!(session.user_email, some(eq("a@x.com")));
    assert_that!(session.user_avatar_key, none());
}

#[tokio::test]
async fn test_login_401_does_not_force_logout() {
    let h = Harness::signed_in().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials"
        })))
        .mount(&h.server)
        .await;

    let err = h.api.auth.login("b@x.com", "wrong").await.unwrap_err();

    assert_that!(err.status(), some(eq(401)));
    assert_that!(h.navigator.redirects(), eq(0));
    assert_that!(h.get(storage_keys::TOKEN), some(eq(TOKEN)));
    assert_that!(h.get(storage_keys::USER_NAME), some(eq("Bob")));

    let login = MessageOverrides::new()
        .unauthorized("Incorrect email or password")
        .not_found("User not found");
    assert_that!(
        FailureClassifier::message_for(&err, &login),
        eq("Incorrect email or password")
    );
}

#[tokio::test]
async fn test_login_without_token_leaves_storage_untouched() {
    let h = Harness::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Alice" })))
        .mount(&h.server)
        .await;

    h.api.auth.login("a@x.com", "pw").await.unwrap();

    assert_that!(h.api.auth.is_authenticated(), eq(false));
    assert_that!(h.store.is_empty(), eq(true));
}

#[tokio::test]
async fn test_login_null_token_leaves_session_unchanged() {
    let h = Harness::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "name": "Alice", "token": null })),
        )
        .mount(&h.server)
        .await;

    let response = h.api.auth.login("a@x.com", "pw").await.unwrap();

    assert_that!(response.establishes_session(), eq(false));
    assert_that!(h.api.auth.is_authenticated(), eq(false));
    assert_that!(h.store.is_empty(), eq(true));
}

// =========================================================================
// Authenticated requests
// =========================================================================

#[tokio::test]
async fn test_profile_request_carries_bearer_token() {
    let h = Harness::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/profile"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "name": "Bob", "email": "b@x.com"
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    h.api.auth.get_profile().await.unwrap();
}

#[tokio::test]
async fn test_profile_401_forces_logout_and_redirect_once() {
    let h = Harness::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&h.server)
        .await;

    let err = h.api.auth.get_profile().await.unwrap_err();

    assert_that!(FailureClassifier::is_unauthorized_error(&err), eq(true));
    assert_that!(h.navigator.redirects(), eq(1));
    assert_that!(h.api.auth.is_authenticated(), eq(false));
    assert_that!(h.get(storage_keys::USER_NAME), none());
    assert_that!(h.api.session().snapshot().is_authenticated(), eq(false));
}

#[tokio::test]
async fn test_password_403_forces_logout() {
    let h = Harness::signed_in().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/auth/password"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&h.server)
        .await;

    let err = h
        .api
        .auth
        .change_password("old", "new")
        .await
        .unwrap_err();

    assert_that!(err.status(), some(eq(403)));
    assert_that!(h.navigator.redirects(), eq(1));
    assert_that!(h.api.auth.is_authenticated(), eq(false));
}

#[tokio::test]
async fn test_server_error_keeps_session_and_body() {
    let h = Harness::signed_in().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/profile"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "db down" })))
        .mount(&h.server)
        .await;

    let err = h.api.auth.get_profile().await.unwrap_err();
    let failure = err.failure().unwrap();

    assert_that!(failure.status, some(eq(500)));
    assert_that!(failure.body, some(eq(&json!({ "error": "db down" }))));
    assert_that!(h.navigator.redirects(), eq(0));
    assert_that!(h.api.auth.is_authenticated(), eq(true));
}

#[tokio::test]
async fn test_unauthenticated_calls_fail_without_network() {
    let h = Harness::start().await;

    let results = [
        h.api
            .auth
            .update_profile(&UpdateProfileRequest::new().name("Alice"))
            .await
            .map(|_| ()),
        h.api.auth.get_profile().await.map(|_| ()),
        h.api.auth.update_avatar_key("k1").await.map(|_| ()),
        h.api.auth.change_password("old", "new").await.map(|_| ()),
    ];

    for result in results {
        assert!(matches!(result, Err(AuthError::NotAuthenticated { .. })));
    }
    assert_that!(h.requests_received().await, eq(0));
}

#[tokio::test]
async fn test_unreachable_server_reports_no_connection() {
    // Port 9 (discard) is not listening on the test host
    let api = ApiContext::new(
        "http://127.0.0.1:9/api",
        Duration::from_secs(2),
        Arc::new(MemoryStore::new()),
        Arc::new(NoopNavigator),
    )
    .unwrap();

    let err = api.auth.login("a@x.com", "pw").await.unwrap_err();

    assert_that!(err.status(), some(eq(0)));
    assert_that!(
        FailureClassifier::message_for(&err, &MessageOverrides::new().network_error("Offline")),
        eq("Offline")
    );
}

// =========================================================================
// Profile
// =========================================================================

#[tokio::test]
async fn test_update_profile_name_keeps_email() {
    let h = Harness::signed_in().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/auth/profile"))
        .and(body_json(json!({ "name": "Alice" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Alice" })))
        .mount(&h.server)
        .await;

    h.api
        .auth
        .update_profile(&UpdateProfileRequest::new().name("Alice"))
        .await
        .unwrap();

    assert_that!(h.get(storage_keys::USER_NAME), some(eq("Alice")));
    assert_that!(h.get(storage_keys::USER_EMAIL), some(eq("b@x.com")));
    assert_that!(h.api.session().snapshot().user_name, some(eq("Alice")));
}

#[tokio::test]
async fn test_update_profile_empty_body_applies_request() {
    let h = Harness::signed_in().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/auth/profile"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&h.server)
        .await;

    let response = h
        .api
        .auth
        .update_profile(&UpdateProfileRequest::new().email("new@x.com"))
        .await
        .unwrap();

    assert_that!(response.email, some(eq("new@x.com")));
    assert_that!(h.get(storage_keys::USER_EMAIL), some(eq("new@x.com")));
    assert_that!(h.get(storage_keys::USER_NAME), some(eq("Bob")));
}

#[tokio::test]
async fn test_update_profile_null_body_applies_request() {
    let h = Harness::signed_in().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/auth/profile"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("null"),
        )
        .mount(&h.server)
        .await;

    let response = h
        .api
        .auth
        .update_profile(&UpdateProfileRequest::new().name("Alice"))
        .await
        .unwrap();

    assert_that!(response.name, some(eq("Alice")));
    assert_that!(h.get(storage_keys::USER_NAME), some(eq("Alice")));
    assert_that!(h.api.session().snapshot().user_name, some(eq("Alice")));
}

#[tokio::test]
async fn test_update_profile_explicit_null_avatar_clears_key() {
    let h = Harness::with_entries(&[
        (storage_keys::TOKEN, TOKEN),
        (storage_keys::USER_NAME, "Bob"),
        (storage_keys::USER_AVATAR_KEY, "k1"),
    ])
    .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Bob",
            "avatarKey": null
        })))
        .mount(&h.server)
        .await;

    h.api
        .auth
        .update_profile(&UpdateProfileRequest::new().name("Bob"))
        .await
        .unwrap();

    assert_that!(h.get(storage_keys::USER_AVATAR_KEY), none());
}

#[tokio::test]
async fn test_update_profile_absent_avatar_keeps_key() {
    let h = Harness::with_entries(&[
        (storage_keys::TOKEN, TOKEN),
        (storage_keys::USER_AVATAR_KEY, "k1"),
    ])
    .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Bob" })))
        .mount(&h.server)
        .await;

    h.api
        .auth
        .update_profile(&UpdateProfileRequest::new().name("Bob"))
        .await
        .unwrap();

    assert_that!(h.get(storage_keys::USER_AVATAR_KEY), some(eq("k1")));
}

#[tokio::test]
async fn test_get_profile_overwrites_identity() {
    let h = Harness::with_entries(&[
        (storage_keys::TOKEN, TOKEN),
        (storage_keys::USER_NAME, "Old"),
        (storage_keys::USER_EMAIL, "old@x.com"),
        (storage_keys::USER_AVATAR_KEY, "stale"),
    ])
    .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-1", "name": "Bob", "email": "b@x.com"
        })))
        .mount(&h.server)
        .await;

    let profile = h.api.auth.get_profile().await.unwrap();

    assert_that!(profile.id.to_string(), eq("u-1"));
    assert_that!(h.get(storage_keys::USER_NAME), some(eq("Bob")));
    assert_that!(h.get(storage_keys::USER_EMAIL), some(eq("b@x.com")));
    assert_that!(h.get(storage_keys::USER_AVATAR_KEY), none());
    assert_that!(h.api.session().snapshot().user_avatar_key, none());
}

#[tokio::test]
async fn test_update_avatar_key_mirrors_response() {
    let h = Harness::signed_in().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/auth/profile/avatar"))
        .and(body_json(json!({ "avatarKey": "k2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "avatarKey": "k2" })))
        .mount(&h.server)
        .await;

    h.api.auth.update_avatar_key("k2").await.unwrap();

    assert_that!(h.get(storage_keys::USER_AVATAR_KEY), some(eq("k2")));
    assert_that!(h.api.session().snapshot().visible_avatar_key(), some(eq("k2")));
}

#[tokio::test]
async fn test_change_password_leaves_local_state() {
    let h = Harness::signed_in().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/auth/password"))
        .and(body_json(json!({ "currentPassword": "old", "newPassword": "new" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Password updated" })))
        .mount(&h.server)
        .await;

    let before = h.api.session().snapshot();
    let response = h.api.auth.change_password("old", "new").await.unwrap();

    assert_that!(response.message, some(eq("Password updated")));
    assert_that!(h.api.session().snapshot(), eq(&before));
}

#[tokio::test]
async fn test_set_user_avatar_key_resyncs_session() {
    let h = Harness::signed_in().await;

    h.api.auth.set_user_avatar_key(Some("k3")).unwrap();
    assert_that!(h.api.session().snapshot().user_avatar_key, some(eq("k3")));

    h.api.auth.set_user_avatar_key(None).unwrap();
    assert_that!(h.api.session().snapshot().user_avatar_key, none());
    assert_that!(h.get(storage_keys::USER_AVATAR_KEY), none());
}

#[tokio::test]
async fn test_legacy_avatar_migrated_on_read() {
    let h = Harness::with_entries(&[
        (storage_keys::TOKEN, TOKEN),
        (storage_keys::USER_AVATAR_URL, "abc123"),
    ])
    .await;

    assert_that!(h.api.auth.user_avatar_key(), some(eq("abc123")));
    assert_that!(h.get(storage_keys::USER_AVATAR_KEY), some(eq("abc123")));
}
