//! Route guard and session exit

mod common;

use common::{TOKEN, offline};
use fin_auth::storage::storage_keys;
use fin_auth::{AuthGuard, GuardDecision, SessionExit};

use std::time::Duration;

use googletest::prelude::*;

#[test]
fn test_guard_allows_only_signed_in_users() {
    let (api, _, navigator) = offline(&[(storage_keys::TOKEN, TOKEN)]);
    let guard = AuthGuard::new(api.auth.clone());

    assert_that!(guard.check(), eq(GuardDecision::Allow));
    assert_that!(guard.enforce(navigator.as_ref()), eq(GuardDecision::Allow));
    assert_that!(navigator.redirects(), eq(0));

    api.auth.logout();

    assert_that!(guard.check(), eq(GuardDecision::RedirectToLogin));
    assert_that!(
        guard.enforce(navigator.as_ref()),
        eq(GuardDecision::RedirectToLogin)
    );
    assert_that!(navigator.redirects(), eq(1));
}

#[test]
fn test_logout_to_login_clears_and_navigates() {
    let (api, store, navigator) = offline(&[(storage_keys::TOKEN, TOKEN)]);
    let exit = SessionExit::new(api.auth.clone(), navigator.clone(), Duration::from_secs(2));

    exit.logout_to_login();

    assert_that!(store.is_empty(), eq(true));
    assert_that!(navigator.redirects(), eq(1));
}

#[tokio::test(start_paused = true)]
async fn test_scheduled_logout_runs_after_delay() {
    let (api, _, navigator) = offline(&[(storage_keys::TOKEN, TOKEN)]);
    let exit = SessionExit::new(api.auth.clone(), navigator.clone(), Duration::from_secs(2));

    let scheduled = exit.schedule_logout_to_login(None);

    tokio::time::advance(Duration::from_millis(1999)).await;
    tokio::task::yield_now().await;
    assert_that!(api.auth.is_authenticated(), eq(true));

    assert_that!(scheduled.wait().await, eq(true));
    assert_that!(api.auth.is_authenticated(), eq(false));
    assert_that!(navigator.redirects(), eq(1));
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_logout_never_runs() {
    let (api, _, navigator) = offline(&[(storage_keys::TOKEN, TOKEN)]);
    let exit = SessionExit::new(api.auth.clone(), navigator.clone(), Duration::from_secs(2));

    let scheduled = exit.schedule_logout_to_login(Some(Duration::from_millis(500)));
    scheduled.cancel();

    tokio::time::advance(Duration::from_secs(5)).await;
    tokio::task::yield_now().await;

    assert_that!(api.auth.is_authenticated(), eq(true));
    assert_that!(navigator.redirects(), eq(0));
}
