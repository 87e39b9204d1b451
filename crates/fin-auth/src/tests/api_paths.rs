use crate::http::api_paths::{self, api_url, is_auth_excluded};

use googletest::prelude::*;

#[test]
fn given_base_with_trailing_slash_when_joined_then_single_slash() {
    assert_that!(
        api_url("http://host/api/", api_paths::LOGIN),
        eq("http://host/api/v1/auth/login")
    );
}

#[test]
fn given_path_without_leading_slash_when_joined_then_slash_added() {
    assert_that!(api_url("http://host/api", "v1/s3/upload"), eq("http://host/api/v1/s3/upload"));
}

#[test]
fn given_empty_base_when_joined_then_path_only() {
    assert_that!(api_url("", api_paths::PROFILE), eq("/v1/auth/profile"));
}

#[test]
fn given_auth_urls_when_checked_then_only_login_and_register_excluded() {
    assert_that!(is_auth_excluded("http://host/api/v1/auth/login"), eq(true));
    assert_that!(is_auth_excluded("http://host/api/v1/auth/register"), eq(true));
    assert_that!(is_auth_excluded("http://host/api/v1/auth/profile"), eq(false));
    assert_that!(is_auth_excluded("http://host/api/v1/auth/password"), eq(false));
}
