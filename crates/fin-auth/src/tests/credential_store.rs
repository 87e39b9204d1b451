use crate::CredentialStore;
use crate::storage::storage_keys;
use crate::tests::seeded_store;

use googletest::prelude::*;

#[test]
fn given_plain_legacy_avatar_when_key_read_then_migrated_and_persisted() {
    let store = seeded_store(&[(storage_keys::USER_AVATAR_URL, "abc123")]);
    let credentials = CredentialStore::new(store.clone());

    assert_that!(credentials.user_avatar_key(), some(eq("abc123")));
    assert_that!(store.get(storage_keys::USER_AVATAR_KEY), some(eq("abc123")));
}

#[test]
fn given_url_legacy_avatar_when_key_read_then_none() {
    let store = seeded_store(&[(storage_keys::USER_AVATAR_URL, "https://cdn/x.png")]);
    let credentials = CredentialStore::new(store.clone());

    assert_that!(credentials.user_avatar_key(), none());
    assert_that!(store.get(storage_keys::USER_AVATAR_KEY), none());
}

#[test]
fn given_both_slots_when_key_read_then_key_slot_wins() {
    let store = seeded_store(&[
        (storage_keys::USER_AVATAR_KEY, "current"),
        (storage_keys::USER_AVATAR_URL, "legacy"),
    ]);
    let credentials = CredentialStore::new(store);

    assert_that!(credentials.user_avatar_key(), some(eq("current")));
}

#[test]
fn given_session_when_logout_then_every_slot_cleared_and_anonymous_published() {
    let store = seeded_store(&[
        (storage_keys::TOKEN, "tok"),
        (storage_keys::USER_NAME, "Bob"),
        (storage_keys::USER_EMAIL, "b@x.com"),
        (storage_keys::USER_AVATAR_KEY, "k1"),
        (storage_keys::USER_AVATAR_URL, "old"),
    ]);
    let credentials = CredentialStore::new(store.clone());
    assert_that!(credentials.session().snapshot().is_authenticated(), eq(true));

    credentials.logout();

    for key in storage_keys::ALL {
        assert_that!(store.get(key), none());
    }
    assert_that!(credentials.session().snapshot(), eq(&crate::Session::anonymous()));
}

#[test]
fn given_blank_avatar_key_when_written_then_slot_removed() {
    let store = seeded_store(&[(storage_keys::USER_AVATAR_KEY, "k1")]);
    let credentials = CredentialStore::new(store.clone());

    credentials.write_avatar_key(Some("")).unwrap();

    assert_that!(store.get(storage_keys::USER_AVATAR_KEY), none());
}

#[test]
fn given_previous_identity_when_established_then_avatar_slots_reset() {
    let store = seeded_store(&[
        (storage_keys::USER_AVATAR_KEY, "k-old"),
        (storage_keys::USER_AVATAR_URL, "legacy"),
    ]);
    let credentials = CredentialStore::new(store.clone());

    credentials
        .establish("tok", "Alice", "a@x.com", None)
        .unwrap();

    assert_that!(store.get(storage_keys::TOKEN), some(eq("tok")));
    assert_that!(store.get(storage_keys::USER_AVATAR_KEY), none());
    assert_that!(store.get(storage_keys::USER_AVATAR_URL), none());
}
