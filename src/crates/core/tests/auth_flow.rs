mod common;

use common::{store_with, MockPlatform};
use factcheck_core::Session;

#[tokio::test]
async fn check_status_reads_signed_in_user() {
    let platform = MockPlatform::signed_in();
    let store = store_with(platform);

    store.check_auth_status().await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.auth, Session::signed_in(MockPlatform::user()));
    assert!(!snapshot.is_loading);
    assert_eq!(snapshot.error, None);
}

#[tokio::test]
async fn check_status_for_anonymous_user_has_no_identity() {
    let store = store_with(MockPlatform::new());

    store.check_auth_status().await;

    assert_eq!(store.snapshot().auth, Session::anonymous());
}

#[tokio::test]
async fn check_status_failure_keeps_previous_session() {
    let platform = MockPlatform::signed_in();
    let store = store_with(platform.clone());
    store.check_auth_status().await;

    platform.fail_status("session store offline");
    store.check_auth_status().await;

    let snapshot = store.snapshot();
    assert!(snapshot.auth.is_authenticated);
    assert_eq!(snapshot.error.as_deref(), Some("session store offline"));
}

#[tokio::test]
async fn sign_in_refreshes_session() {
    let platform = MockPlatform::new();
    let store = store_with(platform.clone());

    store.sign_in().await;

    let snapshot = store.snapshot();
    assert!(snapshot.auth.is_authenticated);
    assert_eq!(snapshot.auth.user, Some(MockPlatform::user()));
    assert!(!snapshot.is_loading);
    assert_eq!(platform.status_checks(), 1);
}

#[tokio::test]
async fn sign_in_failure_does_not_log_out() {
    let platform = MockPlatform::signed_in();
    let store = store_with(platform.clone());
    store.check_auth_status().await;

    platform.fail_sign_in("popup closed by user");
    store.sign_in().await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.error.as_deref(), Some("popup closed by user"));
    assert!(snapshot.auth.is_authenticated);
    assert!(!snapshot.is_loading);
}

#[tokio::test]
async fn sign_in_failure_without_message_uses_fallback() {
    let platform = MockPlatform::new();
    platform.fail_sign_in("");
    let store = store_with(platform);

    store.sign_in().await;

    assert_eq!(store.snapshot().error.as_deref(), Some("Sign in failed"));
}

#[tokio::test]
async fn sign_out_always_resets_to_anonymous() {
    let platform = MockPlatform::signed_in();
    let store = store_with(platform);
    store.check_auth_status().await;
    assert!(store.snapshot().auth.is_authenticated);

    store.sign_out().await;

    let snapshot = store.snapshot();
    assert_eq!(
        snapshot.auth,
        Session {
            user: None,
            is_authenticated: false,
        }
    );
    assert!(!snapshot.is_loading);

    store.sign_out().await;
    assert_eq!(store.snapshot().auth, Session::anonymous());
}

#[tokio::test]
async fn sign_out_failure_keeps_session() {
    let platform = MockPlatform::signed_in();
    let store = store_with(platform.clone());
    store.check_auth_status().await;

    platform.fail_sign_out("network down");
    store.sign_out().await;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.error.as_deref(), Some("network down"));
    assert!(snapshot.auth.is_authenticated);
}

#[tokio::test]
async fn clear_error_resets_only_the_error() {
    let platform = MockPlatform::signed_in();
    platform.fail_sign_out("network down");
    let store = store_with(platform);
    store.check_auth_status().await;
    store.sign_out().await;

    store.clear_error();
    let snapshot = store.settled().await;

    assert_eq!(snapshot.error, None);
    assert!(snapshot.auth.is_authenticated);
}
