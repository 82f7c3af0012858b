mod common;

use common::{login_form, profile, sign_up_form, FakeApi, Harness};
use jobly_web::{
    api::JoblyApi,
    components::composite::profile_form::ProfileFormData,
    router::Route,
    session::AuthState,
    shell::restore_session,
    storage::{KeyValueStore, SessionStore},
};
use yew_router::Routable;

#[tokio::test]
async fn test_sign_up_acquires_token_then_loads_profile() -> anyhow::Result<()> {
    let harness = Harness::new(FakeApi::issuing("abc123"));

    harness.shell.sign_up(sign_up_form("alice", "pw")).await?;

    let state = harness.state();
    assert_eq!(state.username(), Some("alice"));
    assert_eq!(state.token(), Some("abc123"));
    assert_eq!(state.user(), None, "profile arrives in a second step");
    assert_eq!(harness.store().token().as_deref(), Some("abc123"));
    assert_eq!(harness.storage.get("currentUser"), None);
    assert_eq!(harness.api.token().as_deref(), Some("abc123"));

    harness.settle().await;

    let state = harness.state();
    assert_eq!(state.user(), Some(&profile("alice")));
    assert_eq!(state.token(), Some("abc123"));
    let stored = harness.store().load()?.expect("session is persisted");
    assert_eq!(stored.user, profile("alice"));
    assert_eq!(stored.token, "abc123");
    Ok(())
}

#[tokio::test]
async fn test_duplicate_sign_up_is_an_auth_error() -> anyhow::Result<()> {
    let api = FakeApi::issuing("abc123").with_user(profile("alice"), "pw");
    let harness = Harness::new(api);

    let error = harness
        .shell
        .sign_up(sign_up_form("alice", "other"))
        .await
        .expect_err("username is taken");

    assert!(error.is_auth());
    assert_eq!(error.to_string(), "Duplicate username: alice");
    assert_eq!(harness.state(), AuthState::Anonymous);
    assert_eq!(harness.store().token(), None);
    Ok(())
}

#[tokio::test]
async fn test_login_with_wrong_password_keeps_visitor_anonymous() -> anyhow::Result<()> {
    let api = FakeApi::issuing("abc123").with_user(profile("alice"), "pw");
    let harness = Harness::new(api);

    let result = harness.shell.log_in(login_form("alice", "wrong")).await;

    assert!(result.is_err_and(|error| error.is_auth()));
    assert_eq!(harness.state(), AuthState::Anonymous);
    assert_eq!(harness.api.token(), None);
    assert!(!harness.store().has_leftovers());
    Ok(())
}

#[tokio::test]
async fn test_sign_out_clears_memory_storage_and_client() -> anyhow::Result<()> {
    let api = FakeApi::issuing("abc123").with_user(profile("alice"), "pw");
    let harness = Harness::new(api);
    harness.shell.log_in(login_form("alice", "pw")).await?;
    harness.settle().await;
    assert!(harness.state().user().is_some());

    let target = harness.shell.sign_out();

    assert_eq!(target, Route::Home);
    assert_eq!(target.to_path(), "/");
    let state = harness.state();
    assert_eq!(state, AuthState::Anonymous);
    assert_eq!(state.username(), None);
    assert_eq!(state.token(), None);
    assert_eq!(harness.store().load()?, None);
    assert!(!harness.store().has_leftovers());
    assert_eq!(harness.api.token(), None);
    assert!(harness.api.calls().contains(&"sign_out".to_owned()));
    Ok(())
}

#[tokio::test]
async fn test_apply_to_job_refetches_the_user() -> anyhow::Result<()> {
    let api = FakeApi::issuing("abc123").with_user(profile("alice"), "pw");
    let harness = Harness::new(api);
    harness.shell.log_in(login_form("alice", "pw")).await?;
    harness.settle().await;
    harness.api.clear_calls();

    let user = harness.shell.update_job("alice", 42).await?;

    assert_eq!(harness.api.calls(), vec!["apply alice 42", "get_user alice"]);
    assert!(user.has_applied(42));
    assert_eq!(harness.state().user(), Some(&user));
    assert_eq!(harness.store().load()?.map(|session| session.user), Some(user));
    Ok(())
}

#[tokio::test]
async fn test_update_user_replaces_and_persists_profile() -> anyhow::Result<()> {
    let api = FakeApi::issuing("abc123").with_user(profile("alice"), "pw");
    let harness = Harness::new(api);
    harness.shell.log_in(login_form("alice", "pw")).await?;
    harness.settle().await;

    let mut form = ProfileFormData::from(&profile("alice"));
    form.first_name = "Al".to_owned();
    let user = harness.shell.update_user(form).await?;

    assert_eq!(user.first_name, "Al");
    assert_eq!(harness.state().user().map(|user| user.first_name.as_str()), Some("Al"));
    let stored = harness.store().load()?.expect("session is persisted");
    assert_eq!(stored.user.first_name, "Al");
    Ok(())
}

#[tokio::test]
async fn test_update_user_resolving_after_sign_out_is_not_persisted() -> anyhow::Result<()> {
    let api = FakeApi::issuing("abc123").with_user(profile("alice"), "pw");
    let harness = Harness::new(api);
    harness.shell.log_in(login_form("alice", "pw")).await?;
    harness.settle().await;
    let shell = harness.shell.clone();
    harness.api.while_in_flight(move || {
        shell.sign_out();
    });

    let mut form = ProfileFormData::from(&profile("alice"));
    form.first_name = "Al".to_owned();
    let user = harness.shell.update_user(form).await?;

    assert_eq!(user.first_name, "Al");
    assert_eq!(harness.state(), AuthState::Anonymous);
    assert_eq!(harness.storage.get("currentUser"), None);
    assert_eq!(harness.storage.get("token"), None);
    Ok(())
}

#[tokio::test]
async fn test_update_user_started_before_sign_out_is_not_persisted() -> anyhow::Result<()> {
    let api = FakeApi::issuing("abc123").with_user(profile("alice"), "pw");
    let harness = Harness::new(api);
    harness.shell.log_in(login_form("alice", "pw")).await?;
    harness.settle().await;

    let update = harness
        .shell
        .update_user(ProfileFormData::from(&profile("alice")));
    harness.shell.sign_out();
    update.await?;

    assert_eq!(harness.state(), AuthState::Anonymous);
    assert_eq!(harness.storage.get("currentUser"), None);
    Ok(())
}

#[tokio::test]
async fn test_job_application_resolving_after_sign_out_is_not_persisted() -> anyhow::Result<()> {
    let api = FakeApi::issuing("abc123").with_user(profile("alice"), "pw");
    let harness = Harness::new(api);
    harness.shell.log_in(login_form("alice", "pw")).await?;
    harness.settle().await;
    let shell = harness.shell.clone();
    harness.api.while_in_flight(move || {
        shell.sign_out();
    });

    let user = harness.shell.update_job("alice", 42).await?;

    assert!(user.has_applied(42));
    assert_eq!(harness.state(), AuthState::Anonymous);
    assert!(!harness.store().has_leftovers());
    Ok(())
}

#[tokio::test]
async fn test_profile_fetch_failure_signs_out() -> anyhow::Result<()> {
    let api = FakeApi::issuing("abc123").with_user(profile("alice"), "pw");
    let harness = Harness::new(api);
    harness.shell.log_in(login_form("alice", "pw")).await?;
    harness.api.fail_profile_fetches();

    harness.settle().await;

    assert_eq!(harness.state(), AuthState::Anonymous);
    assert!(!harness.store().has_leftovers());
    assert_eq!(harness.api.token(), None);
    Ok(())
}

#[tokio::test]
async fn test_refresh_for_a_dropped_session_is_discarded() -> anyhow::Result<()> {
    let api = FakeApi::issuing("abc123").with_user(profile("alice"), "pw");
    let harness = Harness::new(api);
    harness.shell.log_in(login_form("alice", "pw")).await?;
    harness.shell.sign_out();

    harness
        .shell
        .refresh_profile("alice".to_owned(), "abc123".to_owned())
        .await;

    assert_eq!(harness.state(), AuthState::Anonymous);
    assert_eq!(harness.storage.get("currentUser"), None);
    Ok(())
}

#[tokio::test]
async fn test_restore_session_from_storage() -> anyhow::Result<()> {
    let api = FakeApi::default();
    let storage = jobly_web::storage::MemoryStorage::default();
    let store = SessionStore::new(storage);
    store.save_token("stored-token");
    store.save_user(&profile("alice"));

    let state = restore_session(&AuthState::Anonymous, &api, &store);

    assert_eq!(state.user(), Some(&profile("alice")));
    assert_eq!(state.token(), Some("stored-token"));
    assert_eq!(api.token().as_deref(), Some("stored-token"));
    Ok(())
}

#[tokio::test]
async fn test_restore_session_is_a_noop_when_user_is_set() -> anyhow::Result<()> {
    let api = FakeApi::issuing("abc123").with_user(profile("alice"), "pw");
    let harness = Harness::new(api);
    harness.shell.log_in(login_form("alice", "pw")).await?;
    let before = harness.state();

    let other = SessionStore::new(jobly_web::storage::MemoryStorage::default());
    other.save_token("someone-else");
    other.save_user(&profile("mallory"));
    let after = restore_session(&before, &harness.api, &other);

    assert_eq!(after, before);
    assert_eq!(harness.api.token().as_deref(), Some("abc123"));
    Ok(())
}

#[tokio::test]
async fn test_incomplete_stored_session_is_wiped() -> anyhow::Result<()> {
    let api = FakeApi::default();
    let storage = jobly_web::storage::MemoryStorage::default();
    let store = SessionStore::new(storage.clone());
    store.save_token("orphan-token");

    let state = restore_session(&AuthState::Anonymous, &api, &store);

    assert_eq!(state, AuthState::Anonymous);
    assert_eq!(storage.get("token"), None);
    assert_eq!(api.token(), None);
    Ok(())
}

#[tokio::test]
async fn test_unreadable_stored_user_is_wiped() -> anyhow::Result<()> {
    let api = FakeApi::default();
    let storage = jobly_web::storage::MemoryStorage::default();
    storage.set("token", "abc123")?;
    storage.set("currentUser", "[object Object]")?;

    let state = restore_session(&AuthState::Anonymous, &api, &SessionStore::new(storage.clone()));

    assert_eq!(state, AuthState::Anonymous);
    assert_eq!(storage.get("token"), None);
    assert_eq!(storage.get("currentUser"), None);
    Ok(())
}
