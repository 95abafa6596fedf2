use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::testing::{Call, ScriptedTransport};
use crate::util::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

fn service(transport: &ScriptedTransport, storage: &MemoryStorage) -> AuthService<ScriptedTransport, MemoryStorage> {
    AuthService::new(transport.clone(), SessionStore::new(storage.clone()))
}

fn credentials() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() }
}

fn registration() -> RegistrationPayload {
    RegistrationPayload {
        email: "contact@acme.fr".to_owned(),
        password: "secret123".to_owned(),
        name_business: "Acme".to_owned(),
        siret: "12345678901234".to_owned(),
    }
}

fn seed_session(storage: &MemoryStorage, access: &str, refresh: &str) {
    SessionStore::new(storage.clone()).set(&SessionTokens { access: access.to_owned(), refresh: refresh.to_owned() });
}

fn stored(storage: &MemoryStorage) -> Option<SessionTokens> {
    SessionStore::new(storage.clone()).tokens()
}

fn http_error(status: u16, body: Value) -> ApiError {
    ApiError::Http { status, body }
}

// =============================================================
// login
// =============================================================

#[test]
fn login_posts_credentials_and_stores_tokens() {
    let transport = ScriptedTransport::replying(vec![Ok(json!({ "access": "T1", "refresh": "T2" }))]);
    let storage = MemoryStorage::new();
    let auth = service(&transport, &storage);

    let body = block_on(auth.login(&credentials())).unwrap();

    assert_eq!(body, json!({ "access": "T1", "refresh": "T2" }));
    assert_eq!(
        transport.calls(),
        vec![Call {
            method: "POST",
            path: LOGIN_PATH.to_owned(),
            body: Some(json!({ "email": "a@b.com", "password": "x" })),
            bearer: None,
        }]
    );
    assert!(auth.session().has_access_token());
    assert_eq!(stored(&storage), Some(SessionTokens { access: "T1".to_owned(), refresh: "T2".to_owned() }));
}

#[test]
fn login_replaces_previous_session() {
    let transport = ScriptedTransport::replying(vec![Ok(json!({ "access": "new", "refresh": "new-r" }))]);
    let storage = MemoryStorage::new();
    seed_session(&storage, "old", "old-r");

    block_on(service(&transport, &storage).login(&credentials())).unwrap();

    assert_eq!(stored(&storage).unwrap().access, "new");
    assert_eq!(stored(&storage).unwrap().refresh, "new-r");
}

#[test]
fn login_without_access_token_returns_body_and_stores_nothing() {
    let transport = ScriptedTransport::replying(vec![Ok(json!({ "message": "check your inbox" }))]);
    let storage = MemoryStorage::new();

    let body = block_on(service(&transport, &storage).login(&credentials())).unwrap();

    assert_eq!(body, json!({ "message": "check your inbox" }));
    assert!(storage.is_empty());
}

#[test]
fn login_failure_propagates_unchanged_and_keeps_session() {
    let failure = http_error(400, json!({ "detail": "invalid credentials" }));
    let transport = ScriptedTransport::replying(vec![Err(failure.clone())]);
    let storage = MemoryStorage::new();
    seed_session(&storage, "prev", "prev-r");

    let err = block_on(service(&transport, &storage).login(&credentials())).unwrap_err();

    assert_eq!(err, failure);
    assert_eq!(stored(&storage), Some(SessionTokens { access: "prev".to_owned(), refresh: "prev-r".to_owned() }));
    assert_eq!(transport.calls().len(), 1, "no retry");
}

#[test]
fn login_network_failure_leaves_empty_store_empty() {
    let transport = ScriptedTransport::replying(vec![Err(ApiError::Network("offline".to_owned()))]);
    let storage = MemoryStorage::new();

    let err = block_on(service(&transport, &storage).login(&credentials())).unwrap_err();

    assert_eq!(err, ApiError::Network("offline".to_owned()));
    assert!(storage.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_with_unwritable_storage_keeps_no_partial_session() {
    let transport = ScriptedTransport::replying(vec![Ok(json!({ "access": "T1", "refresh": "T2" }))]);
    let auth = AuthService::new(transport, SessionStore::browser());

    let body = block_on(auth.login(&credentials())).unwrap();

    assert_eq!(body["access"], json!("T1"));
    assert!(!auth.session().has_access_token());
    assert!(!auth.is_authenticated());
}

// =============================================================
// register
// =============================================================

#[test]
fn register_posts_payload_and_stores_nested_tokens() {
    let response = json!({ "user": { "email": "contact@acme.fr" }, "tokens": { "access": "A", "refresh": "R" } });
    let transport = ScriptedTransport::replying(vec![Ok(response.clone())]);
    let storage = MemoryStorage::new();

    let body = block_on(service(&transport, &storage).register(&registration())).unwrap();

    assert_eq!(body, response);
    let call = &transport.calls()[0];
    assert_eq!(call.path, REGISTER_PATH);
    assert_eq!(call.body.as_ref().unwrap()["siret"], json!("12345678901234"));
    assert_eq!(call.body.as_ref().unwrap()["name_business"], json!("Acme"));
    assert_eq!(stored(&storage), Some(SessionTokens { access: "A".to_owned(), refresh: "R".to_owned() }));
}

#[test]
fn register_without_tokens_object_stores_nothing() {
    let transport = ScriptedTransport::replying(vec![Ok(json!({ "access": "T1", "refresh": "T2" }))]);
    let storage = MemoryStorage::new();

    block_on(service(&transport, &storage).register(&registration())).unwrap();

    assert!(storage.is_empty());
}

#[test]
fn register_failure_propagates_and_keeps_session() {
    let failure = http_error(400, json!({ "siret": ["Le SIRET doit contenir exactement 14 chiffres"] }));
    let transport = ScriptedTransport::replying(vec![Err(failure.clone())]);
    let storage = MemoryStorage::new();
    seed_session(&storage, "prev", "prev-r");

    let err = block_on(service(&transport, &storage).register(&registration())).unwrap_err();

    assert_eq!(err, failure);
    assert_eq!(stored(&storage).unwrap().access, "prev");
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session_without_backend_call() {
    let transport = ScriptedTransport::default();
    let storage = MemoryStorage::new();
    seed_session(&storage, "T1", "T2");
    let auth = service(&transport, &storage);

    auth.logout();

    assert!(!auth.session().has_access_token());
    assert!(storage.is_empty());
    assert!(transport.calls().is_empty());
}

#[test]
fn logout_on_empty_session_is_harmless() {
    let storage = MemoryStorage::new();
    let auth = service(&ScriptedTransport::default(), &storage);
    auth.logout();
    auth.logout();
    assert!(!auth.session().has_access_token());
}

// =============================================================
// current_user
// =============================================================

#[test]
fn current_user_without_token_skips_request() {
    let transport = ScriptedTransport::replying(vec![Ok(json!({ "email": "a@b.com" }))]);
    let storage = MemoryStorage::new();

    assert!(block_on(service(&transport, &storage).current_user()).is_none());
    assert!(transport.calls().is_empty());
}

#[test]
fn current_user_sends_bearer_token() {
    let transport = ScriptedTransport::replying(vec![Ok(json!({ "id": 1, "email": "a@b.com", "name_business": "Acme" }))]);
    let storage = MemoryStorage::new();
    seed_session(&storage, "T1", "T2");

    let user = block_on(service(&transport, &storage).current_user()).unwrap();

    assert_eq!(user.email.as_deref(), Some("a@b.com"));
    assert_eq!(user.name_business.as_deref(), Some("Acme"));
    assert_eq!(
        transport.calls(),
        vec![Call { method: "GET", path: CURRENT_USER_PATH.to_owned(), body: None, bearer: Some("T1".to_owned()) }]
    );
}

#[test]
fn current_user_swallows_expired_token() {
    let transport = ScriptedTransport::replying(vec![Err(http_error(401, json!({ "detail": "Token is invalid or expired" })))]);
    let storage = MemoryStorage::new();
    seed_session(&storage, "stale", "r");

    assert!(block_on(service(&transport, &storage).current_user()).is_none());
    assert!(storage.get("autodf_token").is_some(), "a failed lookup does not end the session");
}

#[test]
fn current_user_swallows_network_and_malformed_responses() {
    let storage = MemoryStorage::new();
    seed_session(&storage, "T1", "T2");

    let offline = ScriptedTransport::replying(vec![Err(ApiError::Network("offline".to_owned()))]);
    assert!(block_on(service(&offline, &storage).current_user()).is_none());

    let malformed = ScriptedTransport::replying(vec![Ok(json!(["not", "an", "object"]))]);
    assert!(block_on(service(&malformed, &storage).current_user()).is_none());
}

// =============================================================
// is_authenticated
// =============================================================

#[test]
fn is_authenticated_false_before_login_true_after() {
    let transport = ScriptedTransport::replying(vec![Ok(json!({ "access": "T1", "refresh": "T2" }))]);
    let storage = MemoryStorage::new();
    let auth = service(&transport, &storage);

    assert!(!auth.is_authenticated());
    block_on(auth.login(&credentials())).unwrap();
    assert!(auth.is_authenticated());
    auth.logout();
    assert!(!auth.is_authenticated());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_service_is_never_authenticated_outside_browser() {
    let auth = AuthService::browser();
    auth.session().set(&SessionTokens { access: "T1".to_owned(), refresh: "T2".to_owned() });
    assert!(!auth.is_authenticated());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_service_login_is_unavailable_outside_browser() {
    let auth = AuthService::browser();
    assert_eq!(block_on(auth.login(&credentials())), Err(ApiError::Unavailable));
}

// =============================================================
// sync_state
// =============================================================

#[test]
fn sync_state_follows_store_across_login_and_logout() {
    let transport = ScriptedTransport::replying(vec![Ok(json!({ "access": "T1", "refresh": "T2" }))]);
    let storage = MemoryStorage::new();
    let auth = service(&transport, &storage);
    let mut state = AuthState::default();

    block_on(auth.login(&credentials())).unwrap();
    assert!(auth.sync_state(&mut state));
    assert!(state.authenticated);

    state.user = Some(User::default());
    auth.logout();
    assert!(auth.sync_state(&mut state));
    assert_eq!(state, AuthState::default());
}
