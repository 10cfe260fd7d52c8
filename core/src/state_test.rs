use super::*;
use crate::identity::Session;

#[test]
fn default_state_is_loading() {
    assert_eq!(AuthState::default(), AuthState::Loading);
    assert!(AuthState::default().is_loading());
}

#[test]
fn authenticated_rejects_empty_token() {
    assert!(AuthState::authenticated("", "a@x.com").is_none());
}

#[test]
fn authenticated_exposes_token_and_email() {
    let state = AuthState::authenticated("tok", "a@x.com").unwrap();
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("tok"));
    assert_eq!(state.email(), Some("a@x.com"));
}

#[test]
fn unauthenticated_has_no_token() {
    let state = AuthState::Unauthenticated;
    assert!(!state.is_authenticated());
    assert!(!state.is_loading());
    assert_eq!(state.token(), None);
    assert_eq!(state.email(), None);
}

#[test]
fn serializes_with_status_tag() {
    let json = serde_json::to_value(AuthState::authenticated("t", "e@x.com").unwrap()).unwrap();
    assert_eq!(json["status"], "authenticated");
    assert_eq!(json["token"], "t");
    let json = serde_json::to_value(AuthState::Loading).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "loading" }));
}

#[test]
fn deserialize_rejects_empty_token() {
    let raw = serde_json::json!({ "status": "authenticated", "token": "", "email": "a@x.com" });
    assert!(serde_json::from_value::<AuthState>(raw).is_err());
}

#[test]
fn deserialize_accepts_tagged_states() {
    let raw = serde_json::json!({ "status": "authenticated", "token": "t", "email": "a@x.com" });
    assert_eq!(serde_json::from_value::<AuthState>(raw).unwrap(), AuthState::authenticated("t", "a@x.com").unwrap());
    let raw = serde_json::json!({ "status": "unauthenticated" });
    assert_eq!(serde_json::from_value::<AuthState>(raw).unwrap(), AuthState::Unauthenticated);
}

#[test]
fn session_deserialize_rejects_empty_token() {
    let raw = serde_json::json!({ "id_token": "", "email": "a@x.com" });
    assert!(serde_json::from_value::<Session>(raw).is_err());
    let raw = serde_json::json!({ "id_token": "t", "email": "a@x.com" });
    assert_eq!(serde_json::from_value::<Session>(raw).unwrap().id_token(), "t");
}
