use super::*;

fn header<'a>(headers: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn unauthenticated_sends_only_content_type() {
    let headers = build_headers(&AuthState::Unauthenticated);
    assert_eq!(headers, vec![(CONTENT_TYPE, "application/json".to_owned())]);
}

#[test]
fn loading_sends_no_authorization() {
    let headers = build_headers(&AuthState::Loading);
    assert_eq!(header(&headers, AUTHORIZATION), None);
    assert_eq!(header(&headers, CONTENT_TYPE), Some("application/json"));
}

#[test]
fn authenticated_adds_bearer_token() {
    let state = AuthState::authenticated("abc.def.ghi", "a@x.com").unwrap();
    let headers = build_headers(&state);
    assert_eq!(header(&headers, AUTHORIZATION), Some("Bearer abc.def.ghi"));
    assert_eq!(header(&headers, CONTENT_TYPE), Some("application/json"));
}

#[test]
fn headers_follow_token_changes() {
    let first = build_headers(&AuthState::authenticated("one", "a@x.com").unwrap());
    let second = build_headers(&AuthState::authenticated("two", "a@x.com").unwrap());
    assert_eq!(header(&first, AUTHORIZATION), Some("Bearer one"));
    assert_eq!(header(&second, AUTHORIZATION), Some("Bearer two"));
}
