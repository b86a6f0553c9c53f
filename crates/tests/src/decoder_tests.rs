use crate::common;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::decode_identity_token;

#[test]
fn test_decode_returns_exactly_the_embedded_claims() {
    let claims = json!({
        "email": "s@uni.edu",
        "name": "Sam Lee",
        "picture": "https://lh3.example/sam.png",
        "iss": "https://accounts.google.com",
        "exp": 1_700_000_000,
        "email_verified": true,
    });
    let decoded = decode_identity_token(&common::token_for(&claims)).unwrap();
    assert_eq!(decoded.email.as_deref(), Some("s@uni.edu"));
    assert_eq!(decoded.name.as_deref(), Some("Sam Lee"));
    assert_eq!(serde_json::to_value(&decoded).unwrap(), claims);
}

#[test]
fn test_malformed_tokens_decode_to_none() {
    let valid_payload = common::token_for(&json!({"email": "a@b.c"}));
    let payload = valid_payload.split('.').nth(1).unwrap().to_string();
    let cases = vec![
        String::new(),
        "onlyone".to_string(),
        format!("a.{payload}"),
        format!("a.{payload}.c.d"),
        "a.%%%%.c".to_string(),
        "a.bm90IGpzb24.c".to_string(),
        "a.W10.c".to_string(),
        "a.//79.c".to_string(),
        "a..c".to_string(),
    ];
    for case in cases {
        assert_eq!(decode_identity_token(&case), None, "{case:?}");
    }
}
