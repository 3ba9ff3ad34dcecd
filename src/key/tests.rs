use super::*;

#[test]
fn test_key_type_is_case_sensitive() {
    let lower = KeyType::new("ed25519");
    let upper = KeyType::new("Ed25519");

    assert_ne!(lower, upper);
    assert_eq!(lower, KeyType::from("ed25519"));
    assert_eq!(lower.as_str(), "ed25519");
}

#[test]
#[should_panic(expected = "must not contain ':'")]
fn test_key_type_rejects_reserved_separator() {
    // A tag embedding ':' would render as "a:b:x" and re-parse with tag
    // "a", silently re-routing the key.
    let _ = KeyType::new("kms:aws");
}

#[test]
fn test_key_id_display_and_parse() {
    let key_id = KeyId::new(KeyType::new("secp256k1"), "02a1b2c3");
    let rendered = key_id.to_string();

    assert_eq!(rendered, "secp256k1:02a1b2c3");

    let parsed: KeyId = rendered.parse().unwrap();
    assert_eq!(parsed, key_id);
    assert_eq!(parsed.key_type().as_str(), "secp256k1");
    assert_eq!(parsed.id(), "02a1b2c3");
}

#[test]
fn test_key_id_payload_may_contain_separators() {
    // Only the first ':' splits; the payload is opaque and may embed more.
    let parsed: KeyId = "kms-aws:arn:aws:kms:eu-west-1:key/abc".parse().unwrap();

    assert_eq!(parsed.key_type().as_str(), "kms-aws");
    assert_eq!(parsed.id(), "arn:aws:kms:eu-west-1:key/abc");
}

#[test]
fn test_key_id_parse_rejects_malformed_input() {
    assert!("no-separator".parse::<KeyId>().is_err());
    assert!(":payload-only".parse::<KeyId>().is_err());
    assert!("tag-only:".parse::<KeyId>().is_err());
}

#[test]
fn test_key_id_serde_round_trip() {
    let key_id = KeyId::new(KeyType::new("ed25519"), "deadbeef");
    let json = serde_json::to_string(&key_id).unwrap();
    let back: KeyId = serde_json::from_str(&json).unwrap();

    assert_eq!(back, key_id);
}

#[test]
fn test_seed_from_hex() {
    let seed = Seed::from_hex("00112233").unwrap();
    assert_eq!(seed.as_bytes(), &[0x00, 0x11, 0x22, 0x33]);
    assert_eq!(seed.len(), 4);
    assert!(!seed.is_empty());

    let err = Seed::from_hex("not hex").unwrap_err();
    assert_eq!(err.error_type(), "InvalidSeed");
}

#[test]
fn test_seed_debug_is_redacted() {
    let seed = Seed::new(vec![0xAA; 32]);
    let debug = format!("{:?}", seed);

    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("170")); // 0xAA must not leak through Debug
}
