use crate::TokenKind;

#[test]
fn test_token_kind_as_str() {
    assert_eq!(TokenKind::Access.as_str(), "ACCESS");
    assert_eq!(TokenKind::Refresh.as_str(), "REFRESH");
}

#[test]
fn test_token_kind_serializes_as_str() {
    for kind in [TokenKind::Access, TokenKind::Refresh] {
        let value = serde_json::to_value(kind).unwrap();

        assert_eq!(value, serde_json::Value::String(kind.as_str().to_string()));
    }
}

#[test]
fn test_token_kind_deserializes_wire_name() {
    let kind: TokenKind = serde_json::from_str("\"REFRESH\"").unwrap();

    assert_eq!(kind, TokenKind::Refresh);
}

#[test]
fn test_token_kind_deserialize_is_case_sensitive() {
    let result = serde_json::from_str::<TokenKind>("\"access\"");

    assert!(result.is_err());
}

#[test]
fn test_token_kind_display_matches_as_str() {
    assert_eq!(TokenKind::Access.to_string(), TokenKind::Access.as_str());
    assert_eq!(TokenKind::Refresh.to_string(), TokenKind::Refresh.as_str());
}
