#![cfg(feature = "serde")]

use null_byte::{Byte, Error};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Patch {
    #[serde(default, skip_serializing_if = "Byte::is_unset")]
    grade: Byte,
    #[serde(default)]
    name: String,
}

#[test]
fn test_roundtrip_every_byte() {
    for value in 0..=u8::MAX {
        let original = Byte::from(value);
        assert!(original.is_valid());
        assert!(original.is_set());

        let encoded = original.marshal_json();
        let mut decoded = Byte::Unset;
        decoded.unmarshal_json(&encoded).unwrap();
        assert!(decoded.is_valid());
        assert_eq!(decoded.get(), Some(value), "byte {value:#04x}");
    }
}

#[derive(Debug, Deserialize)]
struct Required {
    grade: Byte,
}

#[test]
fn test_serde_roundtrip_every_ascii_byte() {
    for value in 0..=0x7fu8 {
        let encoded = serde_json::to_string(&Byte::from(value)).unwrap();
        let decoded: Byte = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, Byte::Present(value), "byte {value:#04x}");
    }
}

#[test]
fn test_marshal() {
    assert_eq!(Byte::Present(b'a').marshal_json(), b"\"a\"");
    assert_eq!(Byte::Present(b'"').marshal_json(), br#""\"""#);
    assert_eq!(Byte::Present(0).marshal_json(), br#""\u0000""#);
    assert_eq!(Byte::Present(0xe9).marshal_json(), b"\"\xe9\"");
    assert_eq!(Byte::Present(0xff).marshal_json(), [b'"', 0xff, b'"']);
    assert_eq!(Byte::Null.marshal_json(), b"null");
    assert_eq!(Byte::Unset.marshal_json(), b"null");
}

#[test]
fn test_marshal_matches_serde() {
    for byte in [Byte::Unset, Byte::Null, Byte::Present(b'x'), Byte::Present(0x7f)] {
        assert_eq!(byte.marshal_json(), serde_json::to_vec(&byte).unwrap());
    }
}

#[test]
fn test_unmarshal_null_and_empty() {
    for input in [&b""[..], b"null"] {
        let mut b = Byte::Present(1);
        b.unmarshal_json(input).unwrap();
        assert!(b.is_set());
        assert!(!b.is_valid());
        assert_eq!(b, Byte::Null);

        let mut b = Byte::Unset;
        b.unmarshal_json(input).unwrap();
        assert_eq!(b, Byte::Null);
    }
}

#[test]
fn test_unmarshal_empty_string_is_null() {
    let mut b = Byte::Present(1);
    b.unmarshal_json(br#""""#).unwrap();
    assert_eq!(b, Byte::Null);
}

#[test]
fn test_unmarshal_escape() {
    let mut b = Byte::Unset;
    b.unmarshal_json(br#""\n""#).unwrap();
    assert_eq!(b, Byte::Present(b'\n'));

    b.unmarshal_json(b"\"\xff\"").unwrap();
    assert_eq!(b, Byte::Present(0xff));
}

#[test]
fn test_unmarshal_multibyte_utf8() {
    for input in ["\"\u{e9}\"".as_bytes(), br#""\u00e9""#] {
        let mut b = Byte::Present(b'q');
        let err = b.unmarshal_json(input).unwrap_err();
        assert!(matches!(err, Error::TextTooLong { len: 2 }));
        assert_eq!(b, Byte::Present(b'q'));
    }
}

#[test]
fn test_unmarshal_too_long() {
    let mut b = Byte::Unset;
    let err = b.unmarshal_json(br#""ab""#).unwrap_err();
    assert!(matches!(err, Error::TextTooLong { len: 2 }));
    assert_eq!(
        err.to_string(),
        "cannot convert to byte, text len is greater than one (got 2)"
    );
}

#[test]
fn test_unmarshal_failure_leaves_state() {
    for start in [Byte::Unset, Byte::Null, Byte::Present(b'q')] {
        for input in [&br#""abc""#[..], b"{", b"12", "\"\u{100}\"".as_bytes(), b" null"] {
            let mut b = start;
            assert!(b.unmarshal_json(input).is_err());
            assert_eq!(b, start);
        }
    }
}

#[test]
fn test_unmarshal_malformed() {
    let mut b = Byte::Unset;
    assert!(matches!(b.unmarshal_json(b"\"a"), Err(Error::Json(_))));
    assert!(matches!(b.unmarshal_json(b"true"), Err(Error::Json(_))));
    assert!(matches!(b.unmarshal_json(b"65"), Err(Error::Json(_))));
}

#[test]
fn test_unmarshal_raw_byte_only_when_alone() {
    let mut b = Byte::Unset;
    assert!(matches!(b.unmarshal_json(b"\"\xe9\xe9\""), Err(Error::Json(_))));
    assert!(matches!(b.unmarshal_json(b"\xe9"), Err(Error::Json(_))));
    assert_eq!(b, Byte::Unset);
}

#[test]
fn test_struct_field_states() {
    let keep: Patch = serde_json::from_str(r#"{"name":"n"}"#).unwrap();
    assert_eq!(keep.grade, Byte::Unset);

    let clear: Patch = serde_json::from_str(r#"{"grade":null}"#).unwrap();
    assert_eq!(clear.grade, Byte::Null);

    let set: Patch = serde_json::from_str(r#"{"grade":"B"}"#).unwrap();
    assert_eq!(set.grade, Byte::Present(b'B'));
}

#[test]
fn test_struct_field_serialize() {
    let keep = Patch::default();
    assert_eq!(serde_json::to_string(&keep).unwrap(), r#"{"name":""}"#);

    let clear = Patch {
        grade: Byte::Null,
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_string(&clear).unwrap(),
        r#"{"grade":null,"name":""}"#
    );

    let set = Patch {
        grade: Byte::Present(b'C'),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_string(&set).unwrap(),
        r#"{"grade":"C","name":""}"#
    );
}

#[test]
fn test_missing_field_without_default_is_an_error() {
    let err = serde_json::from_str::<Required>("{}").unwrap_err();
    assert!(err.to_string().contains("missing field `grade`"));

    let clear: Required = serde_json::from_str(r#"{"grade":null}"#).unwrap();
    assert_eq!(clear.grade, Byte::Null);

    let set: Required = serde_json::from_str(r#"{"grade":"x"}"#).unwrap();
    assert_eq!(set.grade, Byte::Present(b'x'));
}

#[test]
fn test_serialize_non_ascii_fails() {
    for value in 0x80..=u8::MAX {
        assert!(serde_json::to_vec(&Byte::Present(value)).is_err());
    }
}

#[test]
fn test_serde_rejects() {
    assert!(serde_json::from_str::<Byte>("\"\u{e9}\"").is_err());
    assert!(serde_json::from_str::<Byte>(r#""ab""#).is_err());
    assert!(serde_json::from_str::<Byte>("\"\u{100}\"").is_err());
    assert!(serde_json::from_str::<Byte>("65").is_err());
    assert!(serde_json::from_str::<Byte>("[]").is_err());
}
