//! MessagePack Codec Tests
//!
//! `Int64` and `Str` decode strictly under rmp-serde: `nil` is absence,
//! any other misfit is an error. The remaining kinds stay lenient.

#![cfg(feature = "msgpack")]

use optscalar::{BinaryCodec, Bool, CodecError, Float64, Int, Int64, Str, Tag};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
struct Record {
    id: Int64,
    name: Str,
}

#[derive(Serialize)]
struct LooseRecord<'a> {
    id: &'a str,
    name: i64,
}

#[derive(Serialize)]
struct NameOnly<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Lenient {
    count: Int,
    ratio: Float64,
    flag: Bool,
}

#[derive(Serialize)]
struct LooseLenient<'a> {
    count: &'a str,
    ratio: &'a str,
    flag: u8,
}

// ============================================================================
// Struct Round Trips
// ============================================================================

mod records {
    use super::*;

    #[test]
    fn test_valid_round_trip() {
        let record = Record {
            id: Int64::new(-40, true),
            name: Str::new("ada", true),
        };
        let bytes = rmp_serde::to_vec_named(&record).unwrap();
        let back: Record = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_invalid_round_trip() {
        let record = Record {
            id: Int64::new(-40, false),
            name: Str::new("ada", false),
        };
        let bytes = rmp_serde::to_vec_named(&record).unwrap();
        let back: Record = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(back, Record::default());
    }

    #[test]
    fn test_positional_encoding() {
        let record = Record {
            id: Int64::new(i64::MAX, true),
            name: Str::new("", true),
        };
        let bytes = rmp_serde::to_vec(&record).unwrap();
        let back: Record = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(back.id.get(), (i64::MAX, true));
        assert_eq!(back.name.get(), ("", true));
    }

    #[test]
    fn test_missing_key_is_absent() {
        let bytes = rmp_serde::to_vec_named(&NameOnly { name: "only" }).unwrap();
        let back: Record = rmp_serde::from_slice(&bytes).unwrap();
        assert!(!back.id.ok());
        assert_eq!(back.name.get(), ("only", true));
    }

    #[test]
    fn test_mismatch_fails_the_document() {
        let bytes = rmp_serde::to_vec_named(&LooseRecord { id: "seven", name: 7 }).unwrap();
        let err = rmp_serde::from_slice::<Record>(&bytes).unwrap_err();
        assert!(
            err.to_string().contains("unable to decode str element into Int64"),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_sequence_with_nil() {
        let items = vec![Int64::new(1, true), Int64::new(0, false), Int64::new(3, true)];
        let bytes = rmp_serde::to_vec(&items).unwrap();
        let back: Vec<Int64> = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(back, vec![Int64::new(1, true), Int64::default(), Int64::new(3, true)]);
    }
}

// ============================================================================
// Kinds Without A Binary Hook
// ============================================================================

mod lenient_kinds {
    use super::*;

    #[test]
    fn test_round_trip() {
        let value = Lenient {
            count: Int::new(12, true),
            ratio: Float64::new(0.75, true),
            flag: Bool::new(true, true),
        };
        let bytes = rmp_serde::to_vec_named(&value).unwrap();
        let back: Lenient = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_wrong_shapes_stay_silent() {
        let loose = LooseLenient {
            count: "twelve",
            ratio: "0.75",
            flag: 7,
        };
        let bytes = rmp_serde::to_vec_named(&loose).unwrap();
        let back: Lenient = rmp_serde::from_slice(&bytes).unwrap();
        assert!(!back.count.ok());
        assert!(!back.ratio.ok());
        assert_eq!(back.flag.get(), (false, false));
    }
}

// ============================================================================
// Single-Field Entry Points
// ============================================================================

mod binary_codec {
    use super::*;

    #[test]
    fn test_nil_is_absent_without_error() {
        let nil = Int64::new(9, false).marshal_binary().unwrap();
        assert_eq!(nil, vec![0xc0]);

        let mut i = Int64::new(9, true);
        i.unmarshal_binary(&nil).unwrap();
        assert!(!i.ok());

        let mut s = Str::new("x", true);
        s.unmarshal_binary(&nil).unwrap();
        assert!(!s.ok());
    }

    #[test]
    fn test_absence_marker_differs_from_zero() {
        let zero = Int64::new(0, true).marshal_binary().unwrap();
        let nil = Int64::new(0, false).marshal_binary().unwrap();
        assert_ne!(zero, nil);

        let mut i = Int64::default();
        i.unmarshal_binary(&zero).unwrap();
        assert_eq!(i.get(), (0, true));
    }

    #[test]
    fn test_mismatch_reports_tag_and_target() {
        let cases: Vec<(Vec<u8>, Tag)> = vec![
            (rmp_serde::to_vec(&1.5f64).unwrap(), Tag::Float),
            (rmp_serde::to_vec(&true).unwrap(), Tag::Bool),
            (rmp_serde::to_vec("1").unwrap(), Tag::Str),
            (rmp_serde::to_vec(&vec![1, 2]).unwrap(), Tag::Array),
            // bin8, one byte
            (vec![0xc4, 0x01, 0xff], Tag::Bin),
            // fixext1, type 1
            (vec![0xd4, 0x01, 0x00], Tag::Ext),
        ];
        for (bytes, tag) in cases {
            let mut i = Int64::new(1, true);
            let err = i.unmarshal_binary(&bytes).unwrap_err();
            assert_eq!(
                err,
                CodecError::TagMismatch {
                    tag,
                    target: "Int64"
                }
            );
            assert!(!i.ok());
        }
    }

    #[test]
    fn test_string_mismatch() {
        let bytes = rmp_serde::to_vec(&42u8).unwrap();
        let mut s = Str::default();
        let err = s.unmarshal_binary(&bytes).unwrap_err();
        assert_eq!(
            err,
            CodecError::TagMismatch {
                tag: Tag::Int,
                target: "String"
            }
        );
    }

    #[test]
    fn test_invalid_utf8_str_reports_bin() {
        // fixstr of length 1 holding 0xff
        let mut s = Str::new("x", true);
        let err = s.unmarshal_binary(&[0xa1, 0xff]).unwrap_err();
        assert_eq!(
            err,
            CodecError::TagMismatch {
                tag: Tag::Bin,
                target: "String"
            }
        );
        assert!(!s.ok());
    }

    #[test]
    fn test_trailing_bytes_are_rejected() {
        let mut i = Int64::new(9, true);
        let err = i.unmarshal_binary(&[0x01, 0x02]).unwrap_err();
        assert!(matches!(err, CodecError::Binary(_)));
        assert!(!i.ok());

        let mut s = Str::new("x", true);
        let mut bytes = Str::new("ok", true).marshal_binary().unwrap();
        bytes.push(0xc0);
        assert!(matches!(s.unmarshal_binary(&bytes), Err(CodecError::Binary(_))));
        assert_eq!(s.get(), ("", false));
    }

    #[test]
    fn test_truncated_input_is_engine_error() {
        let mut s = Str::new("x", true);
        let err = s.unmarshal_binary(&[]).unwrap_err();
        assert!(matches!(err, CodecError::Binary(_)));
        assert!(!s.ok());
    }
}

// ============================================================================
// Round Trips
// ============================================================================

proptest! {
    #[test]
    fn prop_int64_round_trip(v in any::<i64>()) {
        let bytes = Int64::new(v, true).marshal_binary().unwrap();
        let mut back = Int64::default();
        back.unmarshal_binary(&bytes).unwrap();
        prop_assert_eq!(back.get(), (v, true));
    }

    #[test]
    fn prop_string_round_trip(v in any::<String>()) {
        let bytes = Str::new(v.clone(), true).marshal_binary().unwrap();
        let mut back = Str::default();
        back.unmarshal_binary(&bytes).unwrap();
        prop_assert_eq!(back.get(), (v.as_str(), true));
    }

    #[test]
    fn prop_invalid_round_trip(id in any::<i64>(), name in ".*") {
        let record = Record {
            id: Int64::new(id, false),
            name: Str::new(name, false),
        };
        let bytes = rmp_serde::to_vec_named(&record).unwrap();
        let back: Record = rmp_serde::from_slice(&bytes).unwrap();
        prop_assert_eq!(back, Record::default());
    }
}
