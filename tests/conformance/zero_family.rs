//! Zero Family Tests
//!
//! Null and the zero value are one state: zero decodes as invalid and an
//! invalid value encodes as the zero literal, never `null`.

use crate::{init_tracing, time_value1, time_value2, TIME_MILLIS};
use nullable::zero::{Bool, Bytes, Float64, Int32, Int64, Str, Timestamp, Uint64};
use nullable::{
    epoch, DriverValue, MarshalJson, MarshalText, Scan, UnmarshalJson, UnmarshalText, Valuer,
};

// ============================================================================
// JSON
// ============================================================================

#[test]
fn invalid_encodes_zero_literal() {
    init_tracing();

    assert_eq!(Int64::null().marshal_json().unwrap(), b"0");
    assert_eq!(Uint64::null().marshal_json().unwrap(), b"0");
    assert_eq!(Float64::null().marshal_json().unwrap(), b"0");
    assert_eq!(Bool::null().marshal_json().unwrap(), b"false");
    assert_eq!(Str::null().marshal_json().unwrap(), br#""""#);
    assert_eq!(Bytes::null().marshal_json().unwrap(), br#""""#);
    assert_eq!(Timestamp::null().marshal_json().unwrap(), b"0");
}

#[test]
fn invalid_with_stale_value_still_encodes_zero() {
    assert_eq!(Int64::new(12345, false).marshal_json().unwrap(), b"0");
    assert_eq!(Str::new("stale".to_string(), false).marshal_json().unwrap(), br#""""#);
}

#[test]
fn null_blank_and_zero_decode_invalid() {
    let inputs: [&[u8]; 4] = [b"null", br#""""#, b"0", br#""0""#];
    for input in inputs {
        let mut i = Int64::from(5);
        i.unmarshal_json(input).unwrap();
        assert!(!i.valid, "{:?} decoded as valid", std::str::from_utf8(input));
        assert_eq!(i.value, 0);
    }

    let mut s = Str::from("x".to_string());
    s.unmarshal_json(br#""""#).unwrap();
    assert!(!s.valid);

    let mut b = Bool::from(true);
    b.unmarshal_json(b"false").unwrap();
    assert!(!b.valid);
}

#[test]
fn non_zero_decodes_valid() {
    let mut i = Int32::default();
    i.unmarshal_json(b"12345").unwrap();
    assert_eq!((i.value, i.valid), (12345, true));

    let mut s = Str::default();
    s.unmarshal_json(br#""test""#).unwrap();
    assert_eq!(s.value, "test");
    assert!(s.valid);

    let mut t = Timestamp::default();
    t.unmarshal_json(TIME_MILLIS.to_string().as_bytes()).unwrap();
    assert!(t.valid);
    assert!(t.exact_equal(&Timestamp::from(time_value1())));
}

#[test]
fn decode_errors_leave_invalid() {
    let mut i = Int32::from(9);
    assert!(i.unmarshal_json(b":)").unwrap_err().is_syntax());
    assert!(!i.valid);

    let mut i = Int32::from(9);
    assert!(i.unmarshal_json(br#"{"Int32":12345,"Valid":true}"#).is_err());
    assert!(!i.valid);

    let mut t = Timestamp::from(time_value1());
    assert!(t.unmarshal_json(br#""soon""#).is_err());
    assert!(!t.valid);
}

#[test]
fn legacy_quoted_null_timestamp_is_zero() {
    let mut t = Timestamp::from(time_value1());
    t.unmarshal_json(br#""null""#).unwrap();
    assert!(!t.valid);
    assert_eq!(t.marshal_json().unwrap(), b"0");

    let mut s = Str::default();
    s.unmarshal_json(br#""null""#).unwrap();
    assert!(s.valid);
    assert_eq!(s.value, "null");
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn text_codec() {
    let mut i = Int32::default();
    i.unmarshal_text(b"0").unwrap();
    assert!(!i.valid);
    assert_eq!(i.marshal_text().unwrap(), b"0");

    i.unmarshal_text(b"").unwrap();
    assert!(!i.valid);

    i.unmarshal_text(b"null").unwrap();
    assert!(!i.valid);

    i.unmarshal_text(b"-7").unwrap();
    assert_eq!((i.value, i.valid), (-7, true));
    assert_eq!(i.marshal_text().unwrap(), b"-7");

    assert_eq!(Bool::null().marshal_text().unwrap(), b"false");
    assert_eq!(Str::null().marshal_text().unwrap(), b"");
}

// ============================================================================
// Driver binding
// ============================================================================

#[test]
fn zero_binds_as_null() {
    assert_eq!(Int64::new(0, true).driver_value().unwrap(), DriverValue::Null);
    assert_eq!(Str::new(String::new(), true).driver_value().unwrap(), DriverValue::Null);
    assert_eq!(Timestamp::new(epoch(), true).driver_value().unwrap(), DriverValue::Null);
    assert_eq!(Int64::from(3).driver_value().unwrap(), DriverValue::Int64(3));
}

#[test]
fn scanned_zero_is_invalid() {
    let mut b = Bool::default();
    b.scan(DriverValue::Bool(false)).unwrap();
    assert!(!b.valid);
    b.scan(DriverValue::Bool(true)).unwrap();
    assert!(b.valid);

    let mut s = Str::default();
    s.scan(DriverValue::String(String::new())).unwrap();
    assert!(!s.valid);
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn null_equals_zero() {
    assert_eq!(Int64::null(), Int64::new(0, true));
    assert_eq!(Int64::new(12345, false), Int64::new(0, true));
    assert_ne!(Int64::from(1), Int64::null());

    assert!(Timestamp::new(time_value1(), false).equal(&Timestamp::new(epoch(), true)));
    assert!(Timestamp::from(time_value1()).equal(&Timestamp::from(time_value2())));
    assert!(!Timestamp::from(time_value1()).exact_equal(&Timestamp::from(time_value2())));
}

#[test]
fn is_zero() {
    assert!(Int64::null().is_zero());
    assert!(Int64::new(0, true).is_zero());
    assert!(!Int64::from(1).is_zero());
    assert!(Bytes::from(Vec::new()).is_zero());
}
